// Copyright 2026 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Segment color assignment.
//!
//! Colors come from a palette cycled by render position, except where a datum
//! carries an explicit color, which always wins. The default palette is the
//! 50-entry set shipped by the original d3 pie plugin, so charts with many
//! segments stay distinguishable before the cycle wraps.

extern crate alloc;

use alloc::vec::Vec;

use peniko::Color;

use crate::error::{ConfigIssue, PieError};
use crate::spec::Datum;

/// The default segment palette.
pub const DEFAULT_SEGMENT_COLORS: [Color; 50] = [
    Color::from_rgb8(0x24, 0x84, 0xc1),
    Color::from_rgb8(0x65, 0xa6, 0x20),
    Color::from_rgb8(0x7b, 0x68, 0x88),
    Color::from_rgb8(0xa0, 0x5d, 0x56),
    Color::from_rgb8(0x96, 0x1a, 0x1a),
    Color::from_rgb8(0xd8, 0xd2, 0x3a),
    Color::from_rgb8(0xe9, 0x81, 0x25),
    Color::from_rgb8(0xd0, 0x74, 0x3c),
    Color::from_rgb8(0x63, 0x52, 0x22),
    Color::from_rgb8(0x6a, 0xda, 0x6a),
    Color::from_rgb8(0x0c, 0x61, 0x97),
    Color::from_rgb8(0x7d, 0x90, 0x58),
    Color::from_rgb8(0x20, 0x7f, 0x33),
    Color::from_rgb8(0x44, 0xb9, 0xb0),
    Color::from_rgb8(0xbc, 0xa4, 0x4a),
    Color::from_rgb8(0xe4, 0xa1, 0x4b),
    Color::from_rgb8(0xa3, 0xac, 0xb2),
    Color::from_rgb8(0x8c, 0xc3, 0xe9),
    Color::from_rgb8(0x69, 0xa6, 0xf9),
    Color::from_rgb8(0x5b, 0x38, 0x8f),
    Color::from_rgb8(0x54, 0x6e, 0x91),
    Color::from_rgb8(0x8b, 0xde, 0x95),
    Color::from_rgb8(0xd2, 0xab, 0x58),
    Color::from_rgb8(0x27, 0x3c, 0x71),
    Color::from_rgb8(0x98, 0xbf, 0x6e),
    Color::from_rgb8(0x4d, 0xaa, 0x4b),
    Color::from_rgb8(0x98, 0xab, 0xc5),
    Color::from_rgb8(0xcc, 0x10, 0x10),
    Color::from_rgb8(0x31, 0x38, 0x3b),
    Color::from_rgb8(0x00, 0x63, 0x91),
    Color::from_rgb8(0xc2, 0x64, 0x3f),
    Color::from_rgb8(0xb0, 0xa4, 0x74),
    Color::from_rgb8(0xa5, 0xa3, 0x9c),
    Color::from_rgb8(0xa9, 0xc2, 0xbc),
    Color::from_rgb8(0x22, 0xaf, 0x8c),
    Color::from_rgb8(0x7f, 0xce, 0xcf),
    Color::from_rgb8(0x98, 0x7a, 0xc6),
    Color::from_rgb8(0x3d, 0x3b, 0x87),
    Color::from_rgb8(0xb7, 0x7b, 0x1c),
    Color::from_rgb8(0xc9, 0xc2, 0xb6),
    Color::from_rgb8(0x80, 0x7e, 0xce),
    Color::from_rgb8(0x8d, 0xb2, 0x7c),
    Color::from_rgb8(0xbe, 0x66, 0xa2),
    Color::from_rgb8(0x9e, 0xd3, 0xc6),
    Color::from_rgb8(0x00, 0x64, 0x4b),
    Color::from_rgb8(0x00, 0x50, 0x64),
    Color::from_rgb8(0x77, 0x97, 0x9f),
    Color::from_rgb8(0x77, 0xe0, 0x79),
    Color::from_rgb8(0x9c, 0x73, 0xab),
    Color::from_rgb8(0x1f, 0x79, 0xa7),
];

/// Returns one fill per render position.
///
/// `order` holds original data indexes in render order, as produced by
/// [`crate::sort::sort_indices`]. Palette entries are applied cyclically by
/// render position; a datum's explicit color always wins.
pub fn segment_fills(
    data: &[Datum],
    order: &[usize],
    palette: &[Color],
) -> Result<Vec<Color>, PieError> {
    if palette.is_empty() {
        return Err(ConfigIssue::EmptyPalette.into());
    }
    Ok(order
        .iter()
        .enumerate()
        .map(|(position, &data_index)| {
            data[data_index]
                .color
                .unwrap_or(palette[position % palette.len()])
        })
        .collect())
}
