// Copyright 2026 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pie math: totals, angle assignment, radii, and the pie center.
//!
//! Everything here is a pure function of its inputs. Angles are radians in
//! the `kurbo` arc convention: 0 at 3 o'clock, increasing toward +y, which
//! reads as clockwise with screen-down y. A full pie covers exactly
//! `[start, start + 2π)`.

extern crate alloc;

use alloc::vec::Vec;

use core::f64::consts::TAU;

use kurbo::{Point, Size, Vec2};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::error::{DataIssue, LayoutWarning, PieError};
use crate::spec::Datum;
use crate::text_block::{HeaderLocation, TextBlocks};

/// Inner and outer pie radii.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Radii {
    /// Inner radius; 0 for a solid pie, positive for a donut.
    pub inner: f64,
    /// Outer radius.
    pub outer: f64,
}

/// Sums the data values, validating that a proportional pie is possible.
///
/// Negative values and a non-positive total are [`PieError::InvalidData`];
/// individual zero values are fine (they become zero-width arcs).
pub fn total_value(data: &[Datum]) -> Result<f64, PieError> {
    if data.is_empty() {
        return Err(DataIssue::Empty.into());
    }
    let mut total = 0.0;
    for (index, datum) in data.iter().enumerate() {
        if datum.value < 0.0 {
            return Err(DataIssue::NegativeValue {
                index,
                value: datum.value,
            }
            .into());
        }
        total += datum.value;
    }
    if total <= 0.0 {
        return Err(DataIssue::NonPositiveTotal(total).into());
    }
    Ok(total)
}

/// Assigns `[start, end)` angles proportional to each value.
///
/// `values` are in render order; the caller guarantees `total > 0`. A zero
/// value yields a zero-width arc at its cumulative position. The sweeps sum
/// to exactly `2π` up to floating error.
pub fn assign_angles(values: &[f64], total: f64, start_offset: f64) -> Vec<(f64, f64)> {
    let mut cumulative = 0.0;
    values
        .iter()
        .map(|&value| {
            let start = start_offset + TAU * cumulative / total;
            cumulative += value;
            let end = start_offset + TAU * cumulative / total;
            (start, end)
        })
        .collect()
}

/// Computes the pie radii from the canvas and the space text already claimed.
///
/// The outer radius is half the smaller of the horizontal and vertical space
/// left after padding and header/footer heights. If that space is degenerate
/// the radius clamps to 1 px and a [`LayoutWarning::GeometryConflict`] is
/// returned alongside.
pub fn compute_radii(
    canvas: Size,
    padding: f64,
    header_height: f64,
    footer_height: f64,
    donut_ratio: f64,
) -> (Radii, Option<LayoutWarning>) {
    let available_width = canvas.width - 2.0 * padding;
    let available_height = canvas.height - 2.0 * padding - header_height - footer_height;

    let outer = 0.5 * available_width.min(available_height);
    let (outer, warning) = if outer < 1.0 {
        (
            1.0,
            Some(LayoutWarning::GeometryConflict {
                available_width,
                available_height,
            }),
        )
    } else {
        (outer, None)
    };

    let radii = Radii {
        inner: outer * donut_ratio.clamp(0.0, 1.0),
        outer,
    };
    (radii, warning)
}

/// Computes the pie center.
///
/// Horizontally the pie sits at the canvas middle plus the configured offset.
/// Vertically it centers in the band between the bottom of the heading block
/// (when the header location places text above the pie) and the top of the
/// footer.
pub fn compute_pie_center(
    location: HeaderLocation,
    blocks: &TextBlocks,
    padding: f64,
    title_subtitle_padding: f64,
    canvas: Size,
    offset: Vec2,
) -> Point {
    let mut header_offset = padding;
    if location != HeaderLocation::PieCenter {
        if blocks.title.exists {
            header_offset += blocks.title.extent.height;
        }
        if blocks.title.exists && blocks.subtitle.exists {
            header_offset += title_subtitle_padding;
        }
        if blocks.subtitle.exists {
            header_offset += blocks.subtitle.extent.height;
        }
    }
    let footer_offset = padding + blocks.footer.extent.height;

    let x = 0.5 * canvas.width + offset.x;
    let y = header_offset + 0.5 * (canvas.height - header_offset - footer_offset) + offset.y;
    Point::new(x, y)
}

/// Returns the point at `radius` along `angle` from `center`.
pub fn point_on_circle(center: Point, radius: f64, angle: f64) -> Point {
    Point::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}

/// Normalizes an angle into `[0, 2π)`.
pub(crate) fn normalize_angle(angle: f64) -> f64 {
    let a = angle % TAU;
    if a < 0.0 { a + TAU } else { a }
}
