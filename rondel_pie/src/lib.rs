// Copyright 2026 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry and label layout for annotated pie/donut charts.
//!
//! This crate is the math half of a pie chart: it turns labeled values into
//! - per-segment arc definitions (center, radii, start/end angles, paint),
//! - title/subtitle/footer anchors in one of several header layout modes,
//! - inner labels and collision-resolved outer labels, and
//! - connector polylines linking outer labels to their segments,
//!
//! all bundled into one [`PieLayout`] per pass. Rendering is downstream: the
//! collaborator implements [`rondel_text::TextMeasurer`], hands a [`PieSpec`]
//! to [`PieLayout::arrange`] (or wraps it in a [`PieChart`] for updates and
//! interaction queries), and draws whatever geometry comes back.
//!
//! Text shaping and actual drawing are out of scope; labels store plain
//! strings plus the measured boxes the collaborator reported.

#![no_std]

extern crate alloc;

mod color;
mod error;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod geometry;
mod labels;
mod layout;
mod pie;
mod sector;
mod sort;
mod spec;
mod text_block;

pub use color::{DEFAULT_SEGMENT_COLORS, segment_fills};
pub use error::{ConfigIssue, DataIssue, LayoutWarning, PieError};
pub use format::LabelFormat;
pub use geometry::{Radii, assign_angles, compute_pie_center, compute_radii, point_on_circle, total_value};
pub use labels::{ConnectorLine, LabelCandidate, LabelKind, Side};
pub use layout::PieLayout;
pub use pie::{OpenSegmentInfo, PieChart, PropValue, UpdateEffect};
pub use sector::{SegmentArc, StrokeStyle};
pub use sort::{SortOrder, sort_indices};
pub use spec::{
    Datum, EffectsSpec, FooterSpec, HeaderSpec, LabelStyle, LabelsSpec, LineSpec, PieSpec,
    TextSpec,
};
pub use text_block::{
    FooterLocation, HeaderLocation, PlacedText, TextBlock, TextBlockKind, TextBlocks,
    footer_anchor, heading_anchors,
};
