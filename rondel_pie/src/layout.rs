// Copyright 2026 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The layout pass.
//!
//! [`PieLayout::arrange`] runs the whole pipeline over one [`PieSpec`]:
//! validate, sort, assign colors, measure text, compute radii and center,
//! assign angles, place headings and labels, resolve collisions, and build
//! connectors. Every pass allocates a fresh output; nothing is published on
//! error, and identical inputs produce identical layouts.
//!
//! The caller provides the [`TextMeasurer`]; measurement therefore always
//! happens before the geometry that depends on it, which is the whole
//! ordering contract between engine and renderer.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{Point, Rect};
use peniko::Color;
use rondel_text::TextMeasurer;

use crate::color::segment_fills;
use crate::error::{LayoutWarning, PieError};
use crate::format::LabelFormat;
use crate::geometry::{Radii, assign_angles, compute_pie_center, compute_radii, total_value};
use crate::labels::{
    ConnectorLine, LabelCandidate, connector_lines, inner_candidates, outer_candidates,
    resolve_collisions,
};
use crate::sector::{SegmentArc, StrokeStyle};
use crate::sort::sort_indices;
use crate::spec::PieSpec;
use crate::text_block::{
    HeaderLocation, PlacedText, TextBlocks, footer_anchor, heading_anchors,
};

/// The complete geometry of one layout pass.
///
/// Everything a renderer needs: arcs, heading/footer anchors, label anchors,
/// connector polylines, plus any non-fatal warnings recorded along the way.
/// Handing this struct over is the "positions finalized" end of the
/// pipeline; any fade-in or transition effects happen downstream.
#[derive(Clone, Debug, PartialEq)]
pub struct PieLayout {
    /// The canvas rectangle, from the origin.
    pub view: Rect,
    /// Background paint for the canvas. `None` is transparent.
    pub background: Option<Color>,
    /// The pie center used by every radial computation of this pass.
    pub center: Point,
    /// Inner and outer radii.
    pub radii: Radii,
    /// Sum of all data values.
    pub total_value: f64,
    /// Segment arcs in render order; each keeps its original data index.
    pub segments: Vec<SegmentArc>,
    /// Outline stroke shared by every segment, if any.
    pub segment_stroke: Option<StrokeStyle>,
    /// Placed title, when the title text is non-empty.
    pub title: Option<PlacedText>,
    /// Placed subtitle, when the subtitle text is non-empty.
    pub subtitle: Option<PlacedText>,
    /// Placed footer, when the footer text is non-empty.
    pub footer: Option<PlacedText>,
    /// Inner labels, one per labeled non-zero segment.
    pub inner_labels: Vec<LabelCandidate>,
    /// Outer labels after collision resolution.
    pub outer_labels: Vec<LabelCandidate>,
    /// Connector polylines; empty when lines are disabled or outer labels
    /// are formatted as `none`.
    pub connectors: Vec<ConnectorLine>,
    /// Non-fatal conditions encountered while laying out.
    pub warnings: Vec<LayoutWarning>,
}

impl PieLayout {
    /// Runs a full layout pass over `spec`.
    ///
    /// Fails fast: all validation happens before any geometry is computed,
    /// so an `Err` means no partial layout ever existed.
    pub fn arrange(spec: &PieSpec, measurer: &dyn TextMeasurer) -> Result<Self, PieError> {
        let total = total_value(&spec.data)?;
        let order = sort_indices(&spec.data, spec.sort_order);
        let fills = segment_fills(&spec.data, &order, &spec.segment_palette)?;

        // Text extents drive the vertical budget, so measure before radii.
        let blocks = TextBlocks::measure(&spec.header, &spec.footer, measurer);
        let header_height = if spec.header.location == HeaderLocation::PieCenter {
            0.0
        } else {
            blocks.heading_height(spec.header.title_subtitle_padding)
        };
        let (radii, radius_warning) = compute_radii(
            spec.canvas_size,
            spec.canvas_padding,
            header_height,
            blocks.footer.extent.height,
            spec.donut_ratio,
        );
        let center = compute_pie_center(
            spec.header.location,
            &blocks,
            spec.canvas_padding,
            spec.header.title_subtitle_padding,
            spec.canvas_size,
            spec.pie_center_offset,
        );

        let values: Vec<f64> = order.iter().map(|&i| spec.data[i].value).collect();
        let angles = assign_angles(&values, total, spec.start_angle);
        let segments: Vec<SegmentArc> = order
            .iter()
            .zip(angles)
            .zip(fills)
            .map(|((&data_index, (start_angle, end_angle)), fill)| {
                let datum = &spec.data[data_index];
                SegmentArc {
                    data_index,
                    label: datum.label.clone(),
                    value: datum.value,
                    percentage: 100.0 * datum.value / total,
                    fill,
                    center,
                    inner_radius: radii.inner,
                    outer_radius: radii.outer,
                    start_angle,
                    end_angle,
                }
            })
            .collect();

        let (title_anchor, subtitle_anchor) = heading_anchors(
            spec.header.location,
            &blocks,
            center,
            spec.canvas_size,
            spec.canvas_padding,
            spec.header.title_subtitle_padding,
        );
        let title = title_anchor.map(|(anchor, align)| PlacedText {
            text: spec.header.title.text.clone(),
            anchor,
            align,
            style: spec.header.title.style.clone(),
            color: spec.header.title.color,
        });
        let subtitle = subtitle_anchor.map(|(anchor, align)| PlacedText {
            text: spec.header.subtitle.text.clone(),
            anchor,
            align,
            style: spec.header.subtitle.style.clone(),
            color: spec.header.subtitle.color,
        });
        let footer = blocks.footer.exists.then(|| {
            let (anchor, align) = footer_anchor(
                spec.footer.location,
                &blocks.footer,
                spec.canvas_size,
                spec.canvas_padding,
            );
            PlacedText {
                text: spec.footer.text.text.clone(),
                anchor,
                align,
                style: spec.footer.text.style.clone(),
                color: spec.footer.text.color,
            }
        });

        let inner_labels = inner_candidates(&segments, &spec.labels, measurer);
        let mut outer_labels = outer_candidates(&segments, &spec.labels, measurer);
        resolve_collisions(&mut outer_labels, spec.labels.min_vertical_gap);
        let connectors =
            if spec.labels.lines.enabled && spec.labels.outer.format != LabelFormat::None {
                connector_lines(&segments, &outer_labels, &spec.labels)
            } else {
                Vec::new()
            };

        Ok(Self {
            view: spec.canvas_size.to_rect(),
            background: spec.background,
            center,
            radii,
            total_value: total,
            segments,
            segment_stroke: spec.segment_stroke,
            title,
            subtitle,
            footer,
            inner_labels,
            outer_labels,
            connectors,
            warnings: radius_warning.into_iter().collect(),
        })
    }
}
