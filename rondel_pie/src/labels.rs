// Copyright 2026 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Label layout: inner labels, collision-resolved outer labels, connectors.
//!
//! The stages run in a fixed order, each consuming the previous stage's
//! output:
//!
//! 1. inner candidates, anchored at the radial middle of each segment;
//! 2. raw outer candidates, pushed out past the outer radius along each
//!    segment's midpoint angle and split into left/right side groups;
//! 3. a greedy top-to-bottom sweep per side group that enforces a minimum
//!    vertical gap between consecutive anchors;
//! 4. connector polylines from each segment's arc to its final anchor.
//!
//! The sweep is deliberately one-pass and non-backtracking: a pushed label
//! can drift away from its segment's true angle, and the connector geometry
//! relies on exactly that drift. Inner labels get no collision handling at
//! all; overlap on very thin segments is accepted. Zero-value segments never
//! produce a candidate.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Point;
use peniko::Color;
use rondel_text::{TextAnchor, TextExtent, TextMeasurer, TextStyle};
use smallvec::SmallVec;

use crate::format::{LabelFormat, label_text};
use crate::geometry::normalize_angle;
use crate::sector::SegmentArc;
use crate::spec::LabelsSpec;

/// Which ring a label belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LabelKind {
    /// Inside the segment, between inner and outer radius.
    Inner,
    /// Outside the pie, past the outer radius.
    Outer,
}

/// Which vertical stack an outer label collides within.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Left of the pie center; labels grow leftward from their anchor.
    Left,
    /// Right of the pie center; labels grow rightward from their anchor.
    Right,
}

/// One placed label.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelCandidate {
    /// Original data index of the segment this label annotates.
    pub segment_index: usize,
    /// Which ring the label belongs to.
    pub kind: LabelKind,
    /// Display text.
    pub text: String,
    /// Final anchor point; for outer labels, `y` may have been pushed by the
    /// collision sweep.
    pub anchor: Point,
    /// Measured bounding box of `text`.
    pub extent: TextExtent,
    /// How the renderer aligns the text against `anchor.x`.
    pub align: TextAnchor,
    /// Style used for measurement; the renderer draws with the same one.
    pub style: TextStyle,
    /// Fill paint.
    pub color: Color,
    /// Side group; `None` for inner labels.
    pub side: Option<Side>,
    /// Position within the side group after the collision sort; 0 for inner
    /// labels.
    pub group_index: usize,
    /// The segment's midpoint angle, kept for connector geometry.
    pub mid_angle: f64,
}

/// A polyline connecting an outer label to its segment's arc.
///
/// Either 2 points (arc → anchor) or 3 (arc → elbow → anchor).
#[derive(Clone, Debug, PartialEq)]
pub struct ConnectorLine {
    /// Original data index of the connected segment.
    pub segment_index: usize,
    /// Polyline points, from the arc outward.
    pub points: SmallVec<[Point; 3]>,
    /// Stroke paint.
    pub color: Color,
    /// Stroke width.
    pub width: f64,
}

/// Builds inner-label candidates, one per non-zero-value segment.
pub(crate) fn inner_candidates(
    arcs: &[SegmentArc],
    labels: &LabelsSpec,
    measurer: &dyn TextMeasurer,
) -> Vec<LabelCandidate> {
    candidates_at(
        arcs,
        labels.inner.format,
        &labels.inner.style,
        labels.inner.color,
        labels.percentage_decimals,
        measurer,
        |arc| {
            let radius = 0.5 * (arc.inner_radius + arc.outer_radius);
            (arc.point_at(radius), LabelKind::Inner, TextAnchor::Middle, None)
        },
    )
}

/// Builds raw outer-label candidates with their side classification.
///
/// Anchors sit `outer_distance` past the outer radius along the midpoint
/// angle. A midpoint whose normalized angle falls strictly inside the
/// configured left interval joins the left stack and aligns its text end to
/// the anchor; everything else joins the right stack and aligns its start.
pub(crate) fn outer_candidates(
    arcs: &[SegmentArc],
    labels: &LabelsSpec,
    measurer: &dyn TextMeasurer,
) -> Vec<LabelCandidate> {
    candidates_at(
        arcs,
        labels.outer.format,
        &labels.outer.style,
        labels.outer.color,
        labels.percentage_decimals,
        measurer,
        |arc| {
            let mid = normalize_angle(arc.mid_angle());
            let side = if mid > labels.left_side_start && mid < labels.left_side_end {
                Side::Left
            } else {
                Side::Right
            };
            let align = match side {
                Side::Left => TextAnchor::End,
                Side::Right => TextAnchor::Start,
            };
            let anchor = arc.point_at(arc.outer_radius + labels.outer_distance);
            (anchor, LabelKind::Outer, align, Some(side))
        },
    )
}

fn candidates_at(
    arcs: &[SegmentArc],
    format: LabelFormat,
    style: &TextStyle,
    color: Color,
    decimals: u8,
    measurer: &dyn TextMeasurer,
    place: impl Fn(&SegmentArc) -> (Point, LabelKind, TextAnchor, Option<Side>),
) -> Vec<LabelCandidate> {
    let mut out = Vec::new();
    for arc in arcs {
        // Zero-width arcs have no meaningful midpoint; they never get labels.
        if arc.value <= 0.0 {
            continue;
        }
        let Some(text) = label_text(format, &arc.label, arc.value, arc.percentage, decimals)
        else {
            continue;
        };
        let (anchor, kind, align, side) = place(arc);
        let extent = measurer.measure(&text, style);
        out.push(LabelCandidate {
            segment_index: arc.data_index,
            kind,
            text,
            extent,
            anchor,
            align,
            style: style.clone(),
            color,
            side,
            group_index: 0,
            mid_angle: arc.mid_angle(),
        });
    }
    out
}

/// Resolves vertical collisions within each side group.
///
/// Within a side, candidates are visited in ascending anchor-y order; any
/// candidate closer than `min_gap` to its predecessor is pushed down to
/// exactly `min_gap` below it. One pass, no backtracking: the last label may
/// drift off its segment's angle (or off-canvas) and that is accepted. The
/// two sides never interact.
pub(crate) fn resolve_collisions(candidates: &mut [LabelCandidate], min_gap: f64) {
    for side in [Side::Left, Side::Right] {
        let mut group: Vec<usize> = (0..candidates.len())
            .filter(|&i| candidates[i].side == Some(side))
            .collect();
        group.sort_by(|&a, &b| candidates[a].anchor.y.total_cmp(&candidates[b].anchor.y));

        let mut previous_y = f64::NEG_INFINITY;
        for (position, &index) in group.iter().enumerate() {
            let candidate = &mut candidates[index];
            candidate.group_index = position;
            if candidate.anchor.y - previous_y < min_gap && position > 0 {
                candidate.anchor.y = previous_y + min_gap;
            }
            previous_y = candidate.anchor.y;
        }
    }
}

/// Builds connector polylines for the (collision-resolved) outer labels.
///
/// Each line starts on the outer arc at the segment's original midpoint
/// angle, bends at an elbow `elbow_offset` inward of the final anchor, and
/// ends at the anchor. A non-positive elbow offset degenerates to a straight
/// 2-point line. The caller only invokes this when lines are enabled and the
/// outer format is not `none`.
pub(crate) fn connector_lines(
    arcs: &[SegmentArc],
    outer: &[LabelCandidate],
    labels: &LabelsSpec,
) -> Vec<ConnectorLine> {
    let mut out = Vec::new();
    let mut labeled_arcs = arcs.iter().filter(|a| a.value > 0.0);
    for candidate in outer {
        let Some(arc) = labeled_arcs.next() else {
            break;
        };
        debug_assert_eq!(arc.data_index, candidate.segment_index);

        let arc_point = arc.point_at(arc.outer_radius);
        let anchor = candidate.anchor;

        let mut points: SmallVec<[Point; 3]> = SmallVec::new();
        points.push(arc_point);
        if labels.elbow_offset > 0.0 {
            let direction = match candidate.side {
                Some(Side::Left) => -1.0,
                _ => 1.0,
            };
            points.push(Point::new(
                anchor.x - direction * labels.elbow_offset,
                anchor.y,
            ));
        }
        points.push(anchor);

        out.push(ConnectorLine {
            segment_index: candidate.segment_index,
            points,
            color: labels.lines.color.unwrap_or(arc.fill),
            width: labels.lines.width,
        });
    }
    out
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::format;
    use alloc::vec;
    use core::f64::consts::{FRAC_PI_2, PI, TAU};

    use kurbo::Point;
    use rondel_text::HeuristicTextMeasurer;

    use super::*;
    use crate::geometry::{assign_angles, point_on_circle};

    fn arcs_for(values: &[f64], start_offset: f64) -> Vec<SegmentArc> {
        let total: f64 = values.iter().sum();
        let angles = assign_angles(values, total, start_offset);
        values
            .iter()
            .zip(angles)
            .enumerate()
            .map(|(i, (&value, (start_angle, end_angle)))| SegmentArc {
                data_index: i,
                label: format!("seg{i}"),
                value,
                percentage: 100.0 * value / total,
                fill: Color::BLACK,
                center: Point::new(250.0, 250.0),
                inner_radius: 0.0,
                outer_radius: 100.0,
                start_angle,
                end_angle,
            })
            .collect()
    }

    fn spec() -> LabelsSpec {
        LabelsSpec::default()
    }

    #[test]
    fn zero_value_segments_never_produce_candidates() {
        let arcs = arcs_for(&[10.0, 0.0, 90.0], 0.0);
        let inner = inner_candidates(&arcs, &spec(), &HeuristicTextMeasurer);
        let outer = outer_candidates(&arcs, &spec(), &HeuristicTextMeasurer);
        assert_eq!(inner.len(), 2);
        assert_eq!(outer.len(), 2);
        assert!(inner.iter().all(|c| c.segment_index != 1));
        assert!(outer.iter().all(|c| c.segment_index != 1));
    }

    #[test]
    fn inner_labels_sit_at_the_radial_middle() {
        let arcs = arcs_for(&[100.0], 0.0);
        let inner = inner_candidates(&arcs, &spec(), &HeuristicTextMeasurer);
        let expected = point_on_circle(arcs[0].center, 50.0, arcs[0].mid_angle());
        assert_eq!(inner.len(), 1);
        assert!((inner[0].anchor - expected).hypot() < 1e-9);
        assert_eq!(inner[0].kind, LabelKind::Inner);
        assert_eq!(inner[0].align, TextAnchor::Middle);
        assert_eq!(inner[0].side, None);
    }

    #[test]
    fn single_segment_needs_no_collision_adjustment() {
        let arcs = arcs_for(&[100.0], 0.0);
        let mut outer = outer_candidates(&arcs, &spec(), &HeuristicTextMeasurer);
        let raw = outer.clone();
        resolve_collisions(&mut outer, spec().min_vertical_gap);
        assert_eq!(outer.len(), 1);
        assert_eq!(outer[0].anchor, raw[0].anchor);
        assert_eq!(outer[0].group_index, 0);
    }

    #[test]
    fn sides_split_on_the_configured_interval() {
        // Four quarter segments starting at 12 o'clock: their midpoints sit
        // at 1:30, 4:30, 7:30, and 10:30 around the clock face.
        let arcs = arcs_for(&[25.0, 25.0, 25.0, 25.0], -FRAC_PI_2);
        let outer = outer_candidates(&arcs, &spec(), &HeuristicTextMeasurer);
        let sides: Vec<_> = outer.iter().map(|c| c.side.unwrap()).collect();
        assert_eq!(sides, vec![Side::Right, Side::Right, Side::Left, Side::Left]);

        // Right-side labels grow rightward, left-side leftward.
        assert!(outer.iter().all(|c| match c.side.unwrap() {
            Side::Right => c.align == TextAnchor::Start,
            Side::Left => c.align == TextAnchor::End,
        }));
    }

    #[test]
    fn boundary_midpoints_fall_to_the_right_group() {
        // A midpoint exactly at π/2 is outside the open left interval.
        let mut arc = arcs_for(&[1.0], 0.0)[0].clone();
        arc.start_angle = 0.0;
        arc.end_angle = PI;
        let outer = outer_candidates(&[arc], &spec(), &HeuristicTextMeasurer);
        assert_eq!(outer[0].side, Some(Side::Right));
    }

    #[test]
    fn sweep_enforces_the_minimum_gap_within_a_side() {
        // Many thin segments on the right side produce tightly packed raw
        // anchors.
        let values = vec![2.0; 10];
        let arcs: Vec<SegmentArc> = {
            // Compress all ten into the right-side quarter around 3 o'clock.
            let mut arcs = arcs_for(&values, 0.0);
            let span = FRAC_PI_2 / arcs.len() as f64;
            for (i, arc) in arcs.iter_mut().enumerate() {
                arc.start_angle = -FRAC_PI_2 / 2.0 + i as f64 * span;
                arc.end_angle = arc.start_angle + span;
            }
            arcs
        };
        let gap = 18.0;
        let mut outer = outer_candidates(&arcs, &spec(), &HeuristicTextMeasurer);
        resolve_collisions(&mut outer, gap);

        let mut rights: Vec<&LabelCandidate> =
            outer.iter().filter(|c| c.side == Some(Side::Right)).collect();
        assert!(rights.len() > 1, "test setup should keep labels on one side");
        rights.sort_by_key(|c| c.group_index);
        for pair in rights.windows(2) {
            let delta = pair[1].anchor.y - pair[0].anchor.y;
            assert!(
                delta >= gap - 1e-9,
                "consecutive labels closer than the gap: {delta}"
            );
        }
    }

    #[test]
    fn sweep_only_moves_labels_downward_and_keeps_x() {
        let values = vec![2.0; 6];
        let mut arcs = arcs_for(&values, 0.0);
        let span = FRAC_PI_2 / arcs.len() as f64;
        for (i, arc) in arcs.iter_mut().enumerate() {
            arc.start_angle = -FRAC_PI_2 / 2.0 + i as f64 * span;
            arc.end_angle = arc.start_angle + span;
        }
        let mut outer = outer_candidates(&arcs, &spec(), &HeuristicTextMeasurer);
        let raw = outer.clone();
        resolve_collisions(&mut outer, 18.0);
        for (before, after) in raw.iter().zip(&outer) {
            assert!(after.anchor.y >= before.anchor.y - 1e-9);
            assert_eq!(after.anchor.x, before.anchor.x);
        }
    }

    #[test]
    fn left_and_right_groups_never_interact() {
        // Two segments on opposite sides at the same height.
        let arcs = arcs_for(&[50.0, 50.0], -FRAC_PI_2);
        let mut outer = outer_candidates(&arcs, &spec(), &HeuristicTextMeasurer);
        let raw = outer.clone();
        resolve_collisions(&mut outer, 1000.0);
        // Huge gap, but each side holds one label: nothing moves.
        for (before, after) in raw.iter().zip(&outer) {
            assert_eq!(before.anchor, after.anchor);
        }
    }

    #[test]
    fn connectors_run_arc_to_elbow_to_anchor() {
        let arcs = arcs_for(&[30.0, 70.0], 0.0);
        let mut outer = outer_candidates(&arcs, &spec(), &HeuristicTextMeasurer);
        resolve_collisions(&mut outer, spec().min_vertical_gap);
        let lines = connector_lines(&arcs, &outer, &spec());
        assert_eq!(lines.len(), 2);

        for (line, candidate) in lines.iter().zip(&outer) {
            assert_eq!(line.points.len(), 3);
            let arc = &arcs[candidate.segment_index];
            let start = point_on_circle(arc.center, arc.outer_radius, arc.mid_angle());
            assert!((line.points[0] - start).hypot() < 1e-9);
            // Elbow shares the anchor's height.
            assert_eq!(line.points[1].y, candidate.anchor.y);
            assert_eq!(line.points[2], candidate.anchor);
        }
    }

    #[test]
    fn zero_elbow_offset_degenerates_to_two_points() {
        let mut labels = spec();
        labels.elbow_offset = 0.0;
        let arcs = arcs_for(&[100.0], 0.0);
        let outer = outer_candidates(&arcs, &labels, &HeuristicTextMeasurer);
        let lines = connector_lines(&arcs, &outer, &labels);
        assert_eq!(lines[0].points.len(), 2);
    }

    #[test]
    fn connector_color_falls_back_to_segment_fill() {
        let mut arcs = arcs_for(&[60.0, 40.0], 0.0);
        arcs[1].fill = Color::WHITE;
        let outer = outer_candidates(&arcs, &spec(), &HeuristicTextMeasurer);
        let lines = connector_lines(&arcs, &outer, &spec());
        assert_eq!(lines[0].color, Color::BLACK);
        assert_eq!(lines[1].color, Color::WHITE);

        let mut labels = spec();
        labels.lines.color = Some(Color::from_rgb8(1, 2, 3));
        let lines = connector_lines(&arcs, &outer, &labels);
        assert!(lines.iter().all(|l| l.color == Color::from_rgb8(1, 2, 3)));
    }

    #[test]
    fn full_turn_midpoints_normalize_before_classification() {
        // A segment whose midpoint lands past 2π still classifies by its
        // normalized angle.
        let mut arc = arcs_for(&[100.0], 0.0)[0].clone();
        arc.start_angle = TAU - 0.1;
        arc.end_angle = TAU + 0.1;
        let outer = outer_candidates(&[arc], &spec(), &HeuristicTextMeasurer);
        assert_eq!(outer[0].side, Some(Side::Right));
    }
}
