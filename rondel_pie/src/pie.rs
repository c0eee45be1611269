// Copyright 2026 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The stateful chart wrapper.
//!
//! [`PieChart`] owns a spec and its latest layout and exposes the mutation
//! and query surface the rendering collaborator drives: dotted-path property
//! updates (reporting whether they demand a full relayout) and the
//! open-segment interaction state. The engine itself never reacts to events;
//! the collaborator relays them here and redraws from the returned geometry.

extern crate alloc;

use alloc::string::{String, ToString};
use core::fmt;

use kurbo::Vec2;
use rondel_text::TextMeasurer;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::error::{ConfigIssue, PieError};
use crate::layout::PieLayout;
use crate::sector::SegmentArc;
use crate::spec::PieSpec;

/// A dynamically typed property value for [`PieChart::update_property`].
#[derive(Clone, Debug, PartialEq)]
pub enum PropValue {
    /// A text value.
    Text(String),
    /// A numeric value.
    Number(f64),
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for PropValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl fmt::Display for PropValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(t) => write!(f, "{t}"),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

/// What a property update did to the stored layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateEffect {
    /// Every geometric entity was recomputed. Happens exactly when a
    /// title/subtitle text toggled between empty and non-empty, because that
    /// changes the vertical space available to everything else.
    Relayout,
    /// Only the named property changed; the collaborator can redraw the
    /// corresponding element in place.
    Redraw,
    /// The path is not part of the recognized update surface; nothing
    /// changed.
    Ignored,
}

/// Info about the currently open (pulled-out) segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OpenSegmentInfo<'a> {
    /// Position of the segment in render order.
    pub index: usize,
    /// The segment's arc, including its original data index and datum fields.
    pub segment: &'a SegmentArc,
    /// Translation to apply to the segment while open: the midpoint-angle
    /// direction scaled by the configured pull-out size.
    pub pull_out: Vec2,
}

/// A pie chart with its current configuration and computed layout.
#[derive(Clone, Debug)]
pub struct PieChart {
    spec: PieSpec,
    layout: PieLayout,
    open_segment: Option<usize>,
}

impl PieChart {
    /// Lays out `spec` and wraps the result.
    pub fn new(spec: PieSpec, measurer: &dyn TextMeasurer) -> Result<Self, PieError> {
        let layout = PieLayout::arrange(&spec, measurer)?;
        Ok(Self {
            spec,
            layout,
            open_segment: None,
        })
    }

    /// The current configuration.
    pub fn spec(&self) -> &PieSpec {
        &self.spec
    }

    /// The current layout.
    pub fn layout(&self) -> &PieLayout {
        &self.layout
    }

    /// Updates a single dotted-path configuration field.
    ///
    /// Recognized paths are the ones with geometric meaning that the update
    /// surface supports: `header.title.text`, `header.subtitle.text`, and
    /// `effects.pullOutSegmentOnClick.size`. Unknown paths return
    /// [`UpdateEffect::Ignored`] untouched; a recognized path with a value of
    /// the wrong shape is [`PieError::InvalidConfig`].
    pub fn update_property(
        &mut self,
        path: &str,
        value: PropValue,
        measurer: &dyn TextMeasurer,
    ) -> Result<UpdateEffect, PieError> {
        match path {
            "header.title.text" | "header.subtitle.text" => {
                let PropValue::Text(text) = value else {
                    return Err(bad_value(path, &value));
                };
                let is_title = path == "header.title.text";
                let slot = if is_title {
                    &mut self.spec.header.title
                } else {
                    &mut self.spec.header.subtitle
                };
                let toggled = slot.text.is_empty() != text.is_empty();
                slot.text = text;

                if toggled {
                    self.layout = PieLayout::arrange(&self.spec, measurer)?;
                    return Ok(UpdateEffect::Relayout);
                }
                // Same presence: only the one text block changes.
                let placed = if is_title {
                    &mut self.layout.title
                } else {
                    &mut self.layout.subtitle
                };
                if let Some(placed) = placed {
                    placed.text = if is_title {
                        self.spec.header.title.text.clone()
                    } else {
                        self.spec.header.subtitle.text.clone()
                    };
                }
                Ok(UpdateEffect::Redraw)
            }
            "effects.pullOutSegmentOnClick.size" => {
                let PropValue::Number(size) = value else {
                    return Err(bad_value(path, &value));
                };
                self.spec.effects.pull_out_size = size;
                Ok(UpdateEffect::Redraw)
            }
            _ => Ok(UpdateEffect::Ignored),
        }
    }

    /// Marks the segment at render position `index` as open.
    ///
    /// Out-of-range indexes are a no-op rather than an error; stray clicks
    /// relayed after a data change should not panic the chart.
    pub fn open_segment(&mut self, index: usize) {
        if index < self.layout.segments.len() {
            self.open_segment = Some(index);
        }
    }

    /// Closes the open segment, if any.
    pub fn close_segment(&mut self) {
        self.open_segment = None;
    }

    /// Returns the currently open segment, or `None`.
    pub fn open_segment_info(&self) -> Option<OpenSegmentInfo<'_>> {
        let index = self.open_segment?;
        let segment = &self.layout.segments[index];
        let mid = segment.mid_angle();
        Some(OpenSegmentInfo {
            index,
            segment,
            pull_out: Vec2::new(mid.cos(), mid.sin()) * self.spec.effects.pull_out_size,
        })
    }
}

fn bad_value(path: &str, value: &PropValue) -> PieError {
    ConfigIssue::BadPropertyValue {
        path: path.to_string(),
        value: value.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use rondel_text::HeuristicTextMeasurer;

    use super::*;
    use crate::spec::Datum;

    fn chart() -> PieChart {
        let spec = PieSpec::new(vec![
            Datum::new("A", 10.0),
            Datum::new("B", 20.0),
            Datum::new("C", 70.0),
        ])
        .with_title("Devices");
        PieChart::new(spec, &HeuristicTextMeasurer).unwrap()
    }

    #[test]
    fn clearing_the_title_relayouts() {
        let mut chart = chart();
        let before = chart.layout().center;
        let effect = chart
            .update_property("header.title.text", "".into(), &HeuristicTextMeasurer)
            .unwrap();
        assert_eq!(effect, UpdateEffect::Relayout);
        assert!(chart.layout().title.is_none());
        // The heading no longer consumes vertical space.
        assert!(chart.layout().center.y < before.y);
    }

    #[test]
    fn retitling_is_a_localized_redraw() {
        let mut chart = chart();
        let before = chart.layout().clone();
        let effect = chart
            .update_property("header.title.text", "Machines".into(), &HeuristicTextMeasurer)
            .unwrap();
        assert_eq!(effect, UpdateEffect::Redraw);

        let after = chart.layout();
        assert_eq!(after.title.as_ref().unwrap().text, "Machines");
        // Everything but the title text is untouched.
        assert_eq!(after.segments, before.segments);
        assert_eq!(after.center, before.center);
        assert_eq!(after.title.as_ref().unwrap().anchor, before.title.unwrap().anchor);
    }

    #[test]
    fn adding_a_subtitle_relayouts_too() {
        let mut chart = chart();
        let effect = chart
            .update_property("header.subtitle.text", "by type".into(), &HeuristicTextMeasurer)
            .unwrap();
        assert_eq!(effect, UpdateEffect::Relayout);
        assert_eq!(chart.layout().subtitle.as_ref().unwrap().text, "by type");
    }

    #[test]
    fn unknown_paths_are_ignored() {
        let mut chart = chart();
        let before = chart.layout().clone();
        let effect = chart
            .update_property("callbacks.onClickSegment", "noop".into(), &HeuristicTextMeasurer)
            .unwrap();
        assert_eq!(effect, UpdateEffect::Ignored);
        assert_eq!(*chart.layout(), before);
    }

    #[test]
    fn recognized_path_with_wrong_value_shape_is_invalid_config() {
        let mut chart = chart();
        let err = chart
            .update_property("header.title.text", 3.0.into(), &HeuristicTextMeasurer)
            .unwrap_err();
        assert!(matches!(
            err,
            PieError::InvalidConfig(ConfigIssue::BadPropertyValue { .. })
        ));
    }

    #[test]
    fn open_segment_validates_its_range() {
        let mut chart = chart();
        assert!(chart.open_segment_info().is_none());

        chart.open_segment(7);
        assert!(chart.open_segment_info().is_none());

        chart.open_segment(2);
        let info = chart.open_segment_info().unwrap();
        assert_eq!(info.index, 2);
        assert_eq!(info.segment.label, "C");
        assert_eq!(info.segment.data_index, 2);

        chart.close_segment();
        assert!(chart.open_segment_info().is_none());
    }

    #[test]
    fn pull_out_points_along_the_midpoint_angle() {
        let mut chart = chart();
        chart
            .update_property(
                "effects.pullOutSegmentOnClick.size",
                10.0.into(),
                &HeuristicTextMeasurer,
            )
            .unwrap();
        chart.open_segment(0);
        let info = chart.open_segment_info().unwrap();
        let mid = info.segment.mid_angle();
        assert!((info.pull_out.hypot() - 10.0).abs() < 1e-9);
        assert!((info.pull_out.x - 10.0 * mid.cos()).abs() < 1e-9);
        assert!((info.pull_out.y - 10.0 * mid.sin()).abs() < 1e-9);
    }
}
