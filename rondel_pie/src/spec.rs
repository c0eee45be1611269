// Copyright 2026 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The pie configuration object.
//!
//! [`PieSpec`] is the single input to a layout pass: data, canvas geometry,
//! heading/footer text, and label options, with builder-style `with_*`
//! methods and documented defaults. The defaults follow the d3-era annotated
//! pie charts this engine is modeled on: a 500×500 canvas, 5 px padding,
//! header at top-center, percentage labels inside and name labels outside
//! with connector lines.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Size, Vec2};
use peniko::Color;
use rondel_text::TextStyle;

use crate::color::DEFAULT_SEGMENT_COLORS;
use crate::format::LabelFormat;
use crate::sector::StrokeStyle;
use crate::sort::SortOrder;
use crate::text_block::{FooterLocation, HeaderLocation};

/// One labeled value of the pie.
#[derive(Clone, Debug, PartialEq)]
pub struct Datum {
    /// Display label for the segment.
    pub label: String,
    /// Non-negative value; proportions derive from the sum of all values.
    pub value: f64,
    /// Explicit segment color. Overrides the palette when set.
    pub color: Option<Color>,
}

impl Datum {
    /// Creates a datum with no explicit color.
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            color: None,
        }
    }

    /// Sets an explicit segment color, overriding the palette.
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

/// A piece of heading/footer text with its measurement style and paint.
#[derive(Clone, Debug, PartialEq)]
pub struct TextSpec {
    /// The text. Empty means the block does not exist.
    pub text: String,
    /// Style used for measurement and rendering.
    pub style: TextStyle,
    /// Fill paint.
    pub color: Color,
}

impl TextSpec {
    fn new(font_size: f64, color: Color) -> Self {
        Self {
            text: String::new(),
            style: TextStyle::new(font_size),
            color,
        }
    }
}

/// Title/subtitle configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct HeaderSpec {
    /// Chart title. Empty text disables it.
    pub title: TextSpec,
    /// Chart subtitle. Empty text disables it.
    pub subtitle: TextSpec,
    /// Where the heading block sits.
    pub location: HeaderLocation,
    /// Vertical gap between title and subtitle when both exist.
    pub title_subtitle_padding: f64,
}

impl Default for HeaderSpec {
    fn default() -> Self {
        Self {
            title: TextSpec::new(18.0, Color::from_rgb8(0x33, 0x33, 0x33)),
            subtitle: TextSpec::new(14.0, Color::from_rgb8(0x66, 0x66, 0x66)),
            location: HeaderLocation::TopCenter,
            title_subtitle_padding: 8.0,
        }
    }
}

/// Footer configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct FooterSpec {
    /// Footer text. Empty text disables it.
    pub text: TextSpec,
    /// Where the footer sits. The footer never moves after placement.
    pub location: FooterLocation,
}

impl Default for FooterSpec {
    fn default() -> Self {
        Self {
            text: TextSpec::new(11.0, Color::from_rgb8(0x66, 0x66, 0x66)),
            location: FooterLocation::BottomLeft,
        }
    }
}

/// Options for one label ring (inner or outer).
#[derive(Clone, Debug, PartialEq)]
pub struct LabelStyle {
    /// What the label shows.
    pub format: LabelFormat,
    /// Style used for measurement and rendering.
    pub style: TextStyle,
    /// Fill paint.
    pub color: Color,
}

/// Connector-line options for outer labels.
#[derive(Clone, Debug, PartialEq)]
pub struct LineSpec {
    /// Whether connector lines are emitted at all.
    pub enabled: bool,
    /// Stroke width.
    pub width: f64,
    /// Line color. `None` uses the segment's own fill.
    pub color: Option<Color>,
}

impl Default for LineSpec {
    fn default() -> Self {
        Self {
            enabled: true,
            width: 1.0,
            color: None,
        }
    }
}

/// Label configuration for both rings plus the collision/connector tuning.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelsSpec {
    /// Inner labels, placed inside each segment. May overlap on thin
    /// segments; that is accepted rather than resolved.
    pub inner: LabelStyle,
    /// Outer labels, collision-resolved around the circumference.
    pub outer: LabelStyle,
    /// Distance from the outer radius to a raw outer-label anchor.
    pub outer_distance: f64,
    /// Connector lines from segments to outer labels.
    pub lines: LineSpec,
    /// Minimum vertical distance between consecutive outer-label anchors in
    /// the same side group.
    pub min_vertical_gap: f64,
    /// Start of the angular interval (on the normalized midpoint angle)
    /// classified as the left side.
    pub left_side_start: f64,
    /// End of the angular interval classified as the left side.
    pub left_side_end: f64,
    /// Horizontal distance between a connector's elbow and the label anchor.
    /// Values ≤ 0 collapse the connector to a straight 2-point line.
    pub elbow_offset: f64,
    /// Decimal places shown for percentage label formats.
    pub percentage_decimals: u8,
}

impl Default for LabelsSpec {
    fn default() -> Self {
        Self {
            inner: LabelStyle {
                format: LabelFormat::Percentage,
                style: TextStyle::new(11.0),
                color: Color::WHITE,
            },
            outer: LabelStyle {
                format: LabelFormat::Label,
                style: TextStyle::new(11.0),
                color: Color::from_rgb8(0x33, 0x33, 0x33),
            },
            outer_distance: 30.0,
            lines: LineSpec::default(),
            min_vertical_gap: 18.0,
            left_side_start: core::f64::consts::FRAC_PI_2,
            left_side_end: 3.0 * core::f64::consts::FRAC_PI_2,
            elbow_offset: 6.0,
            percentage_decimals: 0,
        }
    }
}

/// Interaction-effect tuning that has geometric consequences.
#[derive(Clone, Debug, PartialEq)]
pub struct EffectsSpec {
    /// How far an opened segment translates along its midpoint angle.
    pub pull_out_size: f64,
}

impl Default for EffectsSpec {
    fn default() -> Self {
        Self { pull_out_size: 8.0 }
    }
}

/// The full configuration for one pie.
#[derive(Clone, Debug, PartialEq)]
pub struct PieSpec {
    /// Ordered data content.
    pub data: Vec<Datum>,
    /// How segments are ordered before angle assignment.
    pub sort_order: SortOrder,
    /// Canvas width/height.
    pub canvas_size: Size,
    /// Uniform padding inside the canvas edge.
    pub canvas_padding: f64,
    /// Background paint handed through to the renderer. `None` is transparent.
    pub background: Option<Color>,
    /// Palette cycled over segments without an explicit color.
    pub segment_palette: Vec<Color>,
    /// Optional outline stroke for every segment.
    pub segment_stroke: Option<StrokeStyle>,
    /// Offset applied to the computed pie center.
    pub pie_center_offset: Vec2,
    /// Angle of the first segment's leading edge, in radians. 0 is at
    /// 3 o'clock; pass `-FRAC_PI_2` for the classic 12 o'clock start.
    pub start_angle: f64,
    /// Inner radius as a fraction of the outer radius. 0 for a solid pie.
    pub donut_ratio: f64,
    /// Title/subtitle configuration.
    pub header: HeaderSpec,
    /// Footer configuration.
    pub footer: FooterSpec,
    /// Label configuration.
    pub labels: LabelsSpec,
    /// Interaction-effect tuning.
    pub effects: EffectsSpec,
}

impl Default for PieSpec {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            sort_order: SortOrder::None,
            canvas_size: Size::new(500.0, 500.0),
            canvas_padding: 5.0,
            background: None,
            segment_palette: DEFAULT_SEGMENT_COLORS.to_vec(),
            segment_stroke: Some(StrokeStyle {
                color: Color::WHITE,
                width: 1.0,
            }),
            pie_center_offset: Vec2::ZERO,
            start_angle: 0.0,
            donut_ratio: 0.0,
            header: HeaderSpec::default(),
            footer: FooterSpec::default(),
            labels: LabelsSpec::default(),
            effects: EffectsSpec::default(),
        }
    }
}

impl PieSpec {
    /// Creates a spec for the given data with all defaults.
    pub fn new(data: Vec<Datum>) -> Self {
        Self {
            data,
            ..Self::default()
        }
    }

    /// Sets the sort order.
    #[must_use]
    pub fn with_sort_order(mut self, order: SortOrder) -> Self {
        self.sort_order = order;
        self
    }

    /// Sets the canvas size.
    #[must_use]
    pub fn with_canvas_size(mut self, size: Size) -> Self {
        self.canvas_size = size;
        self
    }

    /// Sets the canvas padding.
    #[must_use]
    pub fn with_canvas_padding(mut self, padding: f64) -> Self {
        self.canvas_padding = padding;
        self
    }

    /// Sets the title text.
    #[must_use]
    pub fn with_title(mut self, text: impl Into<String>) -> Self {
        self.header.title.text = text.into();
        self
    }

    /// Sets the subtitle text.
    #[must_use]
    pub fn with_subtitle(mut self, text: impl Into<String>) -> Self {
        self.header.subtitle.text = text.into();
        self
    }

    /// Sets the heading location.
    #[must_use]
    pub fn with_header_location(mut self, location: HeaderLocation) -> Self {
        self.header.location = location;
        self
    }

    /// Sets the footer text.
    #[must_use]
    pub fn with_footer(mut self, text: impl Into<String>) -> Self {
        self.footer.text.text = text.into();
        self
    }

    /// Sets the segment palette.
    #[must_use]
    pub fn with_palette(mut self, palette: Vec<Color>) -> Self {
        self.segment_palette = palette;
        self
    }

    /// Sets the donut ratio (inner radius as a fraction of outer).
    #[must_use]
    pub fn with_donut_ratio(mut self, ratio: f64) -> Self {
        self.donut_ratio = ratio;
        self
    }

    /// Sets the start angle of the first segment.
    #[must_use]
    pub fn with_start_angle(mut self, radians: f64) -> Self {
        self.start_angle = radians;
        self
    }

    /// Sets the inner label format.
    #[must_use]
    pub fn with_inner_format(mut self, format: LabelFormat) -> Self {
        self.labels.inner.format = format;
        self
    }

    /// Sets the outer label format.
    #[must_use]
    pub fn with_outer_format(mut self, format: LabelFormat) -> Self {
        self.labels.outer.format = format;
        self
    }

    /// Enables or disables connector lines.
    #[must_use]
    pub fn with_label_lines(mut self, enabled: bool) -> Self {
        self.labels.lines.enabled = enabled;
        self
    }

    /// Sets the pie-center offset.
    #[must_use]
    pub fn with_center_offset(mut self, offset: Vec2) -> Self {
        self.pie_center_offset = offset;
        self
    }

    /// Sets the background paint.
    #[must_use]
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }
}
