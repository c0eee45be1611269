// Copyright 2026 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Measured text blocks and heading/footer placement.
//!
//! The engine never measures text itself; the rendering collaborator does,
//! through [`rondel_text::TextMeasurer`], and this module records the boxes.
//! Placement functions are pure: they take measured blocks and return anchor
//! points, never sizes. An empty block still flows through the math as a
//! zero-size no-op.
//!
//! Anchor convention: `anchor.y` is the vertical center of the text line and
//! `anchor.x` is interpreted through the returned [`TextAnchor`].

extern crate alloc;

use alloc::string::{String, ToString};
use core::str::FromStr;

use kurbo::{Point, Size};
use peniko::Color;
use rondel_text::{TextAnchor, TextExtent, TextMeasurer, TextStyle};

use crate::error::ConfigIssue;
use crate::spec::{FooterSpec, HeaderSpec};

/// Which of the three chart-level text slots a block fills.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextBlockKind {
    /// The chart title.
    Title,
    /// The chart subtitle.
    Subtitle,
    /// The chart footer.
    Footer,
}

/// One measured chart-level text block.
#[derive(Clone, Debug, PartialEq)]
pub struct TextBlock {
    /// Which slot this block fills.
    pub kind: TextBlockKind,
    /// The text content.
    pub text: String,
    /// False when the text is empty; the block then has zero extent.
    pub exists: bool,
    /// Measured bounding box.
    pub extent: TextExtent,
}

impl TextBlock {
    /// Measures `text` into a block; empty text yields a zero-size no-op.
    pub fn measure(
        kind: TextBlockKind,
        text: &str,
        style: &TextStyle,
        measurer: &dyn TextMeasurer,
    ) -> Self {
        let exists = !text.is_empty();
        let extent = if exists {
            measurer.measure(text, style)
        } else {
            TextExtent::default()
        };
        Self {
            kind,
            text: text.to_string(),
            exists,
            extent,
        }
    }
}

/// The three measured chart-level blocks of one layout pass.
#[derive(Clone, Debug, PartialEq)]
pub struct TextBlocks {
    /// Measured title block.
    pub title: TextBlock,
    /// Measured subtitle block.
    pub subtitle: TextBlock,
    /// Measured footer block.
    pub footer: TextBlock,
}

impl TextBlocks {
    /// Measures all three blocks for the given header/footer configuration.
    pub fn measure(
        header: &HeaderSpec,
        footer: &FooterSpec,
        measurer: &dyn TextMeasurer,
    ) -> Self {
        Self {
            title: TextBlock::measure(
                TextBlockKind::Title,
                &header.title.text,
                &header.title.style,
                measurer,
            ),
            subtitle: TextBlock::measure(
                TextBlockKind::Subtitle,
                &header.subtitle.text,
                &header.subtitle.style,
                measurer,
            ),
            footer: TextBlock::measure(
                TextBlockKind::Footer,
                &footer.text.text,
                &footer.text.style,
                measurer,
            ),
        }
    }

    /// Combined height the heading block reserves above the pie, including
    /// the inter-block padding when both title and subtitle exist.
    pub fn heading_height(&self, title_subtitle_padding: f64) -> f64 {
        let mut height = 0.0;
        if self.title.exists {
            height += self.title.extent.height;
        }
        if self.title.exists && self.subtitle.exists {
            height += title_subtitle_padding;
        }
        if self.subtitle.exists {
            height += self.subtitle.extent.height;
        }
        height
    }
}

/// Where the heading block sits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum HeaderLocation {
    /// Centered at the top of the canvas.
    #[default]
    TopCenter,
    /// Flush with the top-left padding corner.
    TopLeft,
    /// Overlaid on the pie center (donut holes, typically).
    PieCenter,
}

impl FromStr for HeaderLocation {
    type Err = ConfigIssue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top-center" => Ok(Self::TopCenter),
            "top-left" => Ok(Self::TopLeft),
            "pie-center" => Ok(Self::PieCenter),
            other => Err(ConfigIssue::UnknownHeaderLocation(other.to_string())),
        }
    }
}

/// Where the footer sits. Footers only ever occupy the bottom edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FooterLocation {
    /// Flush with the bottom-left padding corner.
    #[default]
    BottomLeft,
    /// Centered at the bottom of the canvas.
    BottomCenter,
    /// Flush with the bottom-right padding corner.
    BottomRight,
}

impl FromStr for FooterLocation {
    type Err = ConfigIssue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bottom-left" => Ok(Self::BottomLeft),
            "bottom-center" => Ok(Self::BottomCenter),
            "bottom-right" => Ok(Self::BottomRight),
            other => Err(ConfigIssue::UnknownFooterLocation(other.to_string())),
        }
    }
}

/// A text block resolved to its final anchor, ready for the renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedText {
    /// The text content.
    pub text: String,
    /// Anchor point; `y` is the vertical center of the line.
    pub anchor: Point,
    /// How the renderer should align the text against `anchor.x`.
    pub align: TextAnchor,
    /// Style used for measurement; the renderer draws with the same one.
    pub style: TextStyle,
    /// Fill paint.
    pub color: Color,
}

/// Computes title and subtitle anchors for the given header location.
///
/// Returns `None` for blocks that do not exist. Never measures.
pub fn heading_anchors(
    location: HeaderLocation,
    blocks: &TextBlocks,
    pie_center: Point,
    canvas: Size,
    padding: f64,
    title_subtitle_padding: f64,
) -> (Option<(Point, TextAnchor)>, Option<(Point, TextAnchor)>) {
    let title = &blocks.title;
    let subtitle = &blocks.subtitle;

    let (x, align, top) = match location {
        HeaderLocation::TopLeft => (padding, TextAnchor::Start, padding),
        HeaderLocation::TopCenter => (0.5 * canvas.width, TextAnchor::Middle, padding),
        HeaderLocation::PieCenter => {
            let block_height = blocks.heading_height(title_subtitle_padding);
            (
                pie_center.x,
                TextAnchor::Middle,
                pie_center.y - 0.5 * block_height,
            )
        }
    };

    let title_anchor = title.exists.then(|| {
        (
            Point::new(x, top + 0.5 * title.extent.height),
            align,
        )
    });

    let subtitle_anchor = subtitle.exists.then(|| {
        let mut y = top;
        if title.exists {
            y += title.extent.height + title_subtitle_padding;
        }
        (Point::new(x, y + 0.5 * subtitle.extent.height), align)
    });

    (title_anchor, subtitle_anchor)
}

/// Computes the footer anchor. The footer hugs the bottom padding edge.
pub fn footer_anchor(
    location: FooterLocation,
    footer: &TextBlock,
    canvas: Size,
    padding: f64,
) -> (Point, TextAnchor) {
    let y = canvas.height - padding - 0.5 * footer.extent.height;
    match location {
        FooterLocation::BottomLeft => (Point::new(padding, y), TextAnchor::Start),
        FooterLocation::BottomCenter => (Point::new(0.5 * canvas.width, y), TextAnchor::Middle),
        FooterLocation::BottomRight => {
            (Point::new(canvas.width - padding, y), TextAnchor::End)
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use rondel_text::HeuristicTextMeasurer;

    use super::*;

    fn blocks(title: &str, subtitle: &str, footer: &str) -> TextBlocks {
        let mut header = HeaderSpec::default();
        header.title.text = title.to_string();
        header.subtitle.text = subtitle.to_string();
        let mut footer_spec = FooterSpec::default();
        footer_spec.text.text = footer.to_string();
        TextBlocks::measure(&header, &footer_spec, &HeuristicTextMeasurer)
    }

    #[test]
    fn empty_text_is_a_zero_size_no_op() {
        let b = blocks("", "", "");
        assert!(!b.title.exists);
        assert_eq!(b.title.extent, TextExtent::default());
        assert_eq!(b.heading_height(8.0), 0.0);
    }

    #[test]
    fn heading_height_adds_padding_only_when_both_exist() {
        let both = blocks("Title", "Sub", "");
        // Default styles: title 18 px, subtitle 14 px line height.
        assert!((both.heading_height(8.0) - (18.0 + 8.0 + 14.0)).abs() < 1e-9);

        let title_only = blocks("Title", "", "");
        assert!((title_only.heading_height(8.0) - 18.0).abs() < 1e-9);
    }

    #[test]
    fn top_center_headings_stack_below_the_padding_edge() {
        let b = blocks("Title", "Sub", "");
        let canvas = Size::new(500.0, 500.0);
        let (title, subtitle) =
            heading_anchors(HeaderLocation::TopCenter, &b, Point::ZERO, canvas, 5.0, 8.0);

        let (anchor, align) = title.unwrap();
        assert_eq!(align, TextAnchor::Middle);
        assert_eq!(anchor.x, 250.0);
        assert!((anchor.y - (5.0 + 9.0)).abs() < 1e-9);

        let (anchor, _) = subtitle.unwrap();
        assert!((anchor.y - (5.0 + 18.0 + 8.0 + 7.0)).abs() < 1e-9);
    }

    #[test]
    fn pie_center_headings_straddle_the_center() {
        let b = blocks("Title", "Sub", "");
        let center = Point::new(250.0, 260.0);
        let (title, subtitle) = heading_anchors(
            HeaderLocation::PieCenter,
            &b,
            center,
            Size::new(500.0, 500.0),
            5.0,
            8.0,
        );
        let (t, _) = title.unwrap();
        let (s, _) = subtitle.unwrap();
        // The block is centered on the pie center.
        let mid = 0.5 * ((t.y - 9.0) + (s.y + 7.0));
        assert!((mid - center.y).abs() < 1e-9);
        assert_eq!(t.x, center.x);
    }

    #[test]
    fn footer_hugs_the_configured_corner() {
        let b = blocks("", "", "source: somewhere");
        let canvas = Size::new(500.0, 400.0);

        let (left, align) = footer_anchor(FooterLocation::BottomLeft, &b.footer, canvas, 5.0);
        assert_eq!(align, TextAnchor::Start);
        assert_eq!(left.x, 5.0);
        assert!((left.y - (400.0 - 5.0 - 5.5)).abs() < 1e-9);

        let (right, align) = footer_anchor(FooterLocation::BottomRight, &b.footer, canvas, 5.0);
        assert_eq!(align, TextAnchor::End);
        assert_eq!(right.x, 495.0);
    }

    #[test]
    fn location_strings_parse() {
        assert_eq!("pie-center".parse::<HeaderLocation>(), Ok(HeaderLocation::PieCenter));
        assert_eq!("bottom-right".parse::<FooterLocation>(), Ok(FooterLocation::BottomRight));
        assert!("middle".parse::<HeaderLocation>().is_err());
        assert!("top".parse::<FooterLocation>().is_err());
    }
}
