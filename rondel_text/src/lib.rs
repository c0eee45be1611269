// Copyright 2026 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement hooks for pie-chart layout.
//!
//! Rondel needs to measure text to perform **layout** (headings, footers,
//! segment labels). Shaping and glyph layout stay downstream in whatever
//! renders the chart, so layout code depends on a tiny measurement interface
//! instead: the renderer measures, the engine records the boxes.
//!
//! This crate is intentionally:
//! - small and dependency-light,
//! - `no_std`-friendly (it uses `alloc` for owned font family names), and
//! - renderer-agnostic (native shaping engines and web canvas measurement can
//!   both implement the same trait).

#![no_std]

extern crate alloc;

use alloc::sync::Arc;

/// A minimal text measurement interface used by pie layout.
///
/// Heading placement, pie-center computation, and label collision all consume
/// the extents this trait reports, so an implementation only has to answer
/// "how big is this line of text".
///
/// Implementations can be:
/// - heuristic (fast, but inaccurate),
/// - backed by a shaping engine, or
/// - backed by web platform text measurement (e.g. HTML canvas).
pub trait TextMeasurer {
    /// Measure a single line of text.
    ///
    /// `text` is treated as a single line; callers should split on `\n` if
    /// they want multi-line layout.
    fn measure(&self, text: &str, style: &TextStyle) -> TextExtent;
}

/// Text styling inputs relevant to measurement.
///
/// This is just enough to make chart layout consistent. More detailed
/// typography (attributed text, shaping options, fallback, etc.) belongs in a
/// higher-level text system.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in the chart's coordinate system (typically pixels).
    pub font_size: f64,
    /// The preferred font family.
    pub font_family: FontFamily,
    /// Font weight (e.g. `400` for normal, `700` for bold).
    pub font_weight: FontWeight,
    /// Font style (normal/italic/oblique).
    pub font_style: FontStyle,
}

impl TextStyle {
    /// Creates a default `TextStyle` with the given `font_size`.
    #[must_use]
    pub fn new(font_size: f64) -> Self {
        Self {
            font_size,
            font_family: FontFamily::SansSerif,
            font_weight: FontWeight::NORMAL,
            font_style: FontStyle::Normal,
        }
    }

    /// Sets the font weight.
    #[must_use]
    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.font_weight = weight;
        self
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(12.0)
    }
}

/// Font family selection for measurement.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// A generic serif family (CSS `serif`).
    Serif,
    /// A generic sans-serif family (CSS `sans-serif`).
    SansSerif,
    /// A generic monospace family (CSS `monospace`).
    Monospace,
    /// A named family (e.g. `"Inter"`, `"Helvetica Neue"`).
    Named(Arc<str>),
}

impl FontFamily {
    /// Returns the font family string for CSS-style font declarations.
    #[must_use]
    pub fn as_css_family(&self) -> &str {
        match self {
            Self::Serif => "serif",
            Self::SansSerif => "sans-serif",
            Self::Monospace => "monospace",
            Self::Named(name) => name,
        }
    }
}

/// CSS-style font weights.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FontWeight(pub u16);

impl FontWeight {
    /// Normal weight (`400`).
    pub const NORMAL: Self = Self(400);
    /// Bold weight (`700`).
    pub const BOLD: Self = Self(700);
}

/// CSS-style font styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontStyle {
    /// Normal style.
    Normal,
    /// Italic style.
    Italic,
    /// Oblique style.
    Oblique,
}

/// The measured bounding box of a single line of text.
///
/// Pie layout treats text as opaque boxes: a heading reserves `height`
/// vertically, a label candidate occupies `width` × `height` around its
/// anchor. Baseline-level detail is left to the renderer.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextExtent {
    /// The advance width of the line.
    pub width: f64,
    /// The line height (ascent + descent + leading).
    pub height: f64,
}

/// Horizontal alignment of a text anchor point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    /// The anchor is the start (left edge) of the text.
    #[default]
    Start,
    /// The anchor is the horizontal middle of the text.
    Middle,
    /// The anchor is the end (right edge) of the text.
    End,
}

/// A tiny heuristic text measurer suitable for demos and early layout.
///
/// It assumes an average glyph width of ~0.6em and a line height of 1em.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextExtent {
        TextExtent {
            width: 0.6 * style.font_size * text.chars().count() as f64,
            height: style.font_size,
        }
    }
}
