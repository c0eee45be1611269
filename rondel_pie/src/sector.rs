// Copyright 2026 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-segment arc definitions.
//!
//! A [`SegmentArc`] is the engine's output for one slice: resolved angles,
//! radii, paint, and the identifying indexes the renderer needs to correlate
//! events back to the data. Conversion to a `kurbo::BezPath` is provided for
//! consumers that want a ready-made outline (the demo, hit testing).

extern crate alloc;

use alloc::string::String;

use kurbo::{BezPath, Circle, Point, Shape};
use peniko::Color;

use crate::geometry::point_on_circle;

/// A paint + width pair for stroked outlines.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke paint.
    pub color: Color,
    /// Stroke width in canvas coordinates.
    pub width: f64,
}

/// One pie segment resolved to renderable arc geometry.
#[derive(Clone, Debug, PartialEq)]
pub struct SegmentArc {
    /// Index of this segment's datum in the original (pre-sort) data.
    pub data_index: usize,
    /// The datum's label.
    pub label: String,
    /// The datum's value.
    pub value: f64,
    /// This segment's share of the total, in percent.
    pub percentage: f64,
    /// Fill paint.
    pub fill: Color,
    /// Pie center in canvas coordinates.
    pub center: Point,
    /// Inner radius (0 for a solid pie).
    pub inner_radius: f64,
    /// Outer radius.
    pub outer_radius: f64,
    /// Start angle in radians.
    pub start_angle: f64,
    /// End angle in radians.
    pub end_angle: f64,
}

impl SegmentArc {
    /// The angular width of this segment.
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// The angle through the middle of this segment's arc.
    pub fn mid_angle(&self) -> f64 {
        0.5 * (self.start_angle + self.end_angle)
    }

    /// The point at `radius` from the center along the midpoint angle.
    pub fn point_at(&self, radius: f64) -> Point {
        point_on_circle(self.center, radius, self.mid_angle())
    }

    /// Converts the arc to a `BezPath` with the given flattening tolerance.
    pub fn to_path(&self, tolerance: f64) -> BezPath {
        let circle = Circle::new(self.center, self.outer_radius);
        let segment = circle.segment(self.inner_radius, self.start_angle, self.sweep());
        segment.path_elements(tolerance).collect()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::ToString;
    use core::f64::consts::FRAC_PI_2;

    use super::*;

    fn arc() -> SegmentArc {
        SegmentArc {
            data_index: 0,
            label: "a".to_string(),
            value: 25.0,
            percentage: 25.0,
            fill: Color::BLACK,
            center: Point::new(50.0, 50.0),
            inner_radius: 0.0,
            outer_radius: 20.0,
            start_angle: 0.0,
            end_angle: FRAC_PI_2,
        }
    }

    #[test]
    fn mid_angle_bisects_the_sweep() {
        let arc = arc();
        assert!((arc.mid_angle() - FRAC_PI_2 / 2.0).abs() < 1e-12);
        assert!((arc.sweep() - FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn point_at_lies_on_the_mid_angle_ray() {
        let arc = arc();
        let p = arc.point_at(20.0);
        let expected = point_on_circle(arc.center, 20.0, arc.mid_angle());
        assert!((p - expected).hypot() < 1e-12);
    }

    #[test]
    fn path_has_nonzero_bounds() {
        let path = arc().to_path(0.1);
        let bbox = path.bounding_box();
        assert!(bbox.width() > 0.0, "expected a non-degenerate path");
        assert!(bbox.height() > 0.0, "expected a non-degenerate path");
    }
}
