// Copyright 2026 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error and warning taxonomy for pie layout.
//!
//! Validation is fail-fast: every [`PieError`] is detected before any geometry
//! is produced, so a layout pass either returns a complete [`crate::PieLayout`]
//! or nothing. Degenerate-but-renderable situations (a canvas smaller than its
//! own padding) are reported as [`LayoutWarning`]s on the finished layout
//! instead of aborting the pass.

extern crate alloc;

use alloc::string::String;

use thiserror::Error;

/// An error raised while validating configuration or data.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum PieError {
    /// The configuration is malformed.
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigIssue),
    /// The data set cannot be rendered as proportional arcs.
    #[error("invalid data: {0}")]
    InvalidData(#[from] DataIssue),
}

/// The specific configuration problem behind [`PieError::InvalidConfig`].
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigIssue {
    /// The segment palette has no entries to cycle through.
    #[error("segment palette is empty")]
    EmptyPalette,
    /// A sort-order string was not one of the recognized values.
    #[error("unrecognized sort order `{0}`")]
    UnknownSortOrder(String),
    /// A header-location string was not one of the recognized values.
    #[error("unrecognized header location `{0}`")]
    UnknownHeaderLocation(String),
    /// A footer-location string was not one of the recognized values.
    #[error("unrecognized footer location `{0}`")]
    UnknownFooterLocation(String),
    /// A label-format string was not one of the recognized values.
    #[error("unrecognized label format `{0}`")]
    UnknownLabelFormat(String),
    /// A recognized update path was handed a value of the wrong shape.
    #[error("property `{path}` rejects value `{value}`")]
    BadPropertyValue {
        /// The dotted property path.
        path: String,
        /// A display rendering of the rejected value.
        value: String,
    },
}

/// The specific data problem behind [`PieError::InvalidData`].
#[derive(Clone, Debug, PartialEq, Error)]
pub enum DataIssue {
    /// The data set has no entries.
    #[error("data set is empty")]
    Empty,
    /// A negative value cannot be rendered as a proportional arc.
    #[error("datum {index} has negative value {value}")]
    NegativeValue {
        /// Original index of the offending datum.
        index: usize,
        /// The offending value.
        value: f64,
    },
    /// The sum of all values must be positive for angles to be defined.
    #[error("total of segment values is {0}, must be positive")]
    NonPositiveTotal(f64),
}

/// A non-fatal condition recorded on a completed layout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LayoutWarning {
    /// The canvas, after subtracting padding and header/footer heights, left
    /// no room for the pie. The radii were clamped to a minimum viable size.
    GeometryConflict {
        /// Horizontal space that remained for the pie.
        available_width: f64,
        /// Vertical space that remained for the pie.
        available_height: f64,
    },
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::ToString;

    use super::*;

    #[test]
    fn errors_render_their_detail() {
        let err = PieError::from(DataIssue::NegativeValue {
            index: 2,
            value: -5.0,
        });
        assert_eq!(err.to_string(), "invalid data: datum 2 has negative value -5");

        let err = PieError::from(ConfigIssue::UnknownSortOrder("biggest".to_string()));
        assert_eq!(err.to_string(), "invalid config: unrecognized sort order `biggest`");
    }
}
