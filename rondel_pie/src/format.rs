// Copyright 2026 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Label text construction.

extern crate alloc;

use alloc::format;
use alloc::string::{String, ToString};
use core::str::FromStr;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::error::ConfigIssue;

/// What a label ring displays.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LabelFormat {
    /// No labels at all.
    None,
    /// The datum's label.
    #[default]
    Label,
    /// The datum's raw value.
    Value,
    /// The segment's share of the total.
    Percentage,
    /// Label and value, e.g. `Servers: 30`.
    LabelValue,
    /// Label and percentage, e.g. `Servers: 30%`.
    LabelPercentage,
}

impl FromStr for LabelFormat {
    type Err = ConfigIssue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "label" => Ok(Self::Label),
            "value" => Ok(Self::Value),
            "percentage" => Ok(Self::Percentage),
            "label-value" => Ok(Self::LabelValue),
            "label-percentage" => Ok(Self::LabelPercentage),
            other => Err(ConfigIssue::UnknownLabelFormat(other.to_string())),
        }
    }
}

/// Builds the display text for one segment's label.
///
/// Returns `None` for [`LabelFormat::None`]; the caller then skips the
/// candidate entirely rather than placing an empty box.
pub(crate) fn label_text(
    format: LabelFormat,
    label: &str,
    value: f64,
    percentage: f64,
    decimals: u8,
) -> Option<String> {
    match format {
        LabelFormat::None => None,
        LabelFormat::Label => Some(label.to_string()),
        LabelFormat::Value => Some(format_value(value)),
        LabelFormat::Percentage => Some(format_percentage(percentage, decimals)),
        LabelFormat::LabelValue => Some(format!("{label}: {}", format_value(value))),
        LabelFormat::LabelPercentage => {
            Some(format!("{label}: {}", format_percentage(percentage, decimals)))
        }
    }
}

/// Formats a raw value, dropping the fraction when it is integral.
fn format_value(value: f64) -> String {
    if value % 1.0 == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Formats a percentage rounded to `decimals` places, suffixed with `%`.
fn format_percentage(percentage: f64, decimals: u8) -> String {
    if decimals == 0 {
        format!("{}%", percentage.round() as i64)
    } else {
        format!("{:.*}%", decimals as usize, percentage)
    }
}
