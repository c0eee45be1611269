// Copyright 2026 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Segment ordering.
//!
//! Sorting happens once, before angle assignment, and produces a permutation
//! of original data indexes rather than moving the data: every downstream
//! entity keeps its original index so color and event correlation survive
//! any ordering.

extern crate alloc;

use alloc::string::ToString;
use alloc::vec::Vec;
use core::str::FromStr;

use crate::error::ConfigIssue;
use crate::spec::Datum;

/// Segment ordering applied before angle assignment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortOrder {
    /// Keep the input order.
    #[default]
    None,
    /// Smallest value first.
    ValueAsc,
    /// Largest value first.
    ValueDesc,
    /// Lexicographic label order.
    LabelAsc,
    /// Reverse lexicographic label order.
    LabelDesc,
}

impl FromStr for SortOrder {
    type Err = ConfigIssue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "value-asc" => Ok(Self::ValueAsc),
            "value-desc" => Ok(Self::ValueDesc),
            "label-asc" => Ok(Self::LabelAsc),
            "label-desc" => Ok(Self::LabelDesc),
            other => Err(ConfigIssue::UnknownSortOrder(other.to_string())),
        }
    }
}

/// Returns the original data indexes in render order.
///
/// The sort is stable: ties keep their input order.
pub fn sort_indices(data: &[Datum], order: SortOrder) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..data.len()).collect();
    match order {
        SortOrder::None => {}
        SortOrder::ValueAsc => {
            indices.sort_by(|&a, &b| data[a].value.total_cmp(&data[b].value));
        }
        SortOrder::ValueDesc => {
            indices.sort_by(|&a, &b| data[b].value.total_cmp(&data[a].value));
        }
        SortOrder::LabelAsc => {
            indices.sort_by(|&a, &b| data[a].label.cmp(&data[b].label));
        }
        SortOrder::LabelDesc => {
            indices.sort_by(|&a, &b| data[b].label.cmp(&data[a].label));
        }
    }
    indices
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    fn data() -> Vec<Datum> {
        vec![
            Datum::new("banana", 20.0),
            Datum::new("apple", 10.0),
            Datum::new("cherry", 20.0),
        ]
    }

    #[test]
    fn none_keeps_input_order() {
        assert_eq!(sort_indices(&data(), SortOrder::None), vec![0, 1, 2]);
    }

    #[test]
    fn value_sorts_are_stable_on_ties() {
        // banana and cherry tie at 20; banana (earlier) stays first.
        assert_eq!(sort_indices(&data(), SortOrder::ValueAsc), vec![1, 0, 2]);
        assert_eq!(sort_indices(&data(), SortOrder::ValueDesc), vec![0, 2, 1]);
    }

    #[test]
    fn label_sorts_use_lexicographic_order() {
        assert_eq!(sort_indices(&data(), SortOrder::LabelAsc), vec![1, 0, 2]);
        assert_eq!(sort_indices(&data(), SortOrder::LabelDesc), vec![2, 0, 1]);
    }

    #[test]
    fn parses_recognized_strings_and_rejects_junk() {
        assert_eq!("value-desc".parse::<SortOrder>(), Ok(SortOrder::ValueDesc));
        assert_eq!("none".parse::<SortOrder>(), Ok(SortOrder::None));
        assert!(matches!(
            "biggest-first".parse::<SortOrder>(),
            Err(ConfigIssue::UnknownSortOrder(_))
        ));
    }
}
