//! Validation engine.
//!
//! Everything here is a pure function of the range list. Bad input is never
//! an error: it shows up as a `false` flag.

use std::collections::BTreeMap;
use std::fmt;

use vr_core::{RangeId, Real};

use crate::range::ValueRange;

/// Shown once for the whole set when distinctly valid ranges overlap.
pub const OVERLAP_MESSAGE: &str =
    "Value ranges overlap. Adjust the bounds so each value maps to a single range.";

/// Per-range validation flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidationEntry {
    pub is_min_valid: bool,
    pub is_max_valid: bool,
    pub is_min_less_than_max: bool,
}

impl ValidationEntry {
    pub fn for_range(range: &ValueRange) -> Self {
        let min = range.min.parse();
        let max = range.max.parse();
        Self {
            is_min_valid: min.is_some(),
            is_max_valid: max.is_some(),
            is_min_less_than_max: matches!((min, max), (Some(lo), Some(hi)) if lo < hi),
        }
    }

    /// Both bounds numeric and `min < max`.
    pub fn is_distinctly_valid(&self) -> bool {
        self.is_min_valid && self.is_max_valid && self.is_min_less_than_max
    }

    /// First problem to report for this range, if any.
    pub fn issue(&self) -> Option<RangeIssue> {
        if !self.is_min_valid {
            Some(RangeIssue::InvalidMin)
        } else if !self.is_max_valid {
            Some(RangeIssue::InvalidMax)
        } else if !self.is_min_less_than_max {
            Some(RangeIssue::MinNotLessThanMax)
        } else {
            None
        }
    }
}

/// Row-level problem with a single range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeIssue {
    InvalidMin,
    InvalidMax,
    MinNotLessThanMax,
}

impl fmt::Display for RangeIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            RangeIssue::InvalidMin => "Minimum value must be a number",
            RangeIssue::InvalidMax => "Maximum value must be a number",
            RangeIssue::MinNotLessThanMax => "Minimum value must be less than maximum value",
        };
        f.write_str(msg)
    }
}

/// Validation flags for every range plus the set-wide overlap flag.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationMap {
    pub entries: BTreeMap<RangeId, ValidationEntry>,
    pub overlap_found: bool,
}

impl ValidationMap {
    pub fn get(&self, id: &RangeId) -> Option<&ValidationEntry> {
        self.entries.get(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn is_distinctly_valid(&self, id: &RangeId) -> bool {
        self.get(id).is_some_and(ValidationEntry::is_distinctly_valid)
    }
}

/// Flags for every range, with `overlap_found` filled in.
pub fn compute_validation_map(ranges: &[ValueRange]) -> ValidationMap {
    let mut map = ValidationMap {
        entries: ranges
            .iter()
            .map(|r| (r.id.clone(), ValidationEntry::for_range(r)))
            .collect(),
        overlap_found: false,
    };
    map.overlap_found = detect_overlap(ranges, &map);
    map
}

/// True if any two distinctly valid ranges share at least one value.
pub fn detect_overlap(ranges: &[ValueRange], map: &ValidationMap) -> bool {
    find_overlap(ranges, map).is_some()
}

/// First overlapping pair in ascending-`min` order.
///
/// Only distinctly valid ranges take part. Intervals are closed, so ranges
/// touching at a single bound overlap. The pair is `(earlier, later)`.
pub fn find_overlap(ranges: &[ValueRange], map: &ValidationMap) -> Option<(RangeId, RangeId)> {
    let mut valid: Vec<(Real, Real, &RangeId)> = ranges
        .iter()
        .filter(|r| map.is_distinctly_valid(&r.id))
        .filter_map(|r| Some((r.min.parse()?, r.max.parse()?, &r.id)))
        .collect();
    valid.sort_by(|a, b| a.0.total_cmp(&b.0));

    // Furthest max seen so far; sorted by min, anything starting at or
    // before it intersects the range that reached it.
    let mut reach: Option<(Real, &RangeId)> = None;
    for (min, max, id) in valid {
        if let Some((reach_max, reach_id)) = reach {
            if min <= reach_max {
                return Some((reach_id.clone(), id.clone()));
            }
        }
        if reach.is_none_or(|(reach_max, _)| max > reach_max) {
            reach = Some((max, id));
        }
    }
    None
}

/// True iff every range is distinctly valid. Ignores overlap.
pub fn are_distinct_value_ranges_valid(map: &ValidationMap) -> bool {
    map.entries.values().all(ValidationEntry::is_distinctly_valid)
}

/// Aggregate validity reported to the consumer.
pub fn are_ranges_valid(map: &ValidationMap) -> bool {
    are_distinct_value_ranges_valid(map) && !map.overlap_found
}
