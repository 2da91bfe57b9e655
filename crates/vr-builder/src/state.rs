//! Range set snapshot and the pure reducer over it.

use std::cmp::Ordering;

use vr_core::RangeId;

use crate::color::ColorSwatch;
use crate::range::{RangeField, ValueRange};

/// Immutable snapshot of a range set.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeSetState {
    pub value_ranges: Vec<ValueRange>,
    pub color_swatch: ColorSwatch,
    pub min_ranges: usize,
    pub max_ranges: Option<usize>,
}

impl RangeSetState {
    /// Initial snapshot; ranges are sorted by ascending `min`.
    pub fn initial(
        mut value_ranges: Vec<ValueRange>,
        color_swatch: ColorSwatch,
        min_ranges: usize,
        max_ranges: Option<usize>,
    ) -> Self {
        sort_by_min(&mut value_ranges);
        Self {
            value_ranges,
            color_swatch,
            min_ranges,
            max_ranges,
        }
    }

    pub fn len(&self) -> usize {
        self.value_ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.value_ranges.is_empty()
    }

    pub fn contains(&self, id: &RangeId) -> bool {
        self.value_ranges.iter().any(|r| &r.id == id)
    }

    pub fn get(&self, id: &RangeId) -> Option<&ValueRange> {
        self.value_ranges.iter().find(|r| &r.id == id)
    }
}

/// Stable sort by numeric `min`.
///
/// Ranges whose `min` does not parse keep their relative order after all
/// numeric ones.
pub fn sort_by_min(ranges: &mut [ValueRange]) {
    ranges.sort_by(|a, b| match (a.min.parse(), b.min.parse()) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

/// Edits applied to a range set.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Append a blank range.
    Add { id: RangeId, color: String },
    /// Replace one field of an existing range.
    Update {
        id: RangeId,
        field: RangeField,
        value: String,
    },
    Delete { id: RangeId },
}

/// Apply `action` to `state`, producing a new snapshot.
///
/// `state` is never modified. Updates and deletes naming an unknown id, and
/// adds reusing an existing id, leave the set unchanged. The maximum range
/// count is not enforced here.
pub fn reduce(state: &RangeSetState, action: &Action) -> RangeSetState {
    match action {
        Action::Add { id, color } => {
            if state.contains(id) {
                return state.clone();
            }
            let mut next = state.clone();
            next.value_ranges.push(ValueRange::blank(id.clone(), color.as_str()));
            next
        }
        Action::Update { id, field, value } => {
            let mut next = state.clone();
            if let Some(range) = next.value_ranges.iter_mut().find(|r| &r.id == id) {
                *range = range.with_field(*field, value);
            }
            next
        }
        Action::Delete { id } => {
            let mut next = state.clone();
            next.value_ranges.retain(|r| &r.id != id);
            next
        }
    }
}
