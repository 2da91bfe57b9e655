//! Read-out of finished ranges.

use vr_core::Real;

use crate::range::{NumericValueRange, ValueRange};

/// Ranges with bounds coerced to numbers, in list order.
///
/// Nothing is filtered: unparseable bounds come back as `NaN`.
pub fn coerce_ranges(ranges: &[ValueRange]) -> Vec<NumericValueRange> {
    ranges.iter().map(NumericValueRange::from).collect()
}

/// The range a live value falls into, first match in list order.
pub fn resolve_value(ranges: &[NumericValueRange], value: Real) -> Option<&NumericValueRange> {
    if value.is_nan() {
        return None;
    }
    ranges.iter().find(|r| r.contains(value))
}
