//! Value range builder: an ordered set of labeled numeric ranges, the pure
//! reducer that edits it, and the validation engine that checks it.
//!
//! # Architecture
//!
//! - [`state`] holds the immutable range set snapshot and the [`reduce`] function
//! - [`validation`] derives per-range flags and the global overlap flag
//! - [`builder`] owns a snapshot, recomputes validation after every action and
//!   notifies a consumer of aggregate validity
//! - [`query`] hands ranges back with bounds coerced to numbers

pub mod builder;
pub mod color;
pub mod error;
pub mod query;
pub mod range;
pub mod state;
pub mod validation;

pub use builder::{BuilderConfig, ValueRangeBuilder};
pub use color::{ColorSwatch, DEFAULT_SWATCH, next_color};
pub use error::{BuilderError, BuilderResult};
pub use query::{coerce_ranges, resolve_value};
pub use range::{NumericValueRange, RangeField, ValueRange};
pub use state::{Action, RangeSetState, reduce, sort_by_min};
pub use validation::{
    OVERLAP_MESSAGE, RangeIssue, ValidationEntry, ValidationMap, are_distinct_value_ranges_valid,
    are_ranges_valid, compute_validation_map, detect_overlap, find_overlap,
};
