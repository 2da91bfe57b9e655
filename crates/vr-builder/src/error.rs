//! Error types for builder operations.
//!
//! Malformed bounds are never errors; they show up in the validation map.
//! These errors only cover requests the builder refuses outright.

use thiserror::Error;
use vr_core::RangeId;

/// Result type for builder operations.
pub type BuilderResult<T> = Result<T, BuilderError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum BuilderError {
    /// Adding would exceed the configured maximum.
    #[error("Cannot add value range: maximum of {max} ranges reached")]
    MaxRangesReached { max: usize },

    /// Deleting would drop below the configured minimum.
    #[error("Cannot delete value range: minimum of {min} ranges required")]
    MinRangesReached { min: usize },

    /// Two ranges share an id.
    #[error("Duplicate value range id: {id}")]
    DuplicateId { id: RangeId },

    /// No range with this id exists in the current set.
    #[error("Unknown value range: {id}")]
    UnknownRange { id: RangeId },
}
