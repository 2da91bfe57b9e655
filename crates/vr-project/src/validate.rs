//! Document validation.
//!
//! Only structural problems are errors here. Unparseable bounds and
//! overlapping ranges are normal while editing and are reported by the
//! builder's validation map instead.

use std::collections::HashSet;

use crate::schema::RangeSetDocument;

pub const LATEST_VERSION: u32 = 1;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_document(document: &RangeSetDocument) -> Result<(), ValidationError> {
    if document.version == 0 || document.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: document.version,
        });
    }

    let mut range_ids = HashSet::new();
    for range in &document.ranges {
        if range.id.as_str().trim().is_empty() {
            return Err(ValidationError::InvalidValue {
                field: "range id".to_string(),
                value: range.id.to_string(),
                reason: "must not be blank".to_string(),
            });
        }
        if !range_ids.insert(&range.id) {
            return Err(ValidationError::DuplicateId {
                id: range.id.to_string(),
                context: "ranges".to_string(),
            });
        }
    }

    if let Some(max) = document.max_ranges {
        if max == 0 {
            return Err(ValidationError::InvalidValue {
                field: "max_ranges".to_string(),
                value: max.to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        if document.min_ranges > max {
            return Err(ValidationError::InvalidValue {
                field: "min_ranges".to_string(),
                value: document.min_ranges.to_string(),
                reason: format!("exceeds max_ranges ({max})"),
            });
        }
        if document.ranges.len() > max {
            return Err(ValidationError::InvalidValue {
                field: "ranges".to_string(),
                value: document.ranges.len().to_string(),
                reason: format!("more ranges than max_ranges ({max})"),
            });
        }
    }

    Ok(())
}
