//! Range records, as edited and as handed back to the owner.

use serde::{Deserialize, Serialize};
use vr_core::{Bound, RangeId, Real};

/// A labeled range as held while authoring.
///
/// `min` and `max` keep whatever the user entered; they are only turned into
/// numbers on validation and on read-out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub id: RangeId,
    #[serde(default)]
    pub min: Bound,
    #[serde(default)]
    pub max: Bound,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ValueRange {
    pub fn new(
        id: impl Into<RangeId>,
        min: impl Into<Bound>,
        max: impl Into<Bound>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            min: min.into(),
            max: max.into(),
            color: color.into(),
            message: None,
        }
    }

    /// A freshly added range: empty bounds, no message.
    pub fn blank(id: RangeId, color: impl Into<String>) -> Self {
        Self {
            id,
            min: Bound::empty(),
            max: Bound::empty(),
            color: color.into(),
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Copy of this range with one field replaced by `value`.
    ///
    /// An empty message clears it.
    pub fn with_field(&self, field: RangeField, value: &str) -> Self {
        let mut next = self.clone();
        match field {
            RangeField::Min => next.min = Bound::from(value),
            RangeField::Max => next.max = Bound::from(value),
            RangeField::Color => next.color = value.to_string(),
            RangeField::Message => {
                next.message = (!value.is_empty()).then(|| value.to_string());
            }
        }
        next
    }
}

/// Editable fields of a [`ValueRange`]. The id is not editable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeField {
    Min,
    Max,
    Color,
    Message,
}

/// A range with bounds coerced to numbers.
///
/// Bounds that did not parse are `NaN`; check validity before relying on them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericValueRange {
    pub id: RangeId,
    pub min: Real,
    pub max: Real,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl NumericValueRange {
    /// Closed-interval membership. `NaN` bounds contain nothing.
    pub fn contains(&self, value: Real) -> bool {
        self.min <= value && value <= self.max
    }
}

impl From<&ValueRange> for NumericValueRange {
    fn from(range: &ValueRange) -> Self {
        Self {
            id: range.id.clone(),
            min: range.min.coerce(),
            max: range.max.coerce(),
            color: range.color.clone(),
            message: range.message.clone(),
        }
    }
}
