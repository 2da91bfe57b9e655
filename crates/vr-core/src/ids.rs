use core::fmt;

/// Identifier of a single value range.
///
/// Ids are opaque strings. They are unique within one range set and never
/// change after the range is created.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RangeId(String);

impl RangeId {
    /// Fresh random id (UUID v4 in simple, hyphen-less form).
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RangeId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for RangeId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for RangeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for RangeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RangeId({})", self.0)
    }
}

impl fmt::Display for RangeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}
