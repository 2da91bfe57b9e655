//! Editable numeric bounds.
//!
//! While a range is being authored its bounds are whatever the user typed.
//! Parsing never fails loudly: a bound that is not a finite number simply has
//! no numeric value, and coerces to `NaN`.

use core::fmt;

/// Floating point type used for range bounds.
pub type Real = f64;

/// A range bound as entered: either a number or raw text.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Bound {
    Number(Real),
    Text(String),
}

impl Bound {
    /// Bound of a freshly added range.
    pub fn empty() -> Self {
        Bound::Text(String::new())
    }

    /// Numeric value of the bound, if it is a finite number.
    pub fn parse(&self) -> Option<Real> {
        match self {
            Bound::Number(v) => v.is_finite().then_some(*v),
            Bound::Text(s) => parse_real(s),
        }
    }

    /// Numeric value, or `NaN` when the bound does not parse.
    pub fn coerce(&self) -> Real {
        self.parse().unwrap_or(Real::NAN)
    }

    pub fn is_valid(&self) -> bool {
        self.parse().is_some()
    }
}

impl Default for Bound {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Real> for Bound {
    fn from(value: Real) -> Self {
        Bound::Number(value)
    }
}

impl From<&str> for Bound {
    fn from(value: &str) -> Self {
        Bound::Text(value.to_string())
    }
}

impl From<String> for Bound {
    fn from(value: String) -> Self {
        Bound::Text(value)
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::Number(v) => write!(f, "{v}"),
            Bound::Text(s) => f.write_str(s),
        }
    }
}

/// Parse user text as a finite number.
///
/// Surrounding whitespace is ignored. Empty text, `NaN` and infinities are
/// rejected.
pub fn parse_real(text: &str) -> Option<Real> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    // Rust accepts "inf"/"nan" spellings; the finiteness check drops them.
    trimmed.parse::<Real>().ok().filter(|v| v.is_finite())
}
