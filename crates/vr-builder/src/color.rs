//! Color swatch and color assignment for new ranges.

use serde::{Deserialize, Serialize};
use vr_core::{VrError, VrResult};

use crate::range::ValueRange;

/// Palette used when the caller does not supply one.
pub const DEFAULT_SWATCH: [&str; 8] = [
    "#C32F27", "#D9822B", "#F2C200", "#33A02C", "#1F78B4", "#6A3D9A", "#B15928", "#8C8C8C",
];

/// Ordered, non-empty palette assigned to new ranges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct ColorSwatch(Vec<String>);

impl ColorSwatch {
    pub fn new(colors: Vec<String>) -> VrResult<Self> {
        if colors.is_empty() {
            return Err(VrError::InvalidArg {
                what: "color swatch must contain at least one color",
            });
        }
        Ok(Self(colors))
    }

    pub fn colors(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for ColorSwatch {
    fn default() -> Self {
        Self(DEFAULT_SWATCH.iter().map(|c| c.to_string()).collect())
    }
}

impl TryFrom<Vec<String>> for ColorSwatch {
    type Error = VrError;

    fn try_from(colors: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(colors)
    }
}

impl From<ColorSwatch> for Vec<String> {
    fn from(swatch: ColorSwatch) -> Self {
        swatch.0
    }
}

/// Color for the next range added to `ranges`.
///
/// The first swatch color no range uses yet wins. Once every color is taken,
/// the least-used color is picked, earliest in the swatch on ties, so repeated
/// adds walk the palette round robin.
pub fn next_color(ranges: &[ValueRange], swatch: &ColorSwatch) -> String {
    let usage = |color: &str| {
        ranges
            .iter()
            .filter(|r| r.color.eq_ignore_ascii_case(color))
            .count()
    };

    swatch
        .colors()
        .iter()
        .enumerate()
        .min_by_key(|(idx, color)| (usage(color), *idx))
        .map(|(_, color)| color.clone())
        .unwrap_or_else(|| DEFAULT_SWATCH[0].to_string())
}
