//! Range set document definitions.

use serde::{Deserialize, Serialize};
use vr_builder::{BuilderConfig, ColorSwatch, ValueRange, ValueRangeBuilder};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RangeSetDocument {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub min_ranges: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_ranges: Option<usize>,
    /// Custom palette; the default swatch applies when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swatch: Option<ColorSwatch>,
    #[serde(default)]
    pub ranges: Vec<ValueRange>,
}

impl RangeSetDocument {
    pub fn builder_config(&self) -> BuilderConfig {
        BuilderConfig {
            initial_ranges: self.ranges.clone(),
            custom_swatch: self.swatch.clone(),
            min_ranges: self.min_ranges,
            max_ranges: self.max_ranges,
        }
    }

    /// Same document with the builder's current ranges.
    pub fn with_ranges_from(&self, builder: &ValueRangeBuilder) -> Self {
        Self {
            ranges: builder.value_ranges().to_vec(),
            ..self.clone()
        }
    }
}
