//! Engine thresholds and their validation.

use serde::{Deserialize, Serialize};

use crate::factor::GLOBAL_REGION;
use crate::matcher::DEFAULT_REGIONAL_BOOST;

/// Tunable thresholds for matching and insight generation.
///
/// Fields omitted from a config file take their default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Region used by [`crate::engine::EmissionsEngine::calculate`].
    pub default_region: String,
    /// Confidence added when a regional override is applied.
    pub regional_boost: f64,
    /// Skipped-row share above which a data-quality warning is raised.
    pub skipped_warning_ratio: f64,
    /// Average confidence below which a low-confidence warning is raised.
    pub low_confidence_threshold: f64,
    /// Category share (percent) above which a category recommendation fires.
    pub category_share_percent: f64,
    /// Total kg CO2e above which offsets are suggested.
    pub offset_threshold_kg: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_region: GLOBAL_REGION.to_string(),
            regional_boost: DEFAULT_REGIONAL_BOOST,
            skipped_warning_ratio: 0.1,
            low_confidence_threshold: 0.7,
            category_share_percent: 30.0,
            offset_threshold_kg: 10_000.0,
        }
    }
}

/// A config value outside its valid range.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("config field '{field}' must be finite and non-negative, got {value}")]
    OutOfRange { field: &'static str, value: f64 },
}

impl EngineConfig {
    /// Reject negative or non-finite thresholds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("regional_boost", self.regional_boost),
            ("skipped_warning_ratio", self.skipped_warning_ratio),
            ("low_confidence_threshold", self.low_confidence_threshold),
            ("category_share_percent", self.category_share_percent),
            ("offset_threshold_kg", self.offset_threshold_kg),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::OutOfRange { field, value });
            }
        }
        Ok(())
    }
}
