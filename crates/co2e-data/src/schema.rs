//! Serde data file structs for emission factor catalogs and engine settings.
//!
//! These define the on-disk format. They are deserialized from RON, JSON or
//! TOML files and converted into core types by the loader.

use co2e_core::{Category, EmissionFactor, EngineConfig, GLOBAL_REGION};
use serde::Deserialize;

// ===========================================================================
// Factors
// ===========================================================================

/// An emission factor entry in a data file.
#[derive(Debug, Clone, Deserialize)]
pub struct FactorData {
    pub id: String,
    pub activity: String,
    pub category: String,
    pub factor: f64,
    pub unit: String,
    #[serde(default)]
    pub source: String,
    #[serde(default = "default_region")]
    pub region: String,
    #[serde(default)]
    pub year: u16,
}

fn default_region() -> String {
    GLOBAL_REGION.to_string()
}

impl From<FactorData> for EmissionFactor {
    fn from(data: FactorData) -> Self {
        EmissionFactor {
            id: data.id,
            activity: data.activity,
            category: Category::from(data.category),
            factor: data.factor,
            unit: data.unit,
            source: data.source,
            region: data.region,
            year: data.year,
        }
    }
}

// ===========================================================================
// Engine settings
// ===========================================================================

/// Contents of an `engine.{ron,toml,json}` file.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineFileData {
    /// Seed the registry with the built-in catalog before file factors.
    #[serde(default = "default_true")]
    pub include_defaults: bool,
    #[serde(default)]
    pub config: EngineConfig,
}

fn default_true() -> bool {
    true
}

impl Default for EngineFileData {
    fn default() -> Self {
        Self {
            include_defaults: true,
            config: EngineConfig::default(),
        }
    }
}
