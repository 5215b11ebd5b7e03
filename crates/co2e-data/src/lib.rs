//! Data-driven setup for the emissions engine.
//!
//! Loads emission factor catalogs and engine settings from RON, JSON or TOML
//! files, and row records from JSON, then builds a ready
//! [`EmissionsEngine`].
//!
//! A data directory may contain:
//!
//! - `engine.{ron,toml,json}` -- optional [`schema::EngineFileData`].
//! - `factors.{ron,toml,json}` -- optional list of [`schema::FactorData`],
//!   appended after the built-in catalog unless `include_defaults` is false.

pub mod loader;
pub mod schema;

use std::path::Path;

use co2e_core::{EmissionFactor, EmissionsEngine, FactorRegistry, Record};
use tracing::{debug, info};

pub use loader::{DataLoadError, Format, deserialize_file, deserialize_list, find_data_file};
use loader::check_unique_ids;
use schema::{EngineFileData, FactorData};

/// Result of loading a data directory.
#[derive(Debug, Clone)]
pub struct EngineData {
    pub engine: EmissionsEngine,
    /// Number of factors read from `factors.*` (0 if the file is absent).
    pub file_factor_count: usize,
}

/// Load and validate a factor list file.
pub fn load_factor_file(path: &Path) -> Result<Vec<EmissionFactor>, DataLoadError> {
    let data: Vec<FactorData> = deserialize_list(path, "factors")?;
    check_unique_ids(data.iter().map(|f| f.id.as_str()), path)?;

    // Validate against an empty registry so errors carry file context.
    let mut scratch = FactorRegistry::new();
    for entry in data {
        scratch
            .add(entry.into())
            .map_err(|source| DataLoadError::InvalidFactor {
                file: path.to_path_buf(),
                source,
            })?;
    }

    debug!(file = %path.display(), count = scratch.len(), "loaded factor file");
    Ok(scratch.iter().cloned().collect())
}

/// Load `engine.*` and `factors.*` from `dir` and build an engine.
pub fn load_engine_data(dir: &Path) -> Result<EngineData, DataLoadError> {
    let settings = match find_data_file(dir, "engine")? {
        Some(path) => {
            let settings = deserialize_file::<EngineFileData>(&path)?;
            settings
                .config
                .validate()
                .map_err(|source| DataLoadError::InvalidConfig { file: path, source })?;
            settings
        }
        None => EngineFileData::default(),
    };

    let mut registry = if settings.include_defaults {
        FactorRegistry::with_defaults()
    } else {
        FactorRegistry::new()
    };

    let mut file_factor_count = 0;
    if let Some(path) = find_data_file(dir, "factors")? {
        let factors = load_factor_file(&path)?;
        file_factor_count = factors.len();
        registry
            .extend(factors)
            .map_err(|source| DataLoadError::InvalidFactor { file: path, source })?;
    }

    info!(
        dir = %dir.display(),
        factors = registry.len(),
        file_factors = file_factor_count,
        region = %settings.config.default_region,
        "engine data loaded"
    );

    Ok(EngineData {
        engine: EmissionsEngine::new(registry, settings.config),
        file_factor_count,
    })
}

/// Parse a JSON array of row objects, keeping each row's column order.
pub fn load_records_json(json: &str) -> Result<Vec<Record>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Read row records from a `.json` or `.ron` file.
pub fn load_records_file(path: &Path) -> Result<Vec<Record>, DataLoadError> {
    match loader::detect_format(path)? {
        Format::Toml => Err(DataLoadError::UnsupportedFormat {
            file: path.to_path_buf(),
        }),
        _ => deserialize_file(path),
    }
}
