//! CO2e Core -- the emissions calculation engine.
//!
//! Converts loosely-structured activity rows (energy use, travel, waste,
//! industrial output, agriculture) into kg CO2-equivalent estimates with a
//! confidence score, warnings and reduction recommendations.
//!
//! # Pipeline
//!
//! Each call to [`engine::EmissionsEngine::calculate_emissions`] runs:
//!
//! 1. **Extract** -- recover activity, amount, date and location from each
//!    [`record::Record`] using ordered column-name heuristics.
//! 2. **Match** -- score the activity against every [`registry::FactorRegistry`]
//!    entry and apply a regional override when one exists.
//! 3. **Process** -- compute per-row emissions or reject the row.
//! 4. **Aggregate** -- sum emissions per activity and per category.
//! 5. **Insights** -- derive warnings and recommendations.
//!
//! Rows are independent; with the `parallel` feature step 1-3 run on rayon.
//!
//! ```rust,ignore
//! let engine = EmissionsEngine::default();
//! let rows = vec![Record::new().with("Activity", "Electricity").with("Amount", "1250")];
//! let result = engine.calculate_emissions(&rows, "Global");
//! assert_eq!(result.total_emissions, 500.0);
//! ```
//!
//! # Key Types
//!
//! - [`engine::EmissionsEngine`] -- orchestrator owning a registry and config.
//! - [`registry::FactorRegistry`] -- append-only, ordered factor catalog.
//! - [`engine::CalculationResult`] -- the serializable output.
//! - [`config::EngineConfig`] -- thresholds for matching and insights.

pub mod aggregate;
pub mod config;
pub mod defaults;
pub mod engine;
pub mod extract;
pub mod factor;
pub mod insight;
pub mod matcher;
pub mod processor;
pub mod record;
pub mod registry;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::{ConfigError, EngineConfig};
pub use engine::{CalculationResult, CalculationSummary, EmissionsEngine, calculate_emissions};
pub use factor::{Category, EmissionFactor, GLOBAL_REGION};
pub use processor::{ProcessedDataPoint, Rejection};
pub use record::{CellValue, Record};
pub use registry::{FactorRegistry, RegistryError};
