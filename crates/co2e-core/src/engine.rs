//! Calculation orchestrator: the public entry point of the engine.
//!
//! Drives the row processor over every input record, then aggregates the
//! processed points and derives insights. A calculation never fails; every
//! problem ends up as a warning in the returned [`CalculationResult`].

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, info};

use crate::aggregate::{aggregate, round2};
use crate::config::EngineConfig;
use crate::factor::{Category, EmissionFactor};
use crate::insight::{ProcessingStats, generate_recommendations, generate_warnings};
use crate::processor::{ProcessedDataPoint, Rejection, process_row};
use crate::record::Record;
use crate::registry::{FactorRegistry, RegistryError};

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Row accounting for one calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationSummary {
    pub total_rows: usize,
    pub processed_rows: usize,
    pub skipped_rows: usize,
    /// Number of distinct categories seen.
    pub categories: usize,
    pub average_confidence: f64,
}

/// Output of one calculation. Borrows the input rows through
/// [`ProcessedDataPoint::original_row`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult<'a> {
    /// kg CO2e, raw point emissions summed then rounded to two decimals.
    pub total_emissions: f64,
    pub breakdown: BTreeMap<String, f64>,
    pub category_breakdown: BTreeMap<Category, f64>,
    pub confidence: f64,
    pub warnings: Vec<String>,
    pub recommendations: Vec<String>,
    pub processed_data: Vec<ProcessedDataPoint<'a>>,
    pub summary: CalculationSummary,
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// A registry plus the thresholds used to interpret results.
#[derive(Debug, Clone)]
pub struct EmissionsEngine {
    registry: FactorRegistry,
    config: EngineConfig,
}

impl Default for EmissionsEngine {
    fn default() -> Self {
        Self::new(FactorRegistry::with_defaults(), EngineConfig::default())
    }
}

impl EmissionsEngine {
    pub fn new(registry: FactorRegistry, config: EngineConfig) -> Self {
        Self { registry, config }
    }

    pub fn registry(&self) -> &FactorRegistry {
        &self.registry
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Append a custom factor. Affects later calculations only.
    pub fn add_factor(&mut self, factor: EmissionFactor) -> Result<(), RegistryError> {
        self.registry.add(factor)
    }

    /// Factors usable for `region` (its own plus global entries).
    pub fn available_factors(&self, region: &str) -> Vec<&EmissionFactor> {
        self.registry.available_for_region(region)
    }

    /// Calculate using the configured default region.
    pub fn calculate<'a>(&self, rows: &'a [Record]) -> CalculationResult<'a> {
        self.calculate_emissions(rows, &self.config.default_region)
    }

    /// Calculate emissions for `rows`, preferring factors for `region`.
    pub fn calculate_emissions<'a>(
        &self,
        rows: &'a [Record],
        region: &str,
    ) -> CalculationResult<'a> {
        run(&self.registry, &self.config, rows, region)
    }
}

/// One-shot calculation against `registry` with default thresholds.
pub fn calculate_emissions<'a>(
    registry: &FactorRegistry,
    rows: &'a [Record],
    region: &str,
) -> CalculationResult<'a> {
    run(registry, &EngineConfig::default(), rows, region)
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

fn run<'a>(
    registry: &FactorRegistry,
    config: &EngineConfig,
    rows: &'a [Record],
    region: &str,
) -> CalculationResult<'a> {
    let outcomes = process_rows(registry, rows, region, config.regional_boost);

    let mut processed = Vec::with_capacity(outcomes.len());
    let mut rejections: Vec<(usize, Rejection)> = Vec::new();
    for (index, outcome) in outcomes.into_iter().enumerate() {
        match outcome {
            Ok(point) => processed.push(point),
            Err(reason) => {
                debug!(row = index + 1, %reason, "row skipped");
                rejections.push((index, reason));
            }
        }
    }

    let average_confidence = if processed.is_empty() {
        0.0
    } else {
        processed.iter().map(|p| p.confidence).sum::<f64>() / processed.len() as f64
    };
    let total_emissions = round2(processed.iter().map(|p| p.emissions).sum());

    let stats = ProcessingStats {
        total_rows: rows.len(),
        skipped_rows: rejections.len(),
        average_confidence,
    };
    let breakdown = aggregate(&processed);
    let warnings = generate_warnings(&rejections, &stats, config);
    let recommendations = generate_recommendations(&breakdown, config);

    let summary = CalculationSummary {
        total_rows: rows.len(),
        processed_rows: processed.len(),
        skipped_rows: rejections.len(),
        categories: breakdown.by_category.len(),
        average_confidence,
    };

    info!(
        region,
        total_rows = summary.total_rows,
        processed_rows = summary.processed_rows,
        skipped_rows = summary.skipped_rows,
        total_emissions,
        "emissions calculated"
    );

    CalculationResult {
        total_emissions,
        breakdown: breakdown.by_activity,
        category_breakdown: breakdown.by_category,
        confidence: average_confidence,
        warnings,
        recommendations,
        processed_data: processed,
        summary,
    }
}

#[cfg(not(feature = "parallel"))]
fn process_rows<'a>(
    registry: &FactorRegistry,
    rows: &'a [Record],
    region: &str,
    regional_boost: f64,
) -> Vec<Result<ProcessedDataPoint<'a>, Rejection>> {
    rows.iter()
        .map(|row| process_row(registry, row, region, regional_boost))
        .collect()
}

/// Rows are independent; rayon's indexed collect keeps input order.
#[cfg(feature = "parallel")]
fn process_rows<'a>(
    registry: &FactorRegistry,
    rows: &'a [Record],
    region: &str,
    regional_boost: f64,
) -> Vec<Result<ProcessedDataPoint<'a>, Rejection>> {
    use rayon::prelude::*;

    rows.par_iter()
        .map(|row| process_row(registry, row, region, regional_boost))
        .collect()
}
