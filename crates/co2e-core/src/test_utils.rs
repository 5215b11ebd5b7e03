//! Shared test helpers for unit tests, integration tests and benchmarks.
//!
//! Gated behind `#[cfg(any(test, feature = "test-utils"))]`.

use crate::factor::{Category, EmissionFactor};
use crate::processor::ProcessedDataPoint;
use crate::record::Record;

// ===========================================================================
// Records
// ===========================================================================

/// Build a record of text cells.
pub fn row(cells: &[(&str, &str)]) -> Record {
    cells.iter().map(|&(k, v)| (k, v)).collect()
}

/// `{Activity, Amount}` record, the most common shape in fixtures.
pub fn activity_row(activity: &str, amount: f64) -> Record {
    Record::new()
        .with("Activity", activity)
        .with("Amount", amount)
}

/// Activities from the built-in catalog, used to synthesize inputs.
pub const KNOWN_ACTIVITIES: &[&str] = &[
    "electricity",
    "natural gas",
    "diesel car",
    "petrol car",
    "bus",
    "landfill waste",
    "steel production",
    "rice production",
    "long haul flight",
    "coal",
];

/// `n` rows cycling through known activities, with every `reject_every`-th
/// row (1-based) made unmatchable. `reject_every == 0` disables rejects.
pub fn synthetic_rows(n: usize, reject_every: usize) -> Vec<Record> {
    (0..n)
        .map(|i| {
            if reject_every > 0 && (i + 1) % reject_every == 0 {
                activity_row("office chairs", 1.0)
            } else {
                let activity = KNOWN_ACTIVITIES[i % KNOWN_ACTIVITIES.len()];
                activity_row(activity, 10.0 + i as f64)
            }
        })
        .collect()
}

// ===========================================================================
// Factors and points
// ===========================================================================

pub fn factor(id: &str, activity: &str, value: f64, region: &str) -> EmissionFactor {
    EmissionFactor {
        id: id.to_string(),
        activity: activity.to_string(),
        category: Category::Energy,
        factor: value,
        unit: "kWh".to_string(),
        source: "test".to_string(),
        region: region.to_string(),
        year: 2024,
    }
}

/// A processed point with unit amount, so `emissions == factor`.
pub fn point<'a>(
    row: &'a Record,
    activity: &str,
    category: Category,
    emissions: f64,
) -> ProcessedDataPoint<'a> {
    ProcessedDataPoint {
        original_row: row,
        activity: activity.to_string(),
        category,
        amount: 1.0,
        unit: "unit".to_string(),
        emission_factor: emissions,
        emissions,
        confidence: 1.0,
        date: None,
        location: None,
    }
}
