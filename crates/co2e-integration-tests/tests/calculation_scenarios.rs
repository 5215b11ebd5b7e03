//! End-to-end calculation scenarios against the built-in factor catalog.
//!
//! Each test feeds raw rows through `EmissionsEngine` and checks the full
//! `CalculationResult`: totals, breakdowns, warnings and recommendations.

use co2e_core::insight::{
    LOW_CONFIDENCE_WARNING, LOW_EMISSIONS_RECOMMENDATION, OFFSET_RECOMMENDATION,
};
use co2e_core::test_utils::*;
use co2e_core::{Category, EmissionsEngine, GLOBAL_REGION, Record};

fn engine() -> EmissionsEngine {
    EmissionsEngine::default()
}

// ===========================================================================
// Single-row scenarios
// ===========================================================================

#[test]
fn electricity_consumption_uses_first_electricity_entry() {
    let rows = vec![row(&[
        ("Activity", "Electricity consumption"),
        ("Amount", "1250"),
        ("Unit", "kWh"),
    ])];

    let result = engine().calculate_emissions(&rows, GLOBAL_REGION);

    assert_eq!(result.summary.processed_rows, 1);
    let point = &result.processed_data[0];
    assert_eq!(point.activity, "electricity");
    assert_eq!(point.category, Category::Energy);
    assert_eq!(point.emission_factor, 0.4);
    assert_eq!(point.emissions, 500.0);
    assert_eq!(point.confidence, 0.5);
    assert!(std::ptr::eq(point.original_row, &rows[0]));

    assert_eq!(result.total_emissions, 500.0);
    assert_eq!(result.breakdown.get("electricity"), Some(&500.0));
    // 0.5 average confidence is below the 0.7 threshold.
    assert_eq!(result.warnings, vec![LOW_CONFIDENCE_WARNING.to_string()]);
}

#[test]
fn all_empty_row_is_missing_activity() {
    let rows = vec![row(&[("Foo", ""), ("Bar", "")])];

    let result = engine().calculate_emissions(&rows, GLOBAL_REGION);

    assert_eq!(result.summary.total_rows, 1);
    assert_eq!(result.summary.skipped_rows, 1);
    assert_eq!(result.total_emissions, 0.0);
    assert_eq!(result.warnings[0], "Row 1: missing activity");
    assert_eq!(result.warnings[1], "1 rows were skipped due to insufficient data");
}

#[test]
fn regional_entry_replaces_generic_match() {
    let rows = vec![activity_row("electricity", 1000.0)];

    let eu = engine().calculate_emissions(&rows, "EU");
    assert_eq!(eu.processed_data[0].emission_factor, 0.3);
    assert_eq!(eu.total_emissions, 300.0);
    assert_eq!(eu.processed_data[0].confidence, 1.0);

    let global = engine().calculate_emissions(&rows, GLOBAL_REGION);
    assert_eq!(global.total_emissions, 400.0);
}

// ===========================================================================
// Batch scenarios
// ===========================================================================

#[test]
fn fifteen_unmatched_rows_of_one_hundred() {
    let rows: Vec<Record> = (0..100)
        .map(|i| {
            if i % 6 == 1 && i < 6 * 15 {
                activity_row("office chairs", 2.0)
            } else {
                activity_row("bus", 100.0)
            }
        })
        .collect();
    let rejected = rows
        .iter()
        .filter(|r| r.get("Activity").and_then(|c| c.as_text()) == Some("office chairs"))
        .count();
    assert_eq!(rejected, 15);

    let result = engine().calculate_emissions(&rows, GLOBAL_REGION);

    assert_eq!(result.summary.processed_rows, 85);
    assert_eq!(result.summary.skipped_rows, 15);

    let row_warnings: Vec<&String> = result
        .warnings
        .iter()
        .filter(|w| w.starts_with("Row "))
        .collect();
    assert_eq!(row_warnings.len(), 15);
    assert_eq!(
        row_warnings[0],
        "Row 2: no emission factor for activity: office chairs"
    );
    assert!(
        result
            .warnings
            .contains(&"15 rows were skipped due to insufficient data".to_string())
    );
}

#[test]
fn dominant_category_gets_targeted_recommendation() {
    // Electricity 10000 kWh x 0.4 = 4000, bus 12500 km x 0.08 = 1000.
    let rows = vec![
        activity_row("electricity", 10_000.0),
        activity_row("bus", 12_500.0),
    ];

    let result = engine().calculate_emissions(&rows, GLOBAL_REGION);

    assert_eq!(result.category_breakdown.get(&Category::Energy), Some(&4000.0));
    assert_eq!(result.category_breakdown.get(&Category::Transport), Some(&1000.0));
    assert_eq!(result.total_emissions, 5000.0);
    assert_eq!(
        result.recommendations,
        vec![
            "Energy accounts for 80.0% of emissions. \
             Consider switching to renewable energy sources."
                .to_string()
        ]
    );
}

#[test]
fn large_totals_recommend_offsets() {
    let rows = vec![activity_row("beef production", 200.0)];

    let result = engine().calculate_emissions(&rows, GLOBAL_REGION);

    assert_eq!(result.total_emissions, 12_000.0);
    assert_eq!(result.recommendations.len(), 2);
    assert!(result.recommendations[0].starts_with("Agriculture accounts for 100.0%"));
    assert_eq!(result.recommendations[1], OFFSET_RECOMMENDATION);
}

#[test]
fn empty_input_short_circuits_to_fallbacks() {
    let result = engine().calculate_emissions(&[], GLOBAL_REGION);

    assert_eq!(result.total_emissions, 0.0);
    assert_eq!(result.confidence, 0.0);
    assert_eq!(result.summary.total_rows, 0);
    assert_eq!(result.summary.categories, 0);
    assert!(result.breakdown.is_empty());
    assert_eq!(result.warnings, vec![LOW_CONFIDENCE_WARNING.to_string()]);
    assert_eq!(
        result.recommendations,
        vec![LOW_EMISSIONS_RECOMMENDATION.to_string()]
    );
}

#[test]
fn mixed_columns_and_formats() {
    let rows = vec![
        row(&[
            ("Expense Type", "Natural Gas"),
            ("Quantity", "1,500"),
            ("Transaction Date", "2024-03-01"),
            ("Site", "Berlin"),
        ]),
        Record::new()
            .with("Description", "Landfill waste")
            .with("Weight", 40.0)
            .with("Country", "UK"),
    ];

    let result = engine().calculate_emissions(&rows, GLOBAL_REGION);

    // "1,500" is not a plain number, so the first row has no amount.
    assert_eq!(result.summary.processed_rows, 1);
    assert_eq!(result.warnings[0], "Row 1: missing amount");

    let point = &result.processed_data[0];
    assert_eq!(point.activity, "landfill waste");
    assert_eq!(point.emissions, 20.0);
    assert_eq!(point.location.as_deref(), Some("UK"));
}

// ===========================================================================
// Parallel processing
// ===========================================================================

#[test]
fn parallel_processing_keeps_input_order() {
    let rows = synthetic_rows(5_000, 9);

    let result = engine().calculate_emissions(&rows, "UK");

    assert_eq!(result.summary.total_rows, 5_000);
    assert_eq!(result.summary.skipped_rows, 5_000 / 9);

    // Points reference rows in ascending input order.
    let positions: Vec<usize> = result
        .processed_data
        .iter()
        .map(|p| {
            let base = rows.as_ptr() as usize;
            (p.original_row as *const Record as usize - base) / std::mem::size_of::<Record>()
        })
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));

    // Row warnings are emitted in ascending row order.
    let indices: Vec<usize> = result
        .warnings
        .iter()
        .filter_map(|w| w.strip_prefix("Row "))
        .filter_map(|w| w.split(':').next())
        .filter_map(|n| n.parse().ok())
        .collect();
    assert_eq!(indices.len(), 5_000 / 9);
    assert!(indices.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(indices[0], 9);
}

#[test]
fn repeated_runs_agree() {
    let rows = synthetic_rows(2_000, 13);
    let engine = engine();

    let first = engine.calculate_emissions(&rows, "EU");
    let second = engine.calculate_emissions(&rows, "EU");
    assert_eq!(first, second);
}
