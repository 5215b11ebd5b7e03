//! Integration test: engine built from data files.
//!
//! Writes an `engine.ron` and `factors.toml` into a temporary directory,
//! loads them through `co2e-data`, then runs JSON rows through the engine.

use std::fs;
use std::path::{Path, PathBuf};

use co2e_core::{Category, GLOBAL_REGION};
use co2e_data::{load_engine_data, load_records_json};

fn make_test_dir(suffix: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "co2e_integration_{suffix}_{}",
        std::process::id()
    ));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn cleanup(dir: &Path) {
    let _ = fs::remove_dir_all(dir);
}

const ENGINE_RON: &str = r#"(
    include_defaults: true,
    config: (
        default_region: "Norway",
        offset_threshold_kg: 100.0,
    ),
)"#;

const FACTORS_TOML: &str = r#"
[[factors]]
id = "grid_no"
activity = "electricity"
category = "Energy"
factor = 0.02
unit = "kWh"
source = "NVE 2023"
region = "Norway"
year = 2023

[[factors]]
id = "data_center"
activity = "Data Center Hosting"
category = "Cloud"
factor = 0.25
unit = "hour"
"#;

const ROWS_JSON: &str = r#"[
    {"Activity": "Electricity", "Amount": 5000, "Date": "2024-01-31", "Country": "NO"},
    {"Service": "data center hosting", "Usage": "800"},
    {"Activity": "ferry", "Distance": 400},
    {"Activity": "office chairs", "Amount": 3},
    {"Notes": null}
]"#;

#[test]
fn files_configure_region_factors_and_thresholds() {
    let dir = make_test_dir("full");
    fs::write(dir.join("engine.ron"), ENGINE_RON).unwrap();
    fs::write(dir.join("factors.toml"), FACTORS_TOML).unwrap();

    let data = load_engine_data(&dir).unwrap();
    assert_eq!(data.file_factor_count, 2);
    let engine = data.engine;
    assert_eq!(engine.config().default_region, "Norway");

    let rows = load_records_json(ROWS_JSON).unwrap();
    let result = engine.calculate(&rows);

    assert_eq!(result.summary.total_rows, 5);
    assert_eq!(result.summary.processed_rows, 3);
    assert_eq!(result.summary.skipped_rows, 2);

    // Norway override: 5000 x 0.02.
    let power = &result.processed_data[0];
    assert_eq!(power.emission_factor, 0.02);
    assert_eq!(power.emissions, 100.0);
    assert_eq!(power.location.as_deref(), Some("NO"));
    assert_eq!(power.date.map(|d| d.to_string()).as_deref(), Some("2024-01-31"));

    // Custom category flows through unchanged.
    let hosting = &result.processed_data[1];
    assert_eq!(hosting.category, Category::Other("Cloud".to_string()));
    assert_eq!(hosting.emissions, 200.0);

    // 100 + 200 + 400 x 0.11.
    assert_eq!(result.total_emissions, 344.0);
    assert_eq!(result.category_breakdown.len(), 3);

    assert_eq!(
        result.warnings[..2],
        [
            "Row 4: no emission factor for activity: office chairs".to_string(),
            "Row 5: missing activity".to_string(),
        ]
    );

    // Lowered offset threshold applies.
    assert!(
        result
            .recommendations
            .iter()
            .any(|r| r.contains("carbon offsets"))
    );

    cleanup(&dir);
}

#[test]
fn same_rows_in_global_region_use_generic_factor() {
    let dir = make_test_dir("global");
    fs::write(dir.join("factors.toml"), FACTORS_TOML).unwrap();

    let engine = load_engine_data(&dir).unwrap().engine;
    let rows = load_records_json(ROWS_JSON).unwrap();
    let result = engine.calculate_emissions(&rows, GLOBAL_REGION);

    assert_eq!(result.processed_data[0].emission_factor, 0.4);
    assert_eq!(result.processed_data[0].emissions, 2000.0);

    cleanup(&dir);
}

#[test]
fn result_serializes_with_camel_case_keys() {
    let dir = make_test_dir("json");
    let engine = load_engine_data(&dir).unwrap().engine;
    let rows = load_records_json(r#"[{"Activity": "bus", "Amount": 50}]"#).unwrap();

    let result = engine.calculate(&rows);
    let value = serde_json::to_value(&result).unwrap();

    assert_eq!(value["totalEmissions"], 4.0);
    assert_eq!(value["categoryBreakdown"]["Transport"], 4.0);
    assert_eq!(value["summary"]["processedRows"], 1);
    let point = &value["processedData"][0];
    assert_eq!(point["emissionFactor"], 0.08);
    assert_eq!(point["originalRow"]["Activity"], "bus");

    cleanup(&dir);
}
