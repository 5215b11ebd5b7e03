//! Basic calculation: a handful of expense rows against the built-in catalog.
//!
//! Shows column-name heuristics, fuzzy matching, a regional override, a
//! rejected row and the generated insights.
//!
//! Run with: `RUST_LOG=debug cargo run -p co2e-examples --example basic_calculation`

use co2e_core::{EmissionsEngine, Record};
use tracing_subscriber::EnvFilter;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let rows = vec![
        Record::new()
            .with("Activity", "Electricity consumption")
            .with("Amount", "1250")
            .with("Unit", "kWh")
            .with("Date", "2024-02-29"),
        Record::new()
            .with("Transport Mode", "Diesel car")
            .with("Distance", 320.0)
            .with("Country", "UK"),
        Record::new()
            .with("Description", "Landfill waste")
            .with("Weight (kg)", "85.5"),
        Record::new().with("Item", "Office chairs").with("Quantity", 4.0),
        Record::new().with("Notes", ""),
    ];

    let engine = EmissionsEngine::default();

    for region in ["Global", "UK"] {
        let result = engine.calculate_emissions(&rows, region);

        println!("=== Region: {region} ===");
        println!("Total: {:.2} kg CO2e", result.total_emissions);
        println!("Confidence: {:.2}", result.confidence);
        println!(
            "Rows: {} processed, {} skipped of {}",
            result.summary.processed_rows, result.summary.skipped_rows, result.summary.total_rows
        );

        println!("\n--- Processed ---");
        for point in &result.processed_data {
            println!(
                "  {:<20} {:>8.1} {:<6} x {:<5} = {:>8.2}  (confidence {:.2})",
                point.activity,
                point.amount,
                point.unit,
                point.emission_factor,
                point.emissions,
                point.confidence
            );
        }

        println!("\n--- By category ---");
        for (category, emissions) in &result.category_breakdown {
            println!("  {:<12} {emissions:>8.2}", category.as_str());
        }

        println!("\n--- Warnings ---");
        for warning in &result.warnings {
            println!("  {warning}");
        }

        println!("\n--- Recommendations ---");
        for recommendation in &result.recommendations {
            println!("  {recommendation}");
        }
        println!();
    }
}
