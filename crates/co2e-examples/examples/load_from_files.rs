//! Data-driven setup: build the engine from a data directory and feed it
//! JSON rows, printing the result as JSON.
//!
//! Uses `crates/co2e-examples/data/` by default, or the directory passed as
//! the first argument.
//!
//! Run with: `cargo run -p co2e-examples --example load_from_files`

use std::path::PathBuf;
use std::process::ExitCode;

use co2e_data::{load_engine_data, load_records_file};
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data"));

    let data = match load_engine_data(&dir) {
        Ok(data) => data,
        Err(e) => {
            error!(dir = %dir.display(), "failed to load engine data: {e}");
            return ExitCode::FAILURE;
        }
    };

    let rows = match load_records_file(&dir.join("rows.json")) {
        Ok(rows) => rows,
        Err(e) => {
            error!("failed to load rows: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!(
        "Loaded {} factors ({} from file), region {}",
        data.engine.registry().len(),
        data.file_factor_count,
        data.engine.config().default_region
    );

    let result = data.engine.calculate(&rows);
    match serde_json::to_string_pretty(&result) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            error!("failed to serialize result: {e}");
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
