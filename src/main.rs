//! Sales Pipeline CLI
//!
//! Command-line interface for processing a sales transaction log.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- sales_data.txt
//! cargo run -- --region north --min-amount 500 sales_data.txt
//! cargo run -- --catalog products.csv --format delimited sales_data.txt
//! RUST_LOG=debug cargo run -- sales_data.txt
//! ```
//!
//! The program reads the sales log, runs it through the pipeline and writes
//! the enriched dataset and the summary report (by default to
//! `data/enriched_sales_data.txt` and `output/sales_report.txt`).
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (input not found or unreadable, catalog invalid, output not writable)

use env_logger::Env;
use log::{error, info};
use sales_pipeline::cli;
use sales_pipeline::io::{FileSink, InMemoryCatalog};
use sales_pipeline::pipeline;
use std::process;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = cli::parse_args();

    // The catalog is resolved up front so a bad catalog file fails before any output
    let catalog = match &args.catalog {
        Some(path) => match InMemoryCatalog::from_csv_path(path) {
            Ok(catalog) => catalog,
            Err(e) => {
                error!("{}", e);
                process::exit(1);
            }
        },
        None => InMemoryCatalog::builtin(),
    };

    let config = args.to_pipeline_config();
    let mut sink = FileSink;

    match pipeline::run(&config, &catalog, &mut sink) {
        Ok(output) => info!(
            "Process complete: {} transactions, total {}",
            output.summary.transaction_count, output.summary.total_sales
        ),
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    }
}
