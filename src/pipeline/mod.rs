//! Pipeline orchestration
//!
//! Wires the stages together in their fixed order:
//!
//! ```text
//! parse -> clean -> filter -> validate -> summarize (valid) -> enrich (valid) -> persist
//! ```
//!
//! [`process`] runs the in-memory stages on already parsed records; [`run`]
//! adds reading the input file and persisting both outputs through a
//! [`Sink`](crate::core::Sink).

use crate::core::FilterParams;
use crate::io::{OutputFormat, DEFAULT_CURRENCY};
use crate::types::{FilterOptions, SalesSummary, TransactionRecord};
use std::path::PathBuf;

mod stages;

pub use stages::{process, run};

/// Everything a run needs besides its collaborators
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    /// Sales log to read
    pub input: PathBuf,

    /// Filter predicates; the default imposes no constraint
    pub filter: FilterParams,

    /// Destination of the enriched dataset
    pub enriched_destination: PathBuf,

    /// Destination of the summary report
    pub report_destination: PathBuf,

    /// Serialization of the enriched dataset
    pub format: OutputFormat,

    /// Currency symbol used in the report
    pub currency: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            input: PathBuf::from("sales_data.txt"),
            filter: FilterParams::default(),
            enriched_destination: PathBuf::from("data/enriched_sales_data.txt"),
            report_destination: PathBuf::from("output/sales_report.txt"),
            format: OutputFormat::Jsonl,
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

/// Number of records leaving each stage
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StageCounts {
    pub parsed: usize,
    pub cleaned: usize,
    pub filtered: usize,
    pub valid: usize,
    pub invalid: usize,
    pub enriched: usize,
}

/// Result of the in-memory stages
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutput {
    /// Valid records with their category, in input order
    pub enriched: Vec<TransactionRecord>,

    /// Records rejected by the second validity pass
    pub invalid: Vec<TransactionRecord>,

    /// Statistics over the valid records
    pub summary: SalesSummary,

    /// Regions and amount range of the cleaned records, before filtering
    pub options: FilterOptions,

    pub counts: StageCounts,
}
