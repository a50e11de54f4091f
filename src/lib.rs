//! Sales Pipeline Library
//! # Overview
//!
//! This library provides a batch pipeline over a `|`-delimited sales
//! transaction log: it parses and cleans the log, applies optional filters,
//! computes sales statistics, enriches each transaction with a product
//! category and renders an enriched dataset plus a summary report.
//!
//! # Architecture
//!
//! - [`types`] - Core data types (TransactionRecord, SalesSummary, etc.)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Pipeline stages:
//!   - [`core::cleaner`] - First validity pass
//!   - [`core::filter`] - Region and amount predicates
//!   - [`core::validator`] - Valid/invalid partition
//!   - [`core::aggregator`] - Total, average and count
//!   - [`core::enricher`] - Catalog join (last match wins)
//! - [`io`] - Input parsing, catalog loading, rendering and sinks
//! - [`pipeline`] - Stage orchestration
//!
//! # Validity
//!
//! A transaction is valid when its amount (`quantity * unit_price`) and its
//! quantity are both strictly positive. The rule is applied once right after
//! parsing and again after filtering.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod pipeline;
pub mod types;

pub use core::{CatalogProvider, FilterParams, Sink};
pub use io::{FileSink, InMemoryCatalog, MemorySink, OutputFormat, SalesReader};
pub use pipeline::{process, run, PipelineConfig, PipelineOutput, StageCounts};
pub use types::{
    CatalogEntry, FilterOptions, LineOutcome, PipelineError, SalesSummary, SkipReason,
    TransactionRecord,
};
