//! I/O module
//!
//! Handles the sales log input, catalog loading, rendering and persistence.
//!
//! # Components
//!
//! - `line_format` - Sales line format handling (field layout, numeric parsing)
//! - `sales_reader` - Sales log reader with iterator interface
//! - `catalog` - In-memory product catalog provider
//! - `report` - Enriched dataset and summary report rendering
//! - `sink` - File and in-memory persistence sinks

pub mod catalog;
pub mod line_format;
pub mod report;
pub mod sales_reader;
pub mod sink;

pub use catalog::InMemoryCatalog;
pub use line_format::convert_record;
pub use report::{
    format_currency, render_enriched, render_report, OutputFormat, DEFAULT_CURRENCY,
};
pub use sales_reader::SalesReader;
pub use sink::{FileSink, MemorySink};
