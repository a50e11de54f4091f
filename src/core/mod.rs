//! Core business logic module
//!
//! This module contains the pipeline stages, each a pure transformation over
//! an owned record sequence:
//! - `cleaner` - First validity pass after parsing
//! - `filter` - Caller-supplied region and amount predicates
//! - `validator` - Second validity pass, keeping the invalid partition
//! - `aggregator` - Total, average and count
//! - `enricher` - Catalog join attaching a category
//! - `traits` - Catalog and sink collaborator abstractions

pub mod aggregator;
pub mod cleaner;
pub mod enricher;
pub mod filter;
pub mod traits;
pub mod validator;

pub use aggregator::summarize;
pub use cleaner::clean;
pub use enricher::{enrich, lookup_category};
pub use filter::{filter, overview, FilterParams};
pub use traits::{CatalogProvider, Sink};
pub use validator::{validate, Validated};
