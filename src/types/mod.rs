//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `transaction`: Transaction records and skip reasons
//! - `summary`: Aggregate statistics and filter options
//! - `catalog`: Product catalog entries
//! - `error`: Error types for the sales pipeline

pub mod catalog;
pub mod error;
pub mod summary;
pub mod transaction;

pub use catalog::CatalogEntry;
pub use error::PipelineError;
pub use summary::{FilterOptions, SalesSummary};
pub use transaction::{LineOutcome, SkipReason, TransactionRecord, UNKNOWN};
