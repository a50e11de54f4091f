//! Collaborator traits at the edges of the pipeline
//!
//! The product catalog and output storage are external to the core. These
//! traits let callers plug in any source or medium.

use crate::types::{CatalogEntry, PipelineError};
use std::path::Path;

/// Source of the product catalog used by the enricher
///
/// The catalog is assumed to be always available; failures to obtain it are
/// the caller's concern and happen before the pipeline runs.
pub trait CatalogProvider {
    /// Fetch all catalog entries in their source order
    fn fetch(&self) -> Vec<CatalogEntry>;
}

/// Persistence target for rendered output
pub trait Sink {
    /// Store `contents` under `destination`, replacing anything already there
    fn persist(&mut self, contents: &str, destination: &Path) -> Result<(), PipelineError>;
}
