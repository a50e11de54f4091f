//! Product catalog sources
//!
//! The catalog is an external lookup table. This module provides an in-memory
//! provider that can be built from the bundled product list or a
//! `product,category` CSV file.

use crate::core::traits::CatalogProvider;
use crate::types::{CatalogEntry, PipelineError};
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Catalog held entirely in memory
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InMemoryCatalog {
    entries: Vec<CatalogEntry>,
}

impl InMemoryCatalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        InMemoryCatalog { entries }
    }

    /// The bundled product list used when no catalog file is given
    pub fn builtin() -> Self {
        InMemoryCatalog::new(vec![
            CatalogEntry::new("Laptop", "Electronics"),
            CatalogEntry::new("Phone", "Electronics"),
            CatalogEntry::new("Shoes", "Fashion"),
        ])
    }

    /// Load a catalog from CSV with a `product,category` header
    ///
    /// Entry order is kept, duplicates included.
    pub fn from_reader<R: Read>(source: R) -> Result<Self, PipelineError> {
        let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(source);

        let entries = reader
            .deserialize::<CatalogEntry>()
            .collect::<Result<Vec<_>, _>>()?;

        Ok(InMemoryCatalog::new(entries))
    }

    /// Load a catalog CSV file
    ///
    /// # Errors
    ///
    /// Returns `PipelineError::Catalog` if the file cannot be opened or a row is malformed.
    pub fn from_csv_path(path: &Path) -> Result<Self, PipelineError> {
        let file = File::open(path).map_err(|e| PipelineError::catalog(path, e))?;
        Self::from_reader(file).map_err(|e| PipelineError::catalog(path, e))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl CatalogProvider for InMemoryCatalog {
    fn fetch(&self) -> Vec<CatalogEntry> {
        self.entries.clone()
    }
}
