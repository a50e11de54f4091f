//! Product catalog entry

use serde::Deserialize;

/// One row of the product catalog: a product name and its category
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogEntry {
    pub product: String,
    pub category: String,
}

impl CatalogEntry {
    pub fn new(product: impl Into<String>, category: impl Into<String>) -> Self {
        CatalogEntry {
            product: product.into(),
            category: category.into(),
        }
    }
}
