//! Transaction-related types for the sales pipeline
//!
//! This module defines the typed transaction record produced by the parser,
//! along with the per-line parse outcome used to model tolerant parsing.

use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

/// Placeholder used for missing regions, customers and categories
pub const UNKNOWN: &str = "Unknown";

/// A single parsed sales transaction
///
/// Fields are private so the record stays immutable after construction.
/// `amount` is always derived from `quantity * unit_price` when the record is
/// built; the only later change is the category attached by the enricher.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionRecord {
    id: String,
    date: String,
    region: String,
    product: String,
    quantity: i64,
    unit_price: Decimal,
    amount: Decimal,
    customer_id: String,

    /// `None` until the record has been through the enricher
    category: Option<String>,
}

impl TransactionRecord {
    /// Create a record with `"Unknown"` region and customer
    ///
    /// # Errors
    ///
    /// Returns [`SkipReason::AmountOverflow`] if `quantity * unit_price` does not
    /// fit in a `Decimal`.
    pub fn new(
        id: impl Into<String>,
        date: impl Into<String>,
        product: impl Into<String>,
        quantity: i64,
        unit_price: Decimal,
    ) -> Result<Self, SkipReason> {
        let amount = Decimal::from(quantity)
            .checked_mul(unit_price)
            .ok_or(SkipReason::AmountOverflow)?;

        Ok(TransactionRecord {
            id: id.into(),
            date: date.into(),
            region: UNKNOWN.to_string(),
            product: product.into(),
            quantity,
            unit_price,
            amount,
            customer_id: UNKNOWN.to_string(),
            category: None,
        })
    }

    /// Set the region; blank input (after trimming) keeps `"Unknown"`
    pub fn with_region(mut self, region: &str) -> Self {
        let region = region.trim();
        if !region.is_empty() {
            self.region = region.to_string();
        }
        self
    }

    /// Set the customer; an empty field keeps `"Unknown"`
    pub fn with_customer_id(mut self, customer_id: &str) -> Self {
        if !customer_id.is_empty() {
            self.customer_id = customer_id.to_string();
        }
        self
    }

    pub(crate) fn with_category(mut self, category: String) -> Self {
        self.category = Some(category);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn product(&self) -> &str {
        &self.product
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    /// Category attached by the enricher, `None` before enrichment
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Business validity rule shared by the cleaner and the validator
    ///
    /// A record is valid when both its amount and its quantity are strictly positive.
    pub fn is_valid(&self) -> bool {
        self.amount > Decimal::ZERO && self.quantity > 0
    }
}

/// Why an input line did not produce a record
///
/// Skips are part of normal operation and are never surfaced as errors;
/// the reason exists for diagnostics and tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkipReason {
    #[error("expected at least 8 fields, found {found}")]
    TooFewFields { found: usize },

    #[error("invalid quantity '{0}'")]
    InvalidQuantity(String),

    #[error("invalid unit price '{0}'")]
    InvalidUnitPrice(String),

    #[error("amount overflows decimal range")]
    AmountOverflow,

    #[error("line is not valid UTF-8")]
    Undecodable,
}

/// Result of converting one raw input line
#[derive(Debug, Clone, PartialEq)]
pub enum LineOutcome {
    Parsed(TransactionRecord),
    Skipped(SkipReason),
}

impl LineOutcome {
    /// The parsed record, if any
    pub fn into_record(self) -> Option<TransactionRecord> {
        match self {
            LineOutcome::Parsed(record) => Some(record),
            LineOutcome::Skipped(_) => None,
        }
    }
}

impl From<Result<TransactionRecord, SkipReason>> for LineOutcome {
    fn from(result: Result<TransactionRecord, SkipReason>) -> Self {
        match result {
            Ok(record) => LineOutcome::Parsed(record),
            Err(reason) => LineOutcome::Skipped(reason),
        }
    }
}
