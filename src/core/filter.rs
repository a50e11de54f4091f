//! Caller-driven record filtering
//!
//! Predicates are supplied already typed by the caller (CLI, tests). Every
//! supplied predicate must hold for a record to be kept; omitted predicates
//! impose no constraint.

use crate::types::{FilterOptions, TransactionRecord};
use rust_decimal::Decimal;

/// Optional filter predicates
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterParams {
    /// Case-insensitive exact match on region; an empty string means no filter
    pub region: Option<String>,

    /// Inclusive lower bound on amount
    pub min_amount: Option<Decimal>,

    /// Inclusive upper bound on amount
    pub max_amount: Option<Decimal>,
}

impl FilterParams {
    /// True when no predicate would constrain the result
    pub fn is_empty(&self) -> bool {
        self.region().is_none() && self.min_amount.is_none() && self.max_amount.is_none()
    }

    fn region(&self) -> Option<&str> {
        self.region.as_deref().filter(|region| !region.is_empty())
    }

    /// Whether a single record satisfies every supplied predicate
    pub fn matches(&self, record: &TransactionRecord) -> bool {
        let region_ok = self
            .region()
            .map_or(true, |region| record.region().to_lowercase() == region.to_lowercase());
        let min_ok = self.min_amount.map_or(true, |min| record.amount() >= min);
        let max_ok = self.max_amount.map_or(true, |max| record.amount() <= max);

        region_ok && min_ok && max_ok
    }
}

/// Keep the records matching `params`, in input order
///
/// An empty result is valid output.
pub fn filter(records: Vec<TransactionRecord>, params: &FilterParams) -> Vec<TransactionRecord> {
    if params.is_empty() {
        return records;
    }

    records
        .into_iter()
        .filter(|record| params.matches(record))
        .collect()
}

/// Describe what can be filtered on: distinct regions and the amount range
pub fn overview(records: &[TransactionRecord]) -> FilterOptions {
    let regions = records.iter().map(|r| r.region().to_string()).collect();

    let amount_range = records.iter().map(TransactionRecord::amount).fold(
        None,
        |range: Option<(Decimal, Decimal)>, amount| match range {
            None => Some((amount, amount)),
            Some((min, max)) => Some((min.min(amount), max.max(amount))),
        },
    );

    FilterOptions {
        regions,
        amount_range,
    }
}
