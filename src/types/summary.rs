//! Aggregate types derived from a record set

use rust_decimal::Decimal;
use std::collections::BTreeSet;

/// Summary statistics over a set of transactions
///
/// Computed fresh for each run; `average_sales` is zero for an empty set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SalesSummary {
    /// Sum of all transaction amounts
    pub total_sales: Decimal,

    /// `total_sales / transaction_count`, or zero when there are no transactions
    pub average_sales: Decimal,

    /// Number of transactions summarised
    pub transaction_count: usize,
}

impl SalesSummary {
    /// Summary of an empty record set
    pub fn empty() -> Self {
        SalesSummary {
            total_sales: Decimal::ZERO,
            average_sales: Decimal::ZERO,
            transaction_count: 0,
        }
    }
}

/// What a caller can filter on, as seen in the cleaned data
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterOptions {
    /// Distinct regions in sorted order
    pub regions: BTreeSet<String>,

    /// Smallest and largest amount, `None` when there are no records
    pub amount_range: Option<(Decimal, Decimal)>,
}
