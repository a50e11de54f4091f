//! Sales statistics over a record set

use crate::types::{SalesSummary, TransactionRecord};
use log::warn;
use rust_decimal::Decimal;

/// Compute total, average and count
///
/// The average of an empty set is zero. A total outside the `Decimal` range
/// saturates at `Decimal::MAX` (or `Decimal::MIN`) and is logged; the average
/// is then taken over the saturated total.
pub fn summarize(records: &[TransactionRecord]) -> SalesSummary {
    let transaction_count = records.len();
    if transaction_count == 0 {
        return SalesSummary::empty();
    }

    let total_sales = saturating_total(records);
    let average_sales = total_sales / Decimal::from(transaction_count);

    SalesSummary {
        total_sales,
        average_sales,
        transaction_count,
    }
}

fn saturating_total(records: &[TransactionRecord]) -> Decimal {
    let mut saturated = false;
    let total = records.iter().fold(Decimal::ZERO, |total, record| {
        let amount = record.amount();
        total.checked_add(amount).unwrap_or_else(|| {
            saturated = true;
            if amount.is_sign_negative() {
                Decimal::MIN
            } else {
                Decimal::MAX
            }
        })
    });

    if saturated {
        warn!(
            "Total sales over {} transactions exceed the decimal range; saturated at {}",
            records.len(),
            total
        );
    }
    total
}
