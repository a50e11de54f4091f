//! First validity pass, run right after parsing

use crate::types::TransactionRecord;

/// Keep only records with a positive amount and a positive quantity
///
/// Order is preserved and cleaning is idempotent.
pub fn clean(records: Vec<TransactionRecord>) -> Vec<TransactionRecord> {
    records.into_iter().filter(TransactionRecord::is_valid).collect()
}
