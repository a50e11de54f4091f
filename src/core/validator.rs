//! Second validity pass, run after filtering
//!
//! Uses the same rule as the cleaner but keeps the rejected records so the
//! caller can report them.

use crate::types::TransactionRecord;

/// Records split by validity, each side in input order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Validated {
    pub valid: Vec<TransactionRecord>,
    pub invalid: Vec<TransactionRecord>,
}

/// Partition records into valid and invalid sets
pub fn validate(records: Vec<TransactionRecord>) -> Validated {
    let (valid, invalid) = records.into_iter().partition(TransactionRecord::is_valid);
    Validated { valid, invalid }
}
