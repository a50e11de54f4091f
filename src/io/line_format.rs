//! Sales line format handling
//!
//! This module centralizes the input format rules:
//! - field layout of a `|`-delimited sales line
//! - numeric parsing of quantity and unit price
//! - `"Unknown"` defaulting of region and customer
//!
//! All functions are pure (no I/O) for easy testing.

use crate::types::{LineOutcome, SkipReason, TransactionRecord};
use csv::StringRecord;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Field delimiter of the sales log
pub const FIELD_DELIMITER: u8 = b'|';

/// Minimum number of fields on a data line
pub const MIN_FIELDS: usize = 8;

// Positional layout of a data line
const ID: usize = 0;
const DATE: usize = 1;
const PRODUCT_NAME: usize = 3;
const QUANTITY: usize = 4;
const UNIT_PRICE: usize = 5;
const CUSTOMER_ID: usize = 6;
const REGION: usize = 7;

/// Convert one split input line into a transaction record
///
/// Layout: id, date, product_id, product_name, quantity, unit_price,
/// customer_id, region. Extra trailing fields are ignored and `product_id`
/// is not kept.
///
/// # Returns
///
/// - `LineOutcome::Parsed` with `amount = quantity * unit_price`
/// - `LineOutcome::Skipped` when the line has fewer than 8 fields or a
///   numeric field does not parse
pub fn convert_record(fields: &StringRecord) -> LineOutcome {
    build_record(fields).into()
}

fn build_record(fields: &StringRecord) -> Result<TransactionRecord, SkipReason> {
    if fields.len() < MIN_FIELDS {
        return Err(SkipReason::TooFewFields {
            found: fields.len(),
        });
    }

    let field = |index: usize| fields.get(index).unwrap_or_default();

    let quantity = parse_quantity(field(QUANTITY))?;
    let unit_price = parse_unit_price(field(UNIT_PRICE))?;

    let record = TransactionRecord::new(
        field(ID).trim(),
        field(DATE),
        field(PRODUCT_NAME),
        quantity,
        unit_price,
    )?
    .with_customer_id(field(CUSTOMER_ID))
    .with_region(field(REGION));

    Ok(record)
}

/// Parse a signed integer quantity, ignoring surrounding whitespace
pub fn parse_quantity(raw: &str) -> Result<i64, SkipReason> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| SkipReason::InvalidQuantity(raw.to_string()))
}

/// Parse a unit price such as `1,299.50` or `"1,000.00"`
///
/// Surrounding quotes and every thousands separator are removed before the
/// value is parsed. Scientific notation is accepted as a fallback.
pub fn parse_unit_price(raw: &str) -> Result<Decimal, SkipReason> {
    let cleaned: String = raw
        .trim()
        .trim_matches('"')
        .chars()
        .filter(|c| *c != ',')
        .collect();
    let cleaned = cleaned.trim();

    Decimal::from_str(cleaned)
        .or_else(|_| Decimal::from_scientific(cleaned))
        .map_err(|_| SkipReason::InvalidUnitPrice(raw.to_string()))
}
