//! Output rendering for the enriched dataset and the summary report
//!
//! Rendering is pure: functions return the text to persist and leave storage
//! to a [`Sink`](crate::core::traits::Sink).

use crate::io::line_format::FIELD_DELIMITER;
use crate::types::{PipelineError, SalesSummary, TransactionRecord};
use clap::ValueEnum;
use csv::WriterBuilder;
use rust_decimal::{Decimal, RoundingStrategy};

/// Default currency symbol for the summary report
pub const DEFAULT_CURRENCY: &str = "₹";

/// Available serializations for the enriched dataset
///
/// Derives `ValueEnum` so the binary can take it straight from `--format`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One JSON object per line
    Jsonl,
    /// `|`-delimited with a header row
    Delimited,
}

/// Format an amount as `<symbol>1,234,567.89`
///
/// Values are rounded half-to-even to two decimal places; negative values are
/// rendered as `<symbol>-1,234.00`.
pub fn format_currency(value: Decimal, symbol: &str) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
    let digits = format!("{:.2}", rounded.abs());
    let (integer, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    format!("{}{}{}.{}", symbol, sign, grouped, fraction)
}

/// Render the summary report text
pub fn render_report(summary: &SalesSummary, currency: &str) -> String {
    format!(
        "SALES REPORT\n\
         ================\n\
         Total Transactions: {}\n\
         Total Sales: {}\n\
         Average Sale: {}\n",
        summary.transaction_count,
        format_currency(summary.total_sales, currency),
        format_currency(summary.average_sales, currency),
    )
}

/// Serialize records one per line in processing order
///
/// # Errors
///
/// Returns `PipelineError::Serialize` (JSON) or `PipelineError::Csv` (delimited)
/// if a record cannot be serialized.
pub fn render_enriched(
    records: &[TransactionRecord],
    format: OutputFormat,
) -> Result<String, PipelineError> {
    match format {
        OutputFormat::Jsonl => render_jsonl(records),
        OutputFormat::Delimited => render_delimited(records),
    }
}

fn render_jsonl(records: &[TransactionRecord]) -> Result<String, PipelineError> {
    let mut output = String::new();
    for record in records {
        output.push_str(&serde_json::to_string(record)?);
        output.push('\n');
    }
    Ok(output)
}

fn render_delimited(records: &[TransactionRecord]) -> Result<String, PipelineError> {
    let mut writer = WriterBuilder::new()
        .delimiter(FIELD_DELIMITER)
        .from_writer(Vec::new());

    for record in records {
        writer.serialize(record)?;
    }

    let bytes = writer.into_inner().map_err(|e| PipelineError::Serialize {
        message: e.to_string(),
    })?;

    String::from_utf8(bytes).map_err(|e| PipelineError::Serialize {
        message: e.to_string(),
    })
}
