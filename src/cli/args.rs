use crate::core::FilterParams;
use crate::io::{OutputFormat, DEFAULT_CURRENCY};
use crate::pipeline::PipelineConfig;
use clap::Parser;
use rust_decimal::Decimal;
use std::path::PathBuf;
use std::str::FromStr;

/// Clean, filter, summarise and enrich a sales transaction log
#[derive(Parser, Debug)]
#[command(name = "sales-pipeline")]
#[command(about = "Clean, filter, summarise and enrich a sales transaction log", long_about = None)]
pub struct CliArgs {
    /// Input sales log (`|`-delimited, first line is a header)
    #[arg(
        value_name = "INPUT",
        default_value = "sales_data.txt",
        help = "Path to the sales log"
    )]
    pub input_file: PathBuf,

    /// Keep only transactions from this region (case-insensitive)
    #[arg(long = "region", value_name = "REGION")]
    pub region: Option<String>,

    /// Keep only transactions with at least this amount
    #[arg(long = "min-amount", value_name = "AMOUNT", value_parser = parse_amount_bound)]
    pub min_amount: Option<Decimal>,

    /// Keep only transactions with at most this amount
    #[arg(long = "max-amount", value_name = "AMOUNT", value_parser = parse_amount_bound)]
    pub max_amount: Option<Decimal>,

    /// Product catalog CSV with `product,category` columns
    #[arg(
        long = "catalog",
        value_name = "CSV",
        help = "Product catalog CSV (default: built-in catalog)"
    )]
    pub catalog: Option<PathBuf>,

    /// Where to write the enriched dataset
    #[arg(
        long = "enriched-out",
        value_name = "PATH",
        default_value = "data/enriched_sales_data.txt"
    )]
    pub enriched_out: PathBuf,

    /// Where to write the summary report
    #[arg(
        long = "report-out",
        value_name = "PATH",
        default_value = "output/sales_report.txt"
    )]
    pub report_out: PathBuf,

    /// Serialization of the enriched dataset
    #[arg(long = "format", value_name = "FORMAT", default_value = "jsonl")]
    pub format: OutputFormat,

    /// Currency symbol used in the report
    #[arg(long = "currency", value_name = "SYMBOL", default_value = DEFAULT_CURRENCY)]
    pub currency: String,
}

/// Parse a non-negative decimal filter bound
fn parse_amount_bound(raw: &str) -> Result<Decimal, String> {
    let amount = Decimal::from_str(raw.trim())
        .map_err(|e| format!("'{}' is not a valid amount: {}", raw, e))?;

    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(format!("'{}' must not be negative", raw));
    }

    Ok(amount)
}

impl CliArgs {
    /// Filter predicates from the command line
    ///
    /// An empty `--region` is treated as no region filter.
    pub fn to_filter_params(&self) -> FilterParams {
        FilterParams {
            region: self.region.clone().filter(|region| !region.is_empty()),
            min_amount: self.min_amount,
            max_amount: self.max_amount,
        }
    }

    /// Full pipeline configuration from the command line
    pub fn to_pipeline_config(&self) -> PipelineConfig {
        PipelineConfig {
            input: self.input_file.clone(),
            filter: self.to_filter_params(),
            enriched_destination: self.enriched_out.clone(),
            report_destination: self.report_out.clone(),
            format: self.format,
            currency: self.currency.clone(),
        }
    }
}
