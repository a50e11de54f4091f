use super::{PipelineConfig, PipelineOutput, StageCounts};
use crate::core::{clean, enrich, filter, overview, summarize, validate, CatalogProvider, Sink};
use crate::core::FilterParams;
use crate::io::{format_currency, render_enriched, render_report, SalesReader};
use crate::types::{PipelineError, TransactionRecord};
use log::info;

/// Run every in-memory stage over parsed records
///
/// Never fails: empty inputs, empty filter results and empty catalogs all
/// produce well-defined output.
pub fn process(
    records: Vec<TransactionRecord>,
    params: &FilterParams,
    catalog: &dyn CatalogProvider,
) -> PipelineOutput {
    let mut counts = StageCounts {
        parsed: records.len(),
        ..StageCounts::default()
    };

    let cleaned = clean(records);
    counts.cleaned = cleaned.len();
    info!("Cleaned: {} of {} records kept", counts.cleaned, counts.parsed);

    let options = overview(&cleaned);

    let filtered = filter(cleaned, params);
    counts.filtered = filtered.len();
    if !params.is_empty() {
        info!("Filtered data count: {}", counts.filtered);
    }

    let validated = validate(filtered);
    counts.valid = validated.valid.len();
    counts.invalid = validated.invalid.len();
    info!("Valid: {} | Invalid: {}", counts.valid, counts.invalid);

    let summary = summarize(&validated.valid);

    let entries = catalog.fetch();
    info!("Fetched {} catalog entries", entries.len());

    let enriched = enrich(validated.valid, &entries);
    counts.enriched = enriched.len();
    info!("Enriched {}/{} transactions", counts.enriched, counts.valid);

    PipelineOutput {
        enriched,
        invalid: validated.invalid,
        summary,
        options,
        counts,
    }
}

/// Read, process and persist one sales log
///
/// The enriched dataset is persisted before the report.
///
/// # Errors
///
/// * The input cannot be opened or read; nothing is persisted in that case
/// * Rendering or persisting an output fails
pub fn run(
    config: &PipelineConfig,
    catalog: &dyn CatalogProvider,
    sink: &mut dyn Sink,
) -> Result<PipelineOutput, PipelineError> {
    let records = SalesReader::open(&config.input)?.into_records()?;
    info!(
        "Read {} transactions from {}",
        records.len(),
        config.input.display()
    );

    let output = process(records, &config.filter, catalog);

    if let Some((min, max)) = output.options.amount_range {
        info!(
            "Filter options: regions [{}], amounts {} - {}",
            output
                .options
                .regions
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", "),
            format_currency(min, &config.currency),
            format_currency(max, &config.currency),
        );
    }

    let dataset = render_enriched(&output.enriched, config.format)?;
    sink.persist(&dataset, &config.enriched_destination)?;
    info!("Saved enriched data to {}", config.enriched_destination.display());

    let report = render_report(&output.summary, &config.currency);
    sink.persist(&report, &config.report_destination)?;
    info!("Saved report to {}", config.report_destination.display());

    Ok(output)
}
