//! End-to-end integration tests
//!
//! These tests validate the complete pipeline using predefined test fixtures.
//! Each test:
//! 1. Reads input.txt from a fixture directory (and catalog.csv if present)
//! 2. Runs the pipeline, writing both outputs into a temporary directory
//! 3. Compares the enriched dataset with expected_enriched.jsonl
//! 4. Compares the summary report with expected_report.txt
//!
//! Test fixtures are located in tests/fixtures/ and cover:
//! - Happy path with thousands separators
//! - Malformed lines (short lines, non-numeric fields, blank lines)
//! - Non-positive quantities/amounts and "Unknown" defaults
//! - Duplicate catalog entries (last match wins)
//! - Header-only input

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use sales_pipeline::io::{FileSink, InMemoryCatalog, OutputFormat};
    use sales_pipeline::pipeline::{run, PipelineConfig};
    use sales_pipeline::{FilterParams, PipelineError};
    use rust_decimal::Decimal;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::{tempdir, TempDir};

    struct Outputs {
        _dir: TempDir,
        enriched: PathBuf,
        report: PathBuf,
    }

    fn outputs() -> Outputs {
        let dir = tempdir().expect("Failed to create temp dir");
        let enriched = dir.path().join("data").join("enriched_sales_data.txt");
        let report = dir.path().join("output").join("sales_report.txt");
        Outputs {
            _dir: dir,
            enriched,
            report,
        }
    }

    fn fixture_catalog(fixture_dir: &str) -> InMemoryCatalog {
        let catalog_path = format!("{}/catalog.csv", fixture_dir);
        if Path::new(&catalog_path).exists() {
            InMemoryCatalog::from_csv_path(Path::new(&catalog_path))
                .unwrap_or_else(|e| panic!("Failed to load catalog: {}", e))
        } else {
            InMemoryCatalog::builtin()
        }
    }

    /// Run a fixture and compare both outputs with the expected files
    fn run_test_fixture(fixture_name: &str) {
        let fixture_dir = format!("tests/fixtures/{}", fixture_name);
        let input_path = format!("{}/input.txt", fixture_dir);
        let expected_enriched_path = format!("{}/expected_enriched.jsonl", fixture_dir);
        let expected_report_path = format!("{}/expected_report.txt", fixture_dir);

        assert!(
            Path::new(&input_path).exists(),
            "Input file not found: {}",
            input_path
        );

        let out = outputs();
        let config = PipelineConfig {
            input: PathBuf::from(&input_path),
            enriched_destination: out.enriched.clone(),
            report_destination: out.report.clone(),
            ..PipelineConfig::default()
        };

        run(&config, &fixture_catalog(&fixture_dir), &mut FileSink)
            .unwrap_or_else(|e| panic!("Failed to run pipeline: {}", e));

        let actual_enriched = fs::read_to_string(&out.enriched)
            .unwrap_or_else(|e| panic!("Failed to read enriched output: {}", e));
        let expected_enriched = fs::read_to_string(&expected_enriched_path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", expected_enriched_path, e));
        assert_eq!(
            actual_enriched, expected_enriched,
            "\n\nEnriched output mismatch for fixture: {}\n\nActual:\n{}\n\nExpected:\n{}\n",
            fixture_name, actual_enriched, expected_enriched
        );

        let actual_report = fs::read_to_string(&out.report)
            .unwrap_or_else(|e| panic!("Failed to read report output: {}", e));
        let expected_report = fs::read_to_string(&expected_report_path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", expected_report_path, e));
        assert_eq!(
            actual_report, expected_report,
            "\n\nReport mismatch for fixture: {}\n\nActual:\n{}\n\nExpected:\n{}\n",
            fixture_name, actual_report, expected_report
        );
    }

    #[rstest]
    #[case("happy_path")]
    #[case("malformed_lines")]
    #[case("non_positive_and_defaults")]
    #[case("last_match_catalog")]
    #[case("header_only")]
    fn test_fixtures(#[case] fixture: &str) {
        run_test_fixture(fixture);
    }

    #[test]
    fn test_missing_input_writes_nothing() {
        let out = outputs();
        let config = PipelineConfig {
            input: PathBuf::from("tests/fixtures/does_not_exist.txt"),
            enriched_destination: out.enriched.clone(),
            report_destination: out.report.clone(),
            ..PipelineConfig::default()
        };

        let result = run(&config, &InMemoryCatalog::builtin(), &mut FileSink);

        assert!(matches!(result, Err(PipelineError::FileNotFound { .. })));
        assert!(!out.enriched.exists());
        assert!(!out.report.exists());
    }

    #[test]
    fn test_filtered_delimited_run() {
        let out = outputs();
        let config = PipelineConfig {
            input: PathBuf::from("tests/fixtures/happy_path/input.txt"),
            filter: FilterParams {
                region: None,
                min_amount: Some(Decimal::new(5000, 0)),
                max_amount: Some(Decimal::new(50000, 0)),
            },
            enriched_destination: out.enriched.clone(),
            report_destination: out.report.clone(),
            format: OutputFormat::Delimited,
            currency: "$".to_string(),
        };

        let output = run(&config, &InMemoryCatalog::builtin(), &mut FileSink).unwrap();
        assert_eq!(output.counts.parsed, 4);
        assert_eq!(output.counts.filtered, 2);

        let enriched = fs::read_to_string(&out.enriched).unwrap();
        assert_eq!(
            enriched,
            "id|date|region|product|quantity|unit_price|amount|customer_id|category\n\
             T002|2024-12-01|South|Phone|3|15000.50|45001.50|C002|Electronics\n\
             T003|2024-12-02|East|Shoes|5|1200|6000|C003|Fashion\n"
        );

        let report = fs::read_to_string(&out.report).unwrap();
        assert!(report.contains("Total Transactions: 2\n"));
        assert!(report.contains("Total Sales: $51,001.50\n"));
        assert!(report.contains("Average Sale: $25,500.75\n"));
    }
}
