//! Sales log reader with iterator interface
//!
//! Provides a streaming iterator over the lines of a `|`-delimited sales log.
//! Delegates field handling to the line_format module.
//!
//! # Design
//!
//! The SalesReader uses csv::Reader configured as a plain `|` splitter (no
//! quoting, flexible field counts) and yields one [`LineOutcome`] per data line.
//! The first physical line is a header and is always skipped, even when it is
//! blank. The reader discards it before csv sees any input, because csv
//! ignores empty lines and would otherwise take the first data line as header.
//!
//! ```no_run
//! use sales_pipeline::io::SalesReader;
//! use std::path::Path;
//!
//! let reader = SalesReader::open(Path::new("sales_data.txt")).unwrap();
//! for outcome in reader {
//!     println!("{:?}", outcome);
//! }
//! ```
//!
//! # Error Handling
//!
//! - Failing to open the file is returned from `open()`
//! - Lines that cannot be turned into records are yielded as `LineOutcome::Skipped`
//! - An I/O failure mid-read is yielded once as `Err` and ends the iteration

use crate::io::line_format::{convert_record, FIELD_DELIMITER};
use crate::types::{LineOutcome, PipelineError, SkipReason, TransactionRecord};
use csv::{ReaderBuilder, StringRecord, Trim};
use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind, Read};
use std::path::Path;

/// Reader over a sales log
#[derive(Debug)]
pub struct SalesReader<R> {
    reader: csv::Reader<BufReader<R>>,
    header_skipped: bool,
    failed: bool,
}

impl SalesReader<File> {
    /// Open a sales log from a file path
    ///
    /// # Errors
    ///
    /// * `PipelineError::FileNotFound` if the path does not exist
    /// * `PipelineError::Io` for any other open failure
    pub fn open(path: &Path) -> Result<Self, PipelineError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => PipelineError::file_not_found(path),
            _ => PipelineError::from(e),
        })?;

        Ok(Self::from_reader(file))
    }
}

impl<R: Read> SalesReader<R> {
    /// Wrap any byte source
    pub fn from_reader(source: R) -> Self {
        let reader = ReaderBuilder::new()
            .delimiter(FIELD_DELIMITER)
            .has_headers(false)
            .quoting(false)
            .flexible(true)
            .trim(Trim::None)
            .buffer_capacity(8 * 1024)
            .from_reader(BufReader::new(source));

        Self {
            reader,
            header_skipped: false,
            failed: false,
        }
    }

    /// Discard the first physical line, whatever it contains
    fn skip_header(&mut self) -> Result<(), PipelineError> {
        self.header_skipped = true;
        let mut header = Vec::new();
        self.reader.get_mut().read_until(b'\n', &mut header)?;
        Ok(())
    }

    /// Drain the reader, keeping only parsed records in input order
    ///
    /// # Errors
    ///
    /// Returns the first I/O error encountered; no records are returned in that case.
    pub fn into_records(self) -> Result<Vec<TransactionRecord>, PipelineError> {
        let mut records = Vec::new();
        let mut skipped = 0usize;

        for outcome in self {
            match outcome?.into_record() {
                Some(record) => records.push(record),
                None => skipped += 1,
            }
        }

        debug!("Parsed {} records, skipped {} lines", records.len(), skipped);
        Ok(records)
    }
}

impl<R: Read> Iterator for SalesReader<R> {
    type Item = Result<LineOutcome, PipelineError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        if !self.header_skipped {
            if let Err(e) = self.skip_header() {
                self.failed = true;
                return Some(Err(e));
            }
        }

        let mut fields = StringRecord::new();
        match self.reader.read_record(&mut fields) {
            Ok(true) => {
                let outcome = convert_record(&fields);
                if let LineOutcome::Skipped(reason) = &outcome {
                    let line = fields.position().map(|p| p.line() + 1).unwrap_or_default();
                    debug!("Line {}: skipped ({})", line, reason);
                }
                Some(Ok(outcome))
            }
            Ok(false) => None,
            Err(e) => {
                if let csv::ErrorKind::Utf8 { pos, .. } = e.kind() {
                    let line = pos.as_ref().map(|p| p.line() + 1).unwrap_or_default();
                    debug!("Line {}: skipped ({})", line, SkipReason::Undecodable);
                    return Some(Ok(LineOutcome::Skipped(SkipReason::Undecodable)));
                }

                // Anything else is an I/O failure; stop after reporting it once
                self.failed = true;
                Some(Err(e.into()))
            }
        }
    }
}
