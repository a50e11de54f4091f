//! Error types for the sales pipeline
//!
//! Only conditions that stop a run are errors. Malformed input lines are not
//! errors; they are dropped by the parser (see [`SkipReason`](super::SkipReason)).
//!
//! # Error Categories
//!
//! - **Input Errors**: Sales file not found or unreadable
//! - **Catalog Errors**: Catalog file missing or malformed (raised before the run)
//! - **Output Errors**: Enriched dataset or report could not be serialized or written

use thiserror::Error;

/// Main error type for the sales pipeline
///
/// Each variant carries enough context to be printed directly by the CLI.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PipelineError {
    /// Input file not found at the specified path
    ///
    /// This is a fatal error that prevents processing from starting.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading input
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },

    /// Structural CSV error in a catalog or output file
    #[error("CSV error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    Csv {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the error
        message: String,
    },

    /// Product catalog could not be loaded
    #[error("Failed to load catalog '{path}': {message}")]
    Catalog {
        /// Catalog source path
        path: String,
        /// Description of the failure
        message: String,
    },

    /// Output could not be persisted
    #[error("Failed to write '{destination}': {message}")]
    Write {
        /// Destination that failed
        destination: String,
        /// Description of the failure
        message: String,
    },

    /// Record could not be serialized for output
    #[error("Serialization error: {message}")]
    Serialize {
        /// Description of the failure
        message: String,
    },
}

impl From<std::io::Error> for PipelineError {
    fn from(error: std::io::Error) -> Self {
        PipelineError::Io {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for PipelineError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        PipelineError::Csv {
            line,
            message: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for PipelineError {
    fn from(error: serde_json::Error) -> Self {
        PipelineError::Serialize {
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl PipelineError {
    /// Create a FileNotFound error
    pub fn file_not_found(path: &std::path::Path) -> Self {
        PipelineError::FileNotFound {
            path: path.display().to_string(),
        }
    }

    /// Create a Catalog error
    pub fn catalog(path: &std::path::Path, message: impl ToString) -> Self {
        PipelineError::Catalog {
            path: path.display().to_string(),
            message: message.to_string(),
        }
    }

    /// Create a Write error
    pub fn write(destination: &std::path::Path, message: impl ToString) -> Self {
        PipelineError::Write {
            destination: destination.display().to_string(),
            message: message.to_string(),
        }
    }
}
