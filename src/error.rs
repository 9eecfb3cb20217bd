//! Error types for loading records and dispatching reports.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading input files.
#[derive(Error, Debug)]
pub enum LoadError {
    /// An input path does not exist.
    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// A file exists but a row could not be read or converted.
    ///
    /// The cause is exposed through [`std::error::Error::source`].
    #[error("Failed to read file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: RowError,
    },
}

/// Underlying cause of a [`LoadError::Parse`].
#[derive(Error, Debug)]
pub enum RowError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Structural CSV failure (unequal field counts, bad UTF-8, ...).
    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("line {line}: missing required field '{field}'")]
    MissingField { field: &'static str, line: u64 },

    #[error("line {line}: field '{field}' is not an integer: '{value}'")]
    InvalidInteger {
        field: &'static str,
        value: String,
        line: u64,
    },

    #[error("line {line}: field '{field}' is not a number: '{value}'")]
    InvalidFloat {
        field: &'static str,
        value: String,
        line: u64,
    },
}

/// Errors raised by report dispatch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    #[error("Report '{name}' not found. Available reports: {}", available.join(", "))]
    UnknownReport {
        name: String,
        available: Vec<String>,
    },
}
