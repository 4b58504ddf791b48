//! Error types for cosilico operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building chart specifications.
#[derive(Error, Debug)]
pub enum Error {
    /// The dataset has no rows.
    #[error("Dataset is empty")]
    EmptyDataset,

    /// A referenced column does not exist.
    #[error("Column '{column}' not found")]
    MissingColumn {
        /// Name of the missing column.
        column: String,
    },

    /// A column used as numeric holds a value that cannot be read as a float.
    #[error("Column '{column}' is not numeric: cannot coerce {value:?} to a float")]
    NonNumericColumn {
        /// Name of the offending column.
        column: String,
        /// The first value that failed to coerce.
        value: String,
    },

    /// A numeric column in which every value is missing.
    #[error("Column '{column}' has no non-missing values")]
    AllMissing {
        /// Name of the column.
        column: String,
    },

    /// An option value outside its allowed range, or an unknown option variant.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// YAML option file could not be parsed.
    #[error("Configuration parse error at line {line}: {message}")]
    ConfigParse {
        /// Line number where the error occurred (1-indexed, 0 when unknown).
        line: usize,
        /// Parser message.
        message: String,
    },

    /// Color parsing error.
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON encoding or decoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV decoding error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl Error {
    pub(crate) fn missing_column(column: &str) -> Self {
        Error::MissingColumn { column: column.to_string() }
    }

    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Error::InvalidConfiguration(message.into())
    }
}
