//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while loading a HAR document (fatal to the run)
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read HAR input: {0}")]
    Io(#[from] std::io::Error),

    #[error("HAR document is not valid JSON: {0}")]
    Decode(serde_json::Error),
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        // serde_json surfaces reader failures as its own error type
        if err.is_io() {
            LoadError::Io(err.into())
        } else {
            LoadError::Decode(err)
        }
    }
}

/// A single entry's start time could not be parsed (recoverable)
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Invalid startedDateTime {raw:?}: {reason}")]
pub struct TimestampError {
    pub raw: String,
    #[source]
    pub reason: TimestampReason,
}

/// Why a start time was rejected
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TimestampReason {
    #[error("{0}")]
    Malformed(#[from] chrono::ParseError),

    #[error("date and time must be separated by 'T'")]
    MissingSeparator,

    #[error("second out of range")]
    LeapSecond,
}

/// Errors that can occur during spreadsheet output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to build workbook: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),

    #[error("Too many rows for a worksheet: {0}")]
    TooManyRows(usize),
}
