//! Error types for the grid crate.

use std::path::PathBuf;

use thiserror::Error;

use crate::language::Language;

/// Errors that can occur when building a grid context, serializing or saving an export.
///
/// Projection, sorting and row rendering are total and never produce these.
#[derive(Debug, Error)]
pub enum GridError {
    /// A language code that is neither `tr` nor `en`.
    #[error("unknown language code: {0}")]
    UnknownLanguage(String),

    /// Collation data for the language could not be loaded.
    #[error("collation data unavailable for {language}: {reason}")]
    Collation { language: Language, reason: String },

    /// Number formatting data for the language could not be loaded.
    #[error("number format data unavailable for {language}: {reason}")]
    NumberFormat { language: Language, reason: String },

    /// A value used as a record did not serialize to a JSON object.
    #[error("record must be a key/value object, got {0}")]
    NotAnObject(&'static str),

    /// Record conversion failed.
    #[error("record conversion failed: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV writer failure.
    #[error("CSV serialization failed: {0}")]
    Csv(#[from] csv::Error),

    /// The CSV writer could not hand back its buffer.
    #[error("CSV flush failed: {0}")]
    CsvFlush(String),

    /// Serialized output was not valid UTF-8.
    #[error("export is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// Writing an export artifact failed.
    #[error("could not save export to {}: {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<csv::IntoInnerError<csv::Writer<Vec<u8>>>> for GridError {
    fn from(err: csv::IntoInnerError<csv::Writer<Vec<u8>>>) -> Self {
        GridError::CsvFlush(err.to_string())
    }
}

/// Result type for grid operations.
pub type Result<T> = std::result::Result<T, GridError>;
