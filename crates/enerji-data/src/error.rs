//! Error types for the dataset crate.

use thiserror::Error;

/// Errors from loading the dataset or resolving user-supplied names.
#[derive(Debug, Error)]
pub enum DataError {
    /// The dataset JSON did not match the expected shape.
    #[error("invalid dataset: {0}")]
    Parse(#[from] serde_json::Error),

    /// A fuel filter named no known fuel in either language.
    #[error("unknown fuel '{0}'")]
    UnknownFuel(String),

    /// A table id that is not one of the dashboard tables.
    #[error("unknown table '{0}' (see `enerji tables`)")]
    UnknownTable(String),

    /// A sector id other than `industry`, `services`, `transport` or `household`.
    #[error("unknown sector '{0}'")]
    UnknownSector(String),

    #[error(transparent)]
    Grid(#[from] enerji_grid::GridError),
}

/// Result type for dataset operations.
pub type Result<T> = std::result::Result<T, DataError>;
