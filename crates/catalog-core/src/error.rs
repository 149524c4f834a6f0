use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the catalog dashboard.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The dataset file could not be opened or read from disk.
    #[error("Failed to load dataset {path}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A CSV record was malformed (bad quoting, ragged row, invalid UTF-8).
    #[error("Malformed CSV in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The header row lacks one of the required columns.
    #[error("Dataset {path} is missing required column '{column}'")]
    MissingColumn { path: PathBuf, column: String },

    /// An aggregation referenced a column that is not part of the schema.
    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    /// A by-value ranking was requested on a column that holds text.
    #[error("Column is not numeric: {0}")]
    NonNumericColumn(String),

    /// A JSON document could not be produced or parsed.
    #[error("Failed to serialise JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the catalog crates.
pub type Result<T> = std::result::Result<T, CatalogError>;
