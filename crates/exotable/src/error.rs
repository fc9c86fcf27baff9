//! Error types for the exotable library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for exotable operations.
#[derive(Debug, Error)]
pub enum ExoError {
    /// A source mapping references a canonical column the registry does not define.
    #[error("'{canonical}' is not the name of a unified column (mapped from '{source_column}')")]
    UnknownCanonicalColumn {
        source_column: String,
        canonical: String,
    },

    /// A canonical column was registered twice.
    #[error("Canonical column '{0}' is already registered")]
    DuplicateName(String),

    /// Registry lookup for a name that was never registered.
    #[error("Canonical column '{0}' not found")]
    NotFound(String),

    /// `load` was called on a table that already holds rows.
    #[error("Table already holds {rows} rows; use merge to add another source")]
    NonEmptyTarget { rows: usize },

    /// The source is already folded into the target table.
    #[error("Source '{0}' is already included in the table")]
    AlreadyMerged(String),

    /// Metadata lookup for a column that is not in the table.
    #[error("'{0}' is not an available column name")]
    ColumnNotFound(String),

    /// Renaming would produce two columns with the same name.
    #[error("Column '{0}' would appear twice in the unified table")]
    DuplicateColumn(String),

    /// A column was registered in the column info ledger twice.
    #[error("Column '{0}' is already registered in the column info")]
    DuplicateColumnInfo(String),

    /// A join key column is missing from one side of a merge.
    #[error("Join key '{column}' not found in the {side} table")]
    MissingJoinKey { column: String, side: &'static str },

    /// Applying a merge suffix produced a name that already exists.
    #[error("Suffixed column '{0}' already exists in the merged table")]
    SuffixCollision(String),

    /// No source definition with this name.
    #[error("'{0}' is not an existing source")]
    UnknownSource(String),

    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Empty file or no data to load.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for exotable operations.
pub type Result<T> = std::result::Result<T, ExoError>;
