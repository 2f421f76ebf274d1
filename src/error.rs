// Error taxonomy for the load path.
// Nothing here is caught or retried: every variant aborts the run and the
// surrounding transaction rolls back, leaving the database untouched.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    /// The source file could not be opened.
    #[error("cannot open {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A row could not be read from the flat file.
    #[error("malformed row: {0}")]
    Csv(#[from] csv::Error),

    /// A row is missing an expected positional field.
    #[error("row has no field at position {field}")]
    MissingField { field: usize },

    /// A field expected to be numeric is not.
    #[error("field {field} is not numeric: {value:?}")]
    Parse { field: usize, value: String },

    /// A foreign-key lookup missed an entry that must exist.
    #[error("no {entity} entry for key {key}")]
    MissingReference { entity: &'static str, key: i64 },

    /// A transformed row's column count diverged from the rest of the batch.
    #[error("row {row} for table {table} has {found} columns, expected {expected}")]
    RowWidth {
        table: String,
        row: usize,
        expected: usize,
        found: usize,
    },

    /// The database rejected a statement (e.g. a primary-key collision).
    #[error(transparent)]
    Sql(#[from] rusqlite::Error),
}

pub type Result<T> = std::result::Result<T, LoadError>;
