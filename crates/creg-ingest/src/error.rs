//! Error types for registry export ingestion.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading and parsing a registry export.
///
/// Every variant is terminal for the run: a malformed line aborts the whole
/// conversion rather than being skipped.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Input file could not be opened.
    #[error("cannot read {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Line tokenized to the wrong number of fields.
    #[error("line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// Credit field did not parse as a base-10 integer.
    #[error("line {line}: {field} is not a number: {value:?}")]
    CreditValue {
        line: usize,
        field: &'static str,
        value: String,
    },

    /// I/O error while reading lines.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for ingestion.
pub type Result<T> = std::result::Result<T, IngestError>;
