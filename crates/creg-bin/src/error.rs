//! Error types for the binary record format.

use thiserror::Error;

/// Errors that can occur when writing or reading binary record files.
#[derive(Debug, Error)]
pub enum BinError {
    /// A text field does not match the width table. The padding pass must
    /// run before encoding; hitting this is a caller bug, not bad input.
    #[error("record {record}: {field} is {actual} bytes, expected {expected}")]
    WidthMismatch {
        record: usize,
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The file length is not a multiple of the record length.
    #[error("truncated record: {remaining} trailing bytes with record length {record_len}")]
    TruncatedRecord { remaining: usize, record_len: usize },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for binary record operations.
pub type Result<T> = std::result::Result<T, BinError>;
