//! Ingestion of delimited registry exports.
//!
//! The input is a header-prefixed text file with one project per line and a
//! fixed 13-field layout. Lines are folded to 7-bit ASCII, split on the
//! delimiter with quote-aware tokenizing, and normalized into
//! [`creg_model::ProjectRecord`] values while the per-field width table is
//! accumulated in parallel.

mod error;
mod reader;
mod tokenize;

pub use error::{IngestError, Result};
pub use reader::{DEFAULT_DELIMITER, parse_record, read_projects};
pub use tokenize::{QUOTE, fold_ascii, normalize_text, parse_credit, split_fields};
