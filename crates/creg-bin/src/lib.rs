//! Fixed-layout binary record format.
//!
//! Each record is the nine padded text fields back-to-back, one byte per
//! character with no length prefix or terminator, followed by the four
//! credit fields as 4-byte big-endian two's-complement integers. There are
//! no record separators, headers, or trailers anywhere in the file; record
//! boundaries are only recoverable with the width table of the run, which
//! is an accepted property of the format.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use creg_bin::{read_bin, write_bin};
//! use creg_model::{FieldWidths, ProjectRecord};
//!
//! let mut record = ProjectRecord::default();
//! record.project_id = "881".to_string();
//! record.issued = 1250;
//!
//! let mut widths = FieldWidths::new();
//! widths.observe(&record);
//! widths.pad(&mut record);
//!
//! write_bin(Path::new("projects.bin"), &[record], &widths).unwrap();
//! let decoded = read_bin(Path::new("projects.bin"), &widths).unwrap();
//! assert_eq!(decoded.len(), 1);
//! ```

mod error;
mod reader;
mod writer;

pub use error::{BinError, Result};
pub use reader::{BinReader, read_bin};
pub use writer::{BinWriter, write_bin};
