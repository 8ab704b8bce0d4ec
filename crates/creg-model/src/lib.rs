//! Data model for packed carbon-registry project records.
//!
//! A [`ProjectRecord`] is one row of the registry export: nine text fields
//! followed by four credit counters. [`FieldWidths`] discovers the per-field
//! text widths over a whole table and applies the padding pass that gives
//! every record an identical byte layout.

pub mod order;
pub mod record;
pub mod widths;

pub use order::sort_by_issued;
pub use record::{
    CREDIT_BLOCK_LEN, CREDIT_FIELD_COUNT, FIELD_COUNT, ProjectRecord, TEXT_FIELD_COUNT, TextField,
};
pub use widths::FieldWidths;
