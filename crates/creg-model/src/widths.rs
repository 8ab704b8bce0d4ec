//! Per-field width discovery and the padding pass.

use crate::record::{CREDIT_BLOCK_LEN, ProjectRecord, TEXT_FIELD_COUNT, TextField};

/// Running per-field maximum text widths.
///
/// Widths only ever grow while records are observed. The table is final once
/// the whole input has been parsed; padding must not start before that,
/// since any later record could raise a field's maximum.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldWidths {
    widths: [usize; TEXT_FIELD_COUNT],
}

impl FieldWidths {
    /// A width table with every field at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table directly from known widths (decoding side).
    pub fn from_widths(widths: [usize; TEXT_FIELD_COUNT]) -> Self {
        Self { widths }
    }

    /// Take the running maximum against one record's normalized text fields.
    pub fn observe(&mut self, record: &ProjectRecord) {
        for field in TextField::ALL {
            let len = record.text(field).len();
            let slot = &mut self.widths[field.index()];
            if len > *slot {
                *slot = len;
            }
        }
    }

    /// Final width of one text field.
    pub fn get(&self, field: TextField) -> usize {
        self.widths[field.index()]
    }

    /// Total bytes of the text block of an encoded record.
    pub fn text_len(&self) -> usize {
        self.widths.iter().sum()
    }

    /// Total bytes of one encoded record: text block plus credit block.
    pub fn record_len(&self) -> usize {
        self.text_len() + CREDIT_BLOCK_LEN
    }

    /// Left-justify every text field to its final width with trailing
    /// spaces.
    ///
    /// Padding only appends; a value already at width is untouched. No value
    /// can exceed the width it contributed to, so nothing is ever truncated.
    pub fn pad(&self, record: &mut ProjectRecord) {
        for field in TextField::ALL {
            let width = self.get(field);
            let value = record.text_mut(field);
            while value.len() < width {
                value.push(' ');
            }
        }
    }
}
