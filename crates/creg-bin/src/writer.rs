//! Binary record file writer.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use creg_model::{FieldWidths, ProjectRecord, TextField};

use crate::error::{BinError, Result};

/// Binary record file writer.
///
/// The encoder never mutates records; padding and ordering are the caller's
/// passes and must have completed before writing.
pub struct BinWriter<W: Write> {
    writer: BufWriter<W>,
}

impl<W: Write> BinWriter<W> {
    /// Create a new writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::new(writer),
        }
    }

    /// Write all records sequentially and flush.
    ///
    /// Every text field must already be padded to its width; a mismatch is
    /// reported instead of silently re-padding or truncating.
    pub fn write_records(mut self, records: &[ProjectRecord], widths: &FieldWidths) -> Result<()> {
        for (index, record) in records.iter().enumerate() {
            self.write_record(index, record, widths)?;
        }
        self.writer.flush()?;
        Ok(())
    }

    fn write_record(
        &mut self,
        index: usize,
        record: &ProjectRecord,
        widths: &FieldWidths,
    ) -> Result<()> {
        for field in TextField::ALL {
            let value = record.text(field);
            let expected = widths.get(field);
            if value.len() != expected {
                return Err(BinError::WidthMismatch {
                    record: index,
                    field: field.label(),
                    expected,
                    actual: value.len(),
                });
            }
            self.writer.write_all(value.as_bytes())?;
        }
        for credit in record.credits() {
            self.writer.write_all(&credit.to_be_bytes())?;
        }
        Ok(())
    }
}

impl BinWriter<File> {
    /// Create a binary record file for writing, truncating an existing one.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self::new(file))
    }
}

/// Write records to a binary record file.
///
/// Convenience wrapper that creates the file and writes all records.
pub fn write_bin(path: &Path, records: &[ProjectRecord], widths: &FieldWidths) -> Result<()> {
    BinWriter::create(path)?.write_records(records, widths)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn padded_record(widths: &mut FieldWidths) -> ProjectRecord {
        let mut record = ProjectRecord {
            project_id: "7".to_string(),
            name: "Alpha".to_string(),
            issued: 1,
            retired: -2,
            remaining: 3,
            first_year: 2004,
            ..ProjectRecord::default()
        };
        widths.observe(&record);
        widths.pad(&mut record);
        record
    }

    #[test]
    fn encodes_text_then_big_endian_credits() {
        let mut widths = FieldWidths::new();
        let record = padded_record(&mut widths);

        let mut buffer = Vec::new();
        BinWriter::new(&mut buffer)
            .write_records(std::slice::from_ref(&record), &widths)
            .unwrap();

        assert_eq!(buffer.len(), widths.record_len());
        assert_eq!(&buffer[..1], b"7");
        assert_eq!(&buffer[1..6], b"Alpha");
        // All other text fields are empty at width zero, so the credit
        // block starts right after the name.
        assert_eq!(&buffer[6..10], &1i32.to_be_bytes());
        assert_eq!(&buffer[10..14], &(-2i32).to_be_bytes());
        assert_eq!(&buffer[14..18], &3i32.to_be_bytes());
        assert_eq!(&buffer[18..22], &2004i32.to_be_bytes());
    }

    #[test]
    fn zero_credit_encodes_as_four_zero_bytes() {
        let widths = FieldWidths::new();
        let record = ProjectRecord::default();

        let mut buffer = Vec::new();
        BinWriter::new(&mut buffer)
            .write_records(std::slice::from_ref(&record), &widths)
            .unwrap();

        assert_eq!(buffer, vec![0u8; 16]);
    }

    #[test]
    fn unpadded_record_is_rejected() {
        let mut widths = FieldWidths::new();
        let _ = padded_record(&mut widths);
        // A second record that skipped the padding pass.
        let unpadded = ProjectRecord::default();

        let mut buffer = Vec::new();
        let error = BinWriter::new(&mut buffer)
            .write_records(std::slice::from_ref(&unpadded), &widths)
            .unwrap_err();
        assert!(matches!(error, BinError::WidthMismatch { .. }));
    }

    #[test]
    fn no_separators_between_records() {
        let mut widths = FieldWidths::new();
        let record = padded_record(&mut widths);

        let mut buffer = Vec::new();
        BinWriter::new(&mut buffer)
            .write_records(&[record.clone(), record], &widths)
            .unwrap();

        assert_eq!(buffer.len(), 2 * widths.record_len());
    }
}
