//! Binary record file reader.
//!
//! The format carries no metadata, so decoding needs the width table of the
//! writing run. The reader exists for verification and tests; the format's
//! producers are the canonical source of the widths.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use creg_model::{CREDIT_FIELD_COUNT, FieldWidths, ProjectRecord, TextField};

use crate::error::{BinError, Result};

/// Binary record file reader.
pub struct BinReader<R: Read> {
    reader: R,
}

impl<R: Read> BinReader<R> {
    /// Create a new reader.
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Decode every record in the stream with the given width table.
    ///
    /// The stream length must be an exact multiple of the record length;
    /// trailing bytes mean a truncated write or the wrong widths.
    pub fn read_records(mut self, widths: &FieldWidths) -> Result<Vec<ProjectRecord>> {
        let mut data = Vec::new();
        self.reader.read_to_end(&mut data)?;

        let record_len = widths.record_len();
        let remaining = data.len() % record_len;
        if remaining != 0 {
            return Err(BinError::TruncatedRecord {
                remaining,
                record_len,
            });
        }

        Ok(data
            .chunks_exact(record_len)
            .map(|chunk| decode_record(chunk, widths))
            .collect())
    }
}

impl BinReader<File> {
    /// Open a binary record file for reading.
    pub fn open(path: &Path) -> Result<Self> {
        Ok(Self::new(File::open(path)?))
    }
}

/// Read all records from a binary record file.
pub fn read_bin(path: &Path, widths: &FieldWidths) -> Result<Vec<ProjectRecord>> {
    BinReader::open(path)?.read_records(widths)
}

/// Decode one record block. The chunk length is the record length.
fn decode_record(chunk: &[u8], widths: &FieldWidths) -> ProjectRecord {
    let mut record = ProjectRecord::default();
    let mut pos = 0usize;

    for field in TextField::ALL {
        let width = widths.get(field);
        let bytes = &chunk[pos..pos + width];
        *record.text_mut(field) = String::from_utf8_lossy(bytes).into_owned();
        pos += width;
    }

    let mut credits = [0i32; CREDIT_FIELD_COUNT];
    for slot in &mut credits {
        let mut raw = [0u8; 4];
        raw.copy_from_slice(&chunk[pos..pos + 4]);
        *slot = i32::from_be_bytes(raw);
        pos += 4;
    }
    record.set_credits(credits);

    record
}
