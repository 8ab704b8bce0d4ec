//! File reader: lines in, records and widths out.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use creg_model::{FIELD_COUNT, FieldWidths, ProjectRecord, TEXT_FIELD_COUNT, TextField};
use tracing::debug;

use crate::error::{IngestError, Result};
use crate::tokenize::{fold_ascii, normalize_text, parse_credit, split_fields};

/// Default field delimiter of registry exports.
pub const DEFAULT_DELIMITER: char = ',';

/// Labels of the credit fields in positional order, for error messages.
const CREDIT_LABELS: [&str; 4] = [
    "credits issued",
    "credits retired",
    "credits remaining",
    "first year",
];

/// Parse one data line into a record.
///
/// `line_number` is 1-based and only used for error reporting. The line is
/// folded to ASCII, tokenized, and normalized; the wrong token count or a
/// non-numeric credit token is fatal.
pub fn parse_record(line: &str, line_number: usize, delimiter: char) -> Result<ProjectRecord> {
    let folded = fold_ascii(line);
    let tokens = split_fields(&folded, delimiter);
    if tokens.len() != FIELD_COUNT {
        return Err(IngestError::FieldCount {
            line: line_number,
            expected: FIELD_COUNT,
            found: tokens.len(),
        });
    }

    let mut record = ProjectRecord::default();
    for field in TextField::ALL {
        *record.text_mut(field) = normalize_text(&tokens[field.index()]);
    }

    let mut credits = [0i32; 4];
    for (slot, (label, token)) in credits
        .iter_mut()
        .zip(CREDIT_LABELS.into_iter().zip(&tokens[TEXT_FIELD_COUNT..]))
    {
        *slot = parse_credit(token, delimiter).ok_or_else(|| IngestError::CreditValue {
            line: line_number,
            field: label,
            value: token.clone(),
        })?;
    }
    record.set_credits(credits);

    Ok(record)
}

/// Read a registry export into records plus the finalized width table.
///
/// The first line is unconditionally skipped as a header and never
/// tokenized. Every other line must parse, an empty line included; the
/// widths are observed per record and are final when this function returns.
pub fn read_projects(path: &Path, delimiter: char) -> Result<(Vec<ProjectRecord>, FieldWidths)> {
    let file = File::open(path).map_err(|source| IngestError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);

    let mut records = Vec::new();
    let mut widths = FieldWidths::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if index == 0 {
            // Header line, never tokenized.
            continue;
        }
        let record = parse_record(&line, index + 1, delimiter)?;
        widths.observe(&record);
        records.push(record);
    }

    debug!(records = records.len(), "parsed registry export");
    Ok((records, widths))
}
