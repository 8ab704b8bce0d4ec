//! Single-shot conversion pipeline with explicit stages.
//!
//! The stages run strictly in order, since each depends on the previous one
//! being complete:
//! 1. **Read**: parse every line into records, widths observed in parallel
//! 2. **Pad**: rewrite text fields to the finalized per-field widths
//! 3. **Order**: stable sort by credits issued
//! 4. **Encode**: write the flat binary record file
//! 5. **Verify** (optional): decode the file again and cross-check

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, ensure};

use creg_bin::{BinWriter, read_bin};
use creg_ingest::read_projects;
use creg_model::{FieldWidths, ProjectRecord, sort_by_issued};
use tracing::{debug, info, info_span};

/// Outcome of a successful run, for the summary table.
#[derive(Debug)]
pub struct RunSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub records: usize,
    pub widths: FieldWidths,
    pub bytes_written: u64,
    pub verified: bool,
}

/// Derive the default output path from the input path.
///
/// Only the final path component is kept, with its extension replaced by
/// `bin`, so the output lands in the current directory.
pub fn default_output_path(input: &Path) -> PathBuf {
    let name = input.file_name().unwrap_or_else(|| OsStr::new("out"));
    Path::new(name).with_extension("bin")
}

/// Run the whole conversion.
pub fn run(input: &Path, output: &Path, delimiter: char, verify: bool) -> Result<RunSummary> {
    let span = info_span!(
        "pack",
        input = %input.display(),
        output = %output.display()
    );
    let _guard = span.enter();
    let start = Instant::now();

    let (mut records, widths) =
        read_projects(input, delimiter).with_context(|| format!("read {}", input.display()))?;
    info!(
        records = records.len(),
        record_len = widths.record_len(),
        "parsed project export"
    );

    for record in &mut records {
        widths.pad(record);
    }
    sort_by_issued(&mut records);
    debug!("padded and ordered records");

    let writer =
        BinWriter::create(output).with_context(|| format!("create {}", output.display()))?;
    writer
        .write_records(&records, &widths)
        .with_context(|| format!("write {}", output.display()))?;
    let bytes_written = (records.len() * widths.record_len()) as u64;
    info!(
        bytes = bytes_written,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "wrote binary records"
    );

    if verify {
        verify_output(output, &records, &widths)?;
    }

    Ok(RunSummary {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        records: records.len(),
        widths,
        bytes_written,
        verified: verify,
    })
}

/// Decode the written file with the run's widths and cross-check it.
fn verify_output(path: &Path, records: &[ProjectRecord], widths: &FieldWidths) -> Result<()> {
    let decoded = read_bin(path, widths).with_context(|| format!("verify {}", path.display()))?;
    ensure!(
        decoded.len() == records.len(),
        "verify: wrote {} records but decoded {}",
        records.len(),
        decoded.len()
    );
    ensure!(
        decoded
            .windows(2)
            .all(|pair| pair[0].issued <= pair[1].issued),
        "verify: records out of issued order"
    );
    info!(records = decoded.len(), "verified output");
    Ok(())
}
