//! CSV sink for enriched Birth records.

use std::path::Path;

use crate::enricher::BirthRecord;
use crate::error::ExportError;

/// Write `records` to `path` as CSV, replacing any existing file.
///
/// The header row comes from the record's field names in declaration
/// order; each record becomes one data row, in slice order. The write
/// goes through a temp file and a rename, so a failed run never leaves a
/// truncated file at the destination.
///
/// # Errors
///
/// Returns [`ExportError::EmptyExport`] for an empty slice, before any
/// file is created or touched. I/O and serialization faults map to
/// [`ExportError::Io`] and [`ExportError::Csv`].
pub fn write(path: &Path, records: &[BirthRecord]) -> Result<(), ExportError> {
    if records.is_empty() {
        return Err(ExportError::EmptyExport);
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let tmp = path.with_extension("csv.tmp");
    let mut writer = csv::Writer::from_path(&tmp)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    drop(writer);

    std::fs::rename(&tmp, path)?;
    Ok(())
}
