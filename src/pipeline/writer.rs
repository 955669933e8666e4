//! CSV output writer.

use std::fs;
use std::path::Path;

use crate::pipeline::error::PipelineError;
use crate::pipeline::table::Row;

/// Serialize rows as CSV and write them to `path` in one shot.
///
/// The full file content is built in memory first and written with a single
/// `fs::write`, so a failure mid-serialization leaves no partial output file
/// behind. An existing file at `path` is overwritten.
pub fn write_csv(path: &Path, rows: &[Row]) -> Result<(), PipelineError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer.write_record(row)?;
    }
    let buffer = writer
        .into_inner()
        .map_err(|e| PipelineError::Io(e.into_error()))?;

    fs::write(path, buffer)?;
    Ok(())
}
