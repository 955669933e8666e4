//! CSV table loader.
//!
//! Cells are kept as the raw strings the file contains; no type inference.
//! The output file later copies them back verbatim, so nothing here may
//! reformat a value.

use std::fs::File;
use std::path::Path;

use crate::pipeline::error::PipelineError;
use crate::pipeline::table::Row;

/// Load a CSV file into rows of string cells, header row first, in file
/// order.
///
/// The reader runs in strict mode: the first row whose field count differs
/// from the header's fails the load, so downstream transposition always sees
/// a rectangular table. A file with no rows at all is rejected.
pub fn load_table(path: &Path) -> Result<Vec<Row>, PipelineError> {
    let file = File::open(path)?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(file);

    let mut rows: Vec<Row> = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(|cell| cell.to_string()).collect());
    }

    if rows.is_empty() {
        return Err(PipelineError::EmptyInput);
    }

    Ok(rows)
}
