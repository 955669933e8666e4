//! Degenerate-column filter.
//!
//! A feature column whose data cells sum to exactly zero carries no signal
//! and is removed before ranking. Identifier columns are never candidates.

use crate::pipeline::error::PipelineError;
use crate::pipeline::table::{parse_data_cells, Column, ID_COLUMNS};

/// Drop every feature column (index >= 2) whose data cells sum to exactly
/// `0.0`.
///
/// A single forward scan decides each column independently and collects the
/// survivors into a new sequence, so removal never shifts the index of a
/// column still to be examined. Survivors keep their relative order;
/// identifier columns pass through untouched. Non-numeric data cells fail
/// the run.
///
/// Returns the retained columns and the header names of the dropped ones.
pub fn drop_zero_columns(
    columns: Vec<Column>,
) -> Result<(Vec<Column>, Vec<String>), PipelineError> {
    let mut retained: Vec<Column> = Vec::with_capacity(columns.len());
    let mut dropped: Vec<String> = Vec::new();

    for (index, column) in columns.into_iter().enumerate() {
        if index < ID_COLUMNS {
            retained.push(column);
            continue;
        }

        let data = parse_data_cells(&column)?;
        let sum: f64 = data.iter().sum();
        if sum == 0.0 {
            dropped.push(column.first().cloned().unwrap_or_default());
        } else {
            retained.push(column);
        }
    }

    Ok((retained, dropped))
}
