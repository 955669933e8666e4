//! Row/column table model and transposition.
//!
//! A table is a `Vec` of rows of string cells with the header as row 0; a
//! column is the same cells read down one position, header cell first. The
//! two leftmost columns are opaque identifiers; everything from index
//! [`ID_COLUMNS`] onward is a numeric feature column.

use crate::pipeline::error::PipelineError;

/// Number of leading identifier columns (never dropped, never re-ordered,
/// never parsed numerically).
pub const ID_COLUMNS: usize = 2;

/// A single table row, header row included.
pub type Row = Vec<String>;

/// A single table column, header cell at index 0.
pub type Column = Vec<String>;

/// Flip a rectangular row-major table into its columns.
///
/// Column count follows the first row; every column's length equals the row
/// count. Input is assumed rectangular (the loader enforces this).
pub fn to_columns(rows: &[Row]) -> Vec<Column> {
    let width = rows.first().map_or(0, |r| r.len());
    let mut columns: Vec<Column> = vec![Vec::with_capacity(rows.len()); width];
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            columns[i].push(cell.clone());
        }
    }
    columns
}

/// Flip a column sequence back into rows. Inverse of [`to_columns`] on
/// rectangular data.
pub fn to_rows(columns: &[Column]) -> Vec<Row> {
    let height = columns.first().map_or(0, |c| c.len());
    let mut rows: Vec<Row> = vec![Vec::with_capacity(columns.len()); height];
    for column in columns {
        for (i, cell) in column.iter().enumerate() {
            rows[i].push(cell.clone());
        }
    }
    rows
}

/// Parse a feature column's data cells (everything below the header) as
/// floats.
///
/// A cell that fails to parse is a hard error carrying the column name and
/// the 1-based data row number.
pub fn parse_data_cells(column: &Column) -> Result<Vec<f64>, PipelineError> {
    let header = column.first().map(String::as_str).unwrap_or("");
    column
        .iter()
        .skip(1)
        .enumerate()
        .map(|(i, cell)| {
            cell.trim().parse::<f64>().map_err(|_| PipelineError::NumericCell {
                column: header.to_string(),
                row: i + 1,
                value: cell.clone(),
            })
        })
        .collect()
}
