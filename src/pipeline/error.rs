//! Error types for the ranking pipeline.
//!
//! This module defines the `PipelineError` enum covering every failure mode
//! of a run: I/O problems, malformed CSV input, non-numeric feature cells,
//! and degenerate columns that break the variance computation.

use std::fmt;

/// Errors that can occur while loading, filtering, or ranking a table.
#[derive(Debug)]
pub enum PipelineError {
    /// Input file is empty (no header row, no data).
    EmptyInput,

    /// A cell in a feature column could not be parsed as a number.
    ///
    /// Feature columns (index 2 onward) must contain decimal floating-point
    /// values in every data cell; a non-numeric cell is a hard failure, not
    /// a skip.
    NumericCell {
        /// Header name of the offending column
        column: String,
        /// 1-based data row number (header excluded)
        row: usize,
        /// The cell content that failed to parse
        value: String,
    },

    /// A feature column has no data cells below its header.
    ///
    /// The standard-deviation computation divides by the data-cell count, so
    /// a header-only column is rejected explicitly instead of silently
    /// producing NaN.
    EmptyColumn {
        /// Header name of the offending column
        column: String,
    },

    /// CSV-level parse failure.
    ///
    /// This wraps errors from the CSV reader/writer, including rows whose
    /// field count differs from the header's (the reader rejects the first
    /// such row rather than letting transposition fail later).
    Csv(csv::Error),

    /// I/O error occurred while reading or writing a file.
    Io(std::io::Error),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::EmptyInput => {
                write!(f, "Input file contains no rows")
            }
            PipelineError::NumericCell { column, row, value } => {
                write!(
                    f,
                    "Non-numeric value '{}' in feature column '{}' at data row {}",
                    value, column, row
                )
            }
            PipelineError::EmptyColumn { column } => {
                write!(f, "Feature column '{}' has no data rows", column)
            }
            PipelineError::Csv(err) => write!(f, "CSV error: {}", err),
            PipelineError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for PipelineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PipelineError::Csv(err) => Some(err),
            PipelineError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PipelineError {
    fn from(err: std::io::Error) -> Self {
        PipelineError::Io(err)
    }
}

impl From<csv::Error> for PipelineError {
    fn from(err: csv::Error) -> Self {
        PipelineError::Csv(err)
    }
}
