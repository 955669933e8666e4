//! Pipeline module - the ranking steps in order: load, transpose, filter,
//! score, sort, write.

pub mod error;
pub mod filter;
pub mod loader;
pub mod table;
pub mod variability;
pub mod writer;

pub use error::PipelineError;
pub use filter::drop_zero_columns;
pub use loader::load_table;
pub use table::{to_columns, to_rows, Column, Row, ID_COLUMNS};
pub use variability::{rank_features, score_columns, sort_columns, std_deviation, ColumnRole};
pub use writer::write_csv;
