//! Report module - summarizing ranking results

pub mod summary;

pub use summary::RankSummary;
