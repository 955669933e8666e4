//! Varrank: CSV feature-column ranking library
//!
//! Loads a CSV table with two leading identifier columns, drops feature
//! columns whose values sum to zero, and re-orders the remaining feature
//! columns by descending standard deviation.

pub mod cli;
pub mod pipeline;
pub mod report;
pub mod utils;
