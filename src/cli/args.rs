//! Command-line argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

/// Varrank - Rank CSV feature columns by variability
#[derive(Parser, Debug)]
#[command(name = "varrank")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Input CSV file with a header row, two leading identifier columns,
    /// and numeric feature columns
    pub input: PathBuf,
}

impl Args {
    /// Output path for the ranked table: the input's file name with a
    /// `processed-` prefix, written into the current working directory.
    pub fn output_path(&self) -> PathBuf {
        let name = self
            .input
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("output.csv");
        PathBuf::from(format!("processed-{}", name))
    }
}
