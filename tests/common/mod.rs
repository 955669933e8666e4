//! Shared test utilities and fixture generators

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Write a CSV fixture into `dir` and return its path
#[allow(dead_code)]
pub fn write_fixture(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Reference table: column `a` sums to zero and gets dropped, column `c`
/// has a higher standard deviation than `b`.
#[allow(dead_code)]
pub fn sample_csv() -> &'static str {
    "id,label,a,b,c\n1,x,0,1,5\n2,y,0,2,1\n3,z,0,3,9\n"
}

/// Expected output for [`sample_csv`]: `a` gone, `c` before `b`.
#[allow(dead_code)]
pub fn sample_csv_ranked() -> &'static str {
    "id,label,c,b\n1,x,5,1\n2,y,1,2\n3,z,9,3\n"
}

/// Parse CSV text into rows of string cells
#[allow(dead_code)]
pub fn parse_rows(text: &str) -> Vec<Vec<String>> {
    text.lines()
        .map(|line| line.split(',').map(|cell| cell.to_string()).collect())
        .collect()
}
