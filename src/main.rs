//! Varrank: CSV feature-column ranking CLI
//!
//! A command-line tool that drops zero-sum feature columns from a CSV table
//! and re-orders the surviving feature columns by variability.

mod cli;
mod pipeline;
mod report;
mod utils;

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;

use cli::Args;
use pipeline::{
    drop_zero_columns, load_table, rank_features, score_columns, sort_columns, to_columns,
    to_rows, write_csv, ID_COLUMNS,
};
use report::RankSummary;
use utils::{
    create_spinner, finish_with_success, print_banner, print_completion, print_config,
    print_count, print_info, print_step_header, print_step_time, print_success,
};

fn main() -> Result<()> {
    let args = Args::parse();
    let output_path = args.output_path();

    print_banner(env!("CARGO_PKG_VERSION"));
    print_config(&args.input, &output_path);

    // Step 1: Load table
    print_step_header(1, "Load Table");

    let step_start = Instant::now();
    let spinner = create_spinner("Reading CSV...");
    let rows = load_table(&args.input)
        .with_context(|| format!("Failed to load CSV file: {}", args.input.display()))?;
    finish_with_success(&spinner, "Table loaded");

    println!("\n    {} Table Statistics:", style("✧").cyan());
    println!("      Rows: {}", rows.len());
    println!("      Columns: {}", rows.first().map_or(0, |r| r.len()));

    let mut summary = RankSummary::new(rows.first().map_or(0, |r| r.len()));
    print_step_time(step_start.elapsed());

    // Step 2: Drop zero-sum feature columns
    print_step_header(2, "Zero-Column Filter");

    let step_start = Instant::now();
    let columns = to_columns(&rows);
    let (columns, dropped) = drop_zero_columns(columns)
        .context("Failed to filter zero-sum columns")?;

    if dropped.is_empty() {
        print_info("No zero-sum feature columns found");
    } else {
        print_count("zero-sum feature column(s)", dropped.len());
        summary.add_zero_drops(dropped);
        print_success("Dropped zero-sum feature columns");
    }
    print_step_time(step_start.elapsed());

    // Step 3: Rank by variability
    print_step_header(3, "Variability Ranking");

    let step_start = Instant::now();
    let roles = score_columns(&columns).context("Failed to score feature columns")?;
    summary.set_ranking(rank_features(&columns, &roles));

    let columns = sort_columns(columns, &roles);
    print_count(
        "feature column(s) ranked by standard deviation",
        columns.len().saturating_sub(ID_COLUMNS),
    );
    print_success("Columns re-ordered");
    print_step_time(step_start.elapsed());

    // Step 4: Save output
    print_step_header(4, "Save Results");

    let step_start = Instant::now();
    let spinner = create_spinner("Writing output file...");
    let rows = to_rows(&columns);
    write_csv(&output_path, &rows)
        .with_context(|| format!("Failed to write output file: {}", output_path.display()))?;
    finish_with_success(&spinner, &format!("Saved to {}", output_path.display()));
    print_step_time(step_start.elapsed());

    // Display summary
    summary.display();

    print_completion();

    Ok(())
}
