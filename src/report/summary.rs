//! Run summary report generation

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

/// Summary of one ranking run
#[derive(Debug, Default)]
pub struct RankSummary {
    pub initial_columns: usize,
    pub final_columns: usize,
    pub dropped_zero: Vec<String>,
    pub ranking: Vec<(String, f64)>,
}

impl RankSummary {
    pub fn new(initial_columns: usize) -> Self {
        Self {
            initial_columns,
            final_columns: initial_columns,
            ..Default::default()
        }
    }

    pub fn add_zero_drops(&mut self, columns: Vec<String>) {
        self.final_columns -= columns.len();
        self.dropped_zero = columns;
    }

    /// Record the final feature order with each column's standard deviation.
    pub fn set_ranking(&mut self, ranking: Vec<(String, f64)>) {
        self.ranking = ranking;
    }

    pub fn display(&self) {
        println!();
        println!(
            "    {} {}",
            style("📋").cyan(),
            style("RANKING SUMMARY").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!();

        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Metric").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![
            Cell::new("📁 Initial Columns"),
            Cell::new(self.initial_columns),
        ]);

        table.add_row(vec![
            Cell::new("🗑️  Dropped (Zero Sum)"),
            Cell::new(self.dropped_zero.len()).fg(if self.dropped_zero.is_empty() {
                Color::White
            } else {
                Color::Red
            }),
        ]);

        table.add_row(vec![
            Cell::new("✅ Final Columns"),
            Cell::new(self.final_columns)
                .fg(Color::Green)
                .add_attribute(Attribute::Bold),
        ]);

        // Indent the table
        for line in table.to_string().lines() {
            println!("    {}", line);
        }

        if !self.dropped_zero.is_empty() {
            println!();
            println!(
                "    {} {}",
                style("📝").cyan(),
                style("DROPPED COLUMNS").white().bold()
            );
            println!("    {}", style("─".repeat(50)).dim());
            println!();
            for name in &self.dropped_zero {
                println!("      {} {}", style("•").red(), name);
            }
        }

        if !self.ranking.is_empty() {
            println!();
            println!(
                "    {} {}",
                style("📈").cyan(),
                style("FEATURE RANKING").white().bold()
            );
            println!("    {}", style("─".repeat(50)).dim());
            println!();

            let mut ranking_table = Table::new();
            ranking_table.load_preset(UTF8_FULL_CONDENSED);
            ranking_table.set_header(vec![
                Cell::new("#").add_attribute(Attribute::Bold),
                Cell::new("Column").add_attribute(Attribute::Bold),
                Cell::new("Std Dev").add_attribute(Attribute::Bold),
            ]);
            for (rank, (name, std_dev)) in self.ranking.iter().enumerate() {
                ranking_table.add_row(vec![
                    Cell::new(rank + 1),
                    Cell::new(name),
                    Cell::new(format!("{:.4}", std_dev)).fg(Color::Cyan),
                ]);
            }
            for line in ranking_table.to_string().lines() {
                println!("    {}", line);
            }
        }
    }
}
