//! Console rendering of the county table and run summary.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use ppr_model::{CountyCounts, SummaryStats};

use crate::pipeline::ReportResult;

/// Print the county count table and the three statistics.
///
/// Runs between the summarize stage and artifact generation; output is
/// for human observation, not machine parsing.
pub fn print_counts(counties: &CountyCounts, stats: &SummaryStats) {
    println!("Polling Places per County:");
    let mut table = Table::new();
    table.set_header(vec![header_cell("County"), header_cell("Polling Places")]);
    apply_table_style(&mut table);
    for row in &counties.rows {
        table.add_row(vec![Cell::new(&row.county), Cell::new(row.polling_places)]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(counties.total()).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
    println!();
    println!(
        "Mean Number of Polling Places per County: {}",
        stats.mean_text()
    );
    println!(
        "Median Number of Polling Places per County: {}",
        stats.median_text()
    );
    println!("Standard Deviation: {}", stats.std_dev_text());
}

/// Print run provenance and artifact paths after generation.
pub fn print_artifacts(result: &ReportResult) {
    println!();
    println!("Input: {}", result.input_path.display());
    println!(
        "Rows: {} raw, {} cleaned",
        result.raw_rows, result.clean_rows
    );
    if result.skipped_rows > 0 {
        println!("Skipped rows (malformed): {}", result.skipped_rows);
    }
    if !result.election_dates.is_empty() {
        let dates: Vec<String> = result
            .election_dates
            .iter()
            .map(|date| date.to_string())
            .collect();
        println!("Election date(s): {}", dates.join(", "));
    }
    println!("Chart: {}", result.artifacts.chart.display());
    println!(
        "Markdown report generated at: {}",
        result.artifacts.markdown.display()
    );
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
