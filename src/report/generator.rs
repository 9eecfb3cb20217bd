//! Report rendering.
//!
//! Turns a [`ReportDocument`] into a console table, a Markdown document
//! or JSON. Renderers only see column names and display values, so they
//! work for every registered report.

use crate::models::{ReportDocument, ReportRow};
use anyhow::Result;
use comfy_table::{presets, Cell, CellAlignment, ContentArrangement, Row, Table};

/// Build a table of `rows` with a leading row-number column.
fn build_table(columns: &[&str], rows: &[ReportRow]) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec!["#"];
    header.extend_from_slice(columns);
    table.set_header(header);

    for (i, row) in rows.iter().enumerate() {
        let mut line = Row::new();
        line.add_cell(Cell::new(i + 1).set_alignment(CellAlignment::Right));
        for value in row.values() {
            let alignment = if value.parse::<f64>().is_ok() {
                CellAlignment::Right
            } else {
                CellAlignment::Left
            };
            line.add_cell(Cell::new(value).set_alignment(alignment));
        }
        table.add_row(line);
    }

    table
}

/// Render the rows as a console table.
pub fn generate_table_report(document: &ReportDocument) -> String {
    if document.rows.is_empty() {
        return "No results\n".to_string();
    }

    let mut table = build_table(document.columns(), &document.rows);
    table.load_preset(presets::UTF8_FULL);

    format!("{}\n", table)
}

/// Generate a complete Markdown report.
pub fn generate_markdown_report(document: &ReportDocument) -> String {
    let mut output = String::new();

    output.push_str(&format!("# Report: {}\n\n", document.report));
    output.push_str(&generate_metadata_section(document));
    output.push_str(&generate_results_section(document));

    output
}

/// Generate the metadata section.
fn generate_metadata_section(document: &ReportDocument) -> String {
    let mut section = String::new();

    section.push_str("## Metadata\n\n");
    section.push_str(&format!(
        "- **Generated:** {}\n",
        document.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    section.push_str(&format!("- **Records:** {}\n", document.record_count));

    if !document.sources.is_empty() {
        section.push_str("- **Sources:**\n");
        for source in &document.sources {
            section.push_str(&format!("  - `{}`\n", source));
        }
    }
    section.push('\n');

    section
}

/// Generate the results section.
fn generate_results_section(document: &ReportDocument) -> String {
    let mut section = String::new();

    section.push_str("## Results\n\n");

    if document.rows.is_empty() {
        section.push_str("No results.\n");
        return section;
    }

    let mut table = build_table(document.columns(), &document.rows);
    table.load_preset(presets::ASCII_MARKDOWN);
    section.push_str(&table.to_string());
    section.push('\n');

    section
}

/// Generate a JSON report.
pub fn generate_json_report(document: &ReportDocument) -> Result<String> {
    serde_json::to_string_pretty(document).map_err(Into::into)
}
