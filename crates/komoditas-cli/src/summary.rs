//! Terminal rendering of command results with `comfy-table`.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use komoditas_model::FrequencyTable;
use komoditas_model::columns::FREKUENSI;
use komoditas_transform::ClassificationRow;

use crate::commands::{KindInfo, OverviewRow, OverviewStatus, SearchResult};

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
}

pub fn kinds_table(kinds: &[KindInfo]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Kind"),
        header_cell("Label"),
        header_cell("File"),
        header_cell("Required columns"),
        header_cell("Commodity match"),
    ]);
    apply_summary_table_style(&mut table);
    for info in kinds {
        let file_cell = if info.exists {
            Cell::new(info.path.display())
        } else {
            Cell::new(format!("{} (missing)", info.path.display())).fg(Color::Yellow)
        };
        table.add_row(vec![
            kind_cell(info.kind.slug()),
            Cell::new(info.kind.label()),
            file_cell,
            Cell::new(info.required.join(", ")),
            Cell::new(info.commodity_match.label()),
        ]);
    }
    table
}

/// Single-column listing with the implicit "all" choice first.
pub fn choices_table(title: &str, choices: &[String]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell(title)]);
    apply_table_style(&mut table);
    table.add_row(vec![dim_cell("SEMUA")]);
    for choice in choices {
        table.add_row(vec![Cell::new(choice)]);
    }
    table
}

pub fn frequency_table(frequencies: &FrequencyTable) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell(&frequencies.column), header_cell(FREKUENSI)]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for entry in &frequencies.entries {
        let value = if entry.value.is_empty() {
            dim_cell("(blank)")
        } else {
            Cell::new(&entry.value)
        };
        table.add_row(vec![value, Cell::new(entry.count)]);
    }
    table
}

pub fn classification_table(rows: &[ClassificationRow]) -> Table {
    let mut table = Table::new();
    table.set_header(ClassificationRow::HEADER.map(header_cell).to_vec());
    apply_table_style(&mut table);
    for row in rows {
        table.add_row(row.fields().to_vec());
    }
    table
}

pub fn overview_table(rows: &[OverviewRow]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Kind"),
        header_cell("Status"),
        header_cell("Encoding"),
        header_cell("Rows"),
        header_cell("Offices"),
        header_cell("Commodities"),
        header_cell("Detail"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Right);
    for row in rows {
        let cells = match &row.status {
            OverviewStatus::Ready {
                encoding,
                rows,
                offices,
                commodities,
            } => vec![
                kind_cell(row.kind.slug()),
                Cell::new("OK").fg(Color::Green).add_attribute(Attribute::Bold),
                Cell::new(encoding),
                Cell::new(rows),
                Cell::new(offices),
                Cell::new(commodities),
                dim_cell(row.path.display()),
            ],
            OverviewStatus::Failed { stage, message } => vec![
                kind_cell(row.kind.slug()),
                Cell::new(format!("FAILED ({stage})"))
                    .fg(Color::Red)
                    .add_attribute(Attribute::Bold),
                dim_cell("-"),
                dim_cell("-"),
                dim_cell("-"),
                dim_cell("-"),
                Cell::new(message),
            ],
        };
        table.add_row(cells);
    }
    table
}

pub fn print_search(result: &SearchResult) {
    let outcome = &result.outcome;
    println!("Dataset: {} ({})", outcome.kind.label(), outcome.path.display());
    println!("Encoding: {}", outcome.encoding);
    if let Some(commodity) = &result.reset_commodity {
        println!(
            "Note: {commodity} is not available at {}; showing all commodities",
            outcome.selection.office
        );
    }
    println!(
        "Satpel: {}  Komoditas: {}  Matched: {} of {} records",
        outcome.selection.office,
        outcome.selection.commodity,
        outcome.matched_rows(),
        outcome.total_rows
    );
    if outcome.is_empty() {
        println!("No records match this selection.");
    } else {
        for frequencies in &outcome.frequencies {
            println!();
            println!("{}", frequency_table(frequencies));
        }
        println!();
        println!("{}", classification_table(&outcome.classifications));
    }
    if let Some(path) = &result.export_path {
        println!("Export: {}", path.display());
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn kind_cell(slug: &str) -> Cell {
    Cell::new(slug)
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
