//! Human-readable import summaries.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use flatcache_ingest::{FieldType, ImportSummary};

pub fn print_summary(summary: &ImportSummary) {
    println!("Source: {}", summary.source.display());
    println!("{}", summary_table(summary));
    println!("{}", summary_footer(summary));
}

/// Row and field counts, with the number of fields of each type seen.
pub fn summary_footer(summary: &ImportSummary) -> String {
    let by_type: Vec<String> = FieldType::ALL
        .into_iter()
        .filter_map(|field_type| {
            let count = summary.count_of(field_type);
            (count > 0).then(|| format!("{count} {}", type_label(field_type)))
        })
        .collect();
    let mut footer = format!("{} rows, {} fields", summary.row_count, summary.fields.len());
    if !by_type.is_empty() {
        footer.push_str(&format!(" ({})", by_type.join(", ")));
    }
    footer
}

fn type_label(field_type: FieldType) -> &'static str {
    match field_type {
        FieldType::Unknown => "unknown",
        FieldType::Integer => "integer",
        FieldType::Float => "float",
        FieldType::String => "string",
    }
}

/// One row per field in header order: position, name, inferred type.
pub fn summary_table(summary: &ImportSummary) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Field"),
        header_cell("Type"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, field) in summary.fields.iter().enumerate() {
        table.add_row(vec![
            dim_cell(index + 1),
            Cell::new(&field.name),
            type_cell(field.field_type),
        ]);
    }
    table
}

/// One row per literal: the value and the type it probes as.
pub fn probe_table<'a, I>(values: I) -> Table
where
    I: IntoIterator<Item = (&'a str, FieldType)>,
{
    let mut table = Table::new();
    table.set_header(vec![header_cell("Value"), header_cell("Type")]);
    apply_summary_table_style(&mut table);
    for (value, field_type) in values {
        table.add_row(vec![Cell::new(format!("{value:?}")), type_cell(field_type)]);
    }
    table
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn type_cell(field_type: FieldType) -> Cell {
    let cell = Cell::new(field_type);
    match field_type {
        FieldType::Integer => cell.fg(Color::Green),
        FieldType::Float => cell.fg(Color::Blue),
        FieldType::String => cell.fg(Color::Yellow),
        FieldType::Unknown => cell.fg(Color::DarkGrey),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
