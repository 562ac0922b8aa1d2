use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use capcase_cli::types::RunResult;

pub fn print_summary(result: &RunResult) {
    println!("Input: {}", result.input.display());
    match &result.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: (dry run, nothing written)"),
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Stage"),
        header_cell("Rows"),
        header_cell("Columns"),
        header_cell("Changed"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);

    table.add_row(vec![
        stage_cell("Loaded"),
        Cell::new(result.source_rows),
        Cell::new(result.source_columns),
        dim_cell("-"),
    ]);
    for (column, count) in &result.normalization.replaced {
        table.add_row(vec![
            stage_cell(&format!("Labels: {column}")),
            dim_cell("-"),
            dim_cell("-"),
            count_cell(*count),
        ]);
    }
    table.add_row(vec![
        stage_cell("Years expanded"),
        dim_cell("-"),
        dim_cell("-"),
        count_cell(result.normalization.dates_converted),
    ]);
    table.add_row(vec![
        Cell::new("CLEANED")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(result.rows).add_attribute(Attribute::Bold),
        Cell::new(result.columns).add_attribute(Attribute::Bold),
        count_cell(result.normalization.total_replaced() + result.normalization.dates_converted)
            .add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    if result.remaining_whitespace > 0 {
        eprintln!(
            "warning: {} value(s) still have surrounding whitespace",
            result.remaining_whitespace
        );
    }
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
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

fn stage_cell(label: &str) -> Cell {
    Cell::new(label).fg(Color::Blue)
}

fn count_cell(count: usize) -> Cell {
    if count == 0 {
        dim_cell(count)
    } else {
        Cell::new(count).fg(Color::Green)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
