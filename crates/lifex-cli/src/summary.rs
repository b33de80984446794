//! Human-readable run summary.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use crate::pipeline::RunSummary;

pub fn print_summary(summary: &RunSummary) {
    println!("Input: {}", summary.input.display());
    println!("Region: {}", summary.region);

    let mut table = Table::new();
    table.set_header(vec!["Rows in", "Year columns", "Observations kept"]);
    apply_table_style(&mut table);
    for index in 0..3 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(summary.rows_in),
        Cell::new(summary.year_columns),
        Cell::new(summary.observations),
    ]);
    println!("{table}");

    if summary.saved() {
        println!(
            "Data has been cleaned and saved to {}",
            summary.output.display()
        );
    } else if let Some(save_error) = &summary.save_error {
        eprintln!("error: save failed: {save_error}");
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
