//! Run summary printed after a successful conversion.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use creg_model::TextField;

use crate::pipeline::RunSummary;

pub fn print_summary(summary: &RunSummary) {
    println!("Input:  {}", summary.input.display());
    println!("Output: {}", summary.output.display());
    if summary.verified {
        println!("Verified: record count and ordering checked");
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![header_cell("Field"), header_cell("Width")]);
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    for field in TextField::ALL {
        table.add_row(vec![
            Cell::new(field.label()),
            Cell::new(summary.widths.get(field)),
        ]);
    }
    table.add_row(vec![
        Cell::new("record length").add_attribute(Attribute::Bold),
        Cell::new(summary.widths.record_len()).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    println!(
        "{} records, {} bytes",
        summary.records, summary.bytes_written
    );
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}
