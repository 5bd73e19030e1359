use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use keyga::api::ValidationResult;

pub fn scoring(results: &[ValidationResult]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Layout").add_attribute(Attribute::Bold),
        Cell::new("Cost").fg(Color::Cyan),
        Cell::new("Pairs"),
        Cell::new("Repeat"),
        Cell::new("Row Jump %"),
        Cell::new("Keys"),
    ]);

    for i in 1..=4 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for r in results {
        table.add_row(vec![
            Cell::new(&r.layout_name).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.4}", r.cost)).fg(Color::Cyan),
            Cell::new(r.pair_count),
            Cell::new(r.same_key_pairs),
            Cell::new(format!("{:.1}", r.row_jump_ratio * 100.0)),
            Cell::new(&r.layout),
        ]);
    }
    println!("\n{}", table);
}
