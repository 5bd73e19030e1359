use comfy_table::presets::ASCII_FULL;
use comfy_table::{Cell, CellAlignment, Table};
use keyga::error::KgResult;
use keyga::geometry::Geometry;
use keyga::layouts::Layout;
use keyga::render::render_rows;

pub fn print_layout(name: &str, layout: &Layout, geom: &Geometry) -> KgResult<()> {
    println!("\nLayout: {}", name);
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    for row in render_rows(layout, geom)? {
        let cells: Vec<Cell> = row
            .split(' ')
            .map(|label| Cell::new(label).set_alignment(CellAlignment::Center))
            .collect();
        table.add_row(cells);
    }
    println!("{}", table);
    Ok(())
}
