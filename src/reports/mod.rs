mod grid;
mod tables;

pub use self::grid::print_layout as print_layout_grid;
pub use self::tables::scoring as print_scoring_report;
