mod help;
mod render;
mod table;
pub mod theme;
mod views;

pub use help::{help_lines, write_banner, write_goodbye, write_help};
pub use render::{pad_visible, render_table};
pub use table::Table;
pub use theme::{Paint, Theme};
pub use views::{
    LIST_HEADERS, TOP_HEADERS, clear_screen, process_table, rank_label, top_table, write_legend,
    write_list_view, write_top_view,
};
