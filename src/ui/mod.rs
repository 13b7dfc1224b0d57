//! Terminal output helpers

pub mod table;

pub use table::{farmers_table, retailers_table, stats_table};

use owo_colors::OwoColorize;

/// Print a bold section header
pub fn section(title: &str) {
    println!("{}", title.bold());
}
