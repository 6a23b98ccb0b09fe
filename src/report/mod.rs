//! # Report Module
//!
//! Terminal presentation and the CSV export artifact.

mod export;
mod render;

pub use export::{write_csv, write_csv_file, DEFAULT_EXPORT_FILENAME};
pub use render::{render_distribution, render_keyword_panel, render_report, render_table};
