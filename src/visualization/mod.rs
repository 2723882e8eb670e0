//! Visualization layer for the terminal report and chart exports.

mod dashboard;
mod export;

pub use dashboard::render_report;
pub use export::{export_report_png, export_report_svg, open_file};
