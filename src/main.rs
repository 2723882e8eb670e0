//! Bikeshare Report CLI
//!
//! Date-filtered rental reports and grouped bar charts for the
//! bike-sharing dataset.

mod aggregation;
mod cli;
mod commands;
mod config;
mod data;
mod models;
mod visualization;


fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
