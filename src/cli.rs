//! CLI definitions using clap.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::commands;


/// Bikeshare Report - CLI for bike-sharing rental reports and charts
#[derive(Parser)]
#[command(name = "bsr")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}


#[derive(Subcommand)]
enum Commands {
    /// Render the grouped rental report in the terminal
    Dashboard {
        /// Start of the date range (YYYY-MM-DD, default: first date in the data)
        #[arg(long)]
        from: Option<NaiveDate>,

        /// End of the date range (YYYY-MM-DD, default: last date in the data)
        #[arg(long)]
        to: Option<NaiveDate>,

        /// Re-read the dataset and redraw every 5 seconds
        #[arg(long)]
        live: bool,

        /// Dataset path (default: data/all_data.csv)
        #[arg(short, long)]
        data: Option<String>,
    },

    /// Export the report charts as PNG or SVG
    Export {
        /// Export as SVG instead of PNG
        #[arg(long)]
        svg: bool,

        /// Open file after export
        #[arg(long)]
        open: bool,

        /// Start of the date range (YYYY-MM-DD, default: first date in the data)
        #[arg(long)]
        from: Option<NaiveDate>,

        /// End of the date range (YYYY-MM-DD, default: last date in the data)
        #[arg(long)]
        to: Option<NaiveDate>,

        /// Output file path
        #[arg(short, long)]
        output: Option<String>,

        /// Dataset path (default: data/all_data.csv)
        #[arg(short, long)]
        data: Option<String>,
    },

    /// Show summary statistics and aggregate tables
    Stats {
        /// Start of the date range (YYYY-MM-DD, default: first date in the data)
        #[arg(long)]
        from: Option<NaiveDate>,

        /// End of the date range (YYYY-MM-DD, default: last date in the data)
        #[arg(long)]
        to: Option<NaiveDate>,

        /// Dataset path (default: data/all_data.csv)
        #[arg(short, long)]
        data: Option<String>,
    },
}


/// Run the CLI.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Dashboard { from, to, live, data }) => {
            commands::dashboard::run(from, to, live, data)
        }
        Some(Commands::Export { svg, open, from, to, output, data }) => {
            commands::export::run(svg, open, from, to, output, data)
        }
        Some(Commands::Stats { from, to, data }) => {
            commands::stats::run(from, to, data)
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            Ok(())
        }
    }
}
