//! Dashboard command - render the report in the terminal.

use std::path::Path;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::aggregation::{build_report, filter_by_interval};
use crate::config::{resolve_data_path, DEFAULT_REFRESH_INTERVAL};
use crate::data::load_rides;
use crate::models::DateInterval;
use crate::visualization::render_report;


/// Run the dashboard command.
pub fn run(
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    live: bool,
    data: Option<String>,
) -> Result<()> {
    let data_path = resolve_data_path(data)?;

    if live {
        println!(
            "Auto-refreshing every {} seconds. Press Ctrl+C to exit.\n",
            DEFAULT_REFRESH_INTERVAL
        );

        loop {
            display_report(&data_path, from, to, true)?;
            thread::sleep(Duration::from_secs(DEFAULT_REFRESH_INTERVAL));
        }
    } else {
        display_report(&data_path, from, to, false)
    }
}


/// Load, filter, aggregate, and render once.
fn display_report(
    path: &Path,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    clear_screen: bool,
) -> Result<()> {
    let rides = load_rides(path)?;
    let bounds = DateInterval::spanning(&rides)
        .with_context(|| format!("Dataset at {} has no rows", path.display()))?;

    let interval = DateInterval::resolve(from, to, bounds)?;
    let filtered = filter_by_interval(&rides, interval);
    let report = build_report(&filtered);

    render_report(&report, interval, bounds, clear_screen);

    Ok(())
}
