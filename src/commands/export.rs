//! Export command - write the report charts as an SVG or PNG image.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::aggregation::{build_report, filter_by_interval};
use crate::config::{resolve_data_path, DEFAULT_EXPORT_STEM};
use crate::data::load_rides;
use crate::models::DateInterval;
use crate::visualization::{export_report_png, export_report_svg, open_file};


/// Run the export command.
pub fn run(
    svg: bool,
    should_open: bool,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    output: Option<String>,
    data: Option<String>,
) -> Result<()> {
    let data_path = resolve_data_path(data)?;

    // Determine format and output path
    let format_type = if svg { "svg" } else { "png" };
    let output_path = if let Some(path) = output {
        PathBuf::from(path)
    } else {
        PathBuf::from(format!("{}.{}", DEFAULT_EXPORT_STEM, format_type))
    };

    let rides = load_rides(&data_path)?;
    let bounds = DateInterval::spanning(&rides)
        .with_context(|| format!("Dataset at {} has no rows", data_path.display()))?;

    let interval = DateInterval::resolve(from, to, bounds)?;
    let filtered = filter_by_interval(&rides, interval);
    let report = build_report(&filtered);

    println!("Exporting to {}...", format_type.to_uppercase());

    if svg {
        export_report_svg(&report, interval, &output_path)?;
    } else {
        export_report_png(&report, interval, &output_path)?;
    }

    println!("\x1b[32m+ Exported to: {}\x1b[0m", output_path.display());

    // Open if requested
    if should_open {
        println!("Opening {}...", format_type.to_uppercase());
        open_file(&output_path)?;
    }

    Ok(())
}
