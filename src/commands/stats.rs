//! Stats command - show summary figures and aggregate tables.

use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::aggregation::{build_report, filter_by_interval};
use crate::config::resolve_data_path;
use crate::data::load_rides;
use crate::models::{DateInterval, RentalCounts};


/// Run the stats command.
pub fn run(from: Option<NaiveDate>, to: Option<NaiveDate>, data: Option<String>) -> Result<()> {
    let data_path = resolve_data_path(data)?;

    let rides = load_rides(&data_path)?;
    let bounds = DateInterval::spanning(&rides)
        .with_context(|| format!("Dataset at {} has no rows", data_path.display()))?;

    let interval = DateInterval::resolve(from, to, bounds)?;
    let filtered = filter_by_interval(&rides, interval);
    let report = build_report(&filtered);

    let mut totals = RentalCounts::default();
    for ride in &filtered {
        totals.add(ride.counts);
    }

    // Header
    println!("\n{}", "=".repeat(60));
    println!("{:^60}", "Bike Sharing Rental Statistics");
    println!("{}\n", "=".repeat(60));

    // Dataset bounds (these populate a range selector's limits)
    println!("DATASET");
    println!("{}", "-".repeat(40));
    println!("  Days Recorded:       {:>15}", format_number(rides.len() as i64));
    println!("  Date Range:          {} to {}", bounds.start(), bounds.end());

    // Active selection
    println!("\nSELECTION");
    println!("{}", "-".repeat(40));
    println!("  Showing:             {} to {}", interval.start(), interval.end());
    println!("  Days in Range:       {:>15}", format_number(filtered.len() as i64));
    println!("  Total Rentals:       {:>15}", format_number(totals.total));
    println!("  Registered:          {:>15}", format_number(totals.registered));
    println!("  Casual:              {:>15}", format_number(totals.casual));

    // Aggregate tables
    for section in &report {
        println!("\n{}", section.title.to_uppercase());
        println!("{}", "-".repeat(60));

        if section.rows.is_empty() {
            println!("  (no rides in selected range)");
            continue;
        }

        println!(
            "  {:<18} {:>12} {:>12} {:>12}",
            "", "total", "registered", "casual"
        );
        for row in &section.rows {
            println!(
                "  {:<18} {:>12} {:>12} {:>12}",
                row.label,
                format_number(row.counts.total),
                format_number(row.counts.registered),
                format_number(row.counts.casual)
            );
        }
    }

    Ok(())
}


/// Format a number with commas.
fn format_number(n: i64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    let chars: Vec<char> = s.chars().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }

    result
}
