//! Grouped rental summaries over a date-filtered subset.

use std::collections::BTreeMap;

use crate::aggregation::{melt, LongRow};
use crate::models::{DateInterval, Measure, RentalCounts, RideDay};


/// One aggregate row: a category label plus summed measures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub label: String,
    pub counts: RentalCounts,
}


/// One titled breakdown of the filtered records.
#[derive(Debug, Clone)]
pub struct ReportSection {
    pub title: &'static str,
    pub rows: Vec<SummaryRow>,
}


impl ReportSection {
    /// Long-form rows for the grouped-bar renderers, category-major in
    /// the fixed measure order.
    pub fn long_rows(&self) -> Vec<LongRow> {
        melt(&self.rows, &Measure::ORDER)
    }
}


/// Restrict records to an inclusive date interval.
pub fn filter_by_interval(rides: &[RideDay], interval: DateInterval) -> Vec<RideDay> {
    rides
        .iter()
        .filter(|r| interval.contains(r.date))
        .cloned()
        .collect()
}


/// Rentals summed per season, in fixed display order.
///
/// Seasons with no records in the subset produce no row.
pub fn totals_by_season(rides: &[RideDay]) -> Vec<SummaryRow> {
    sum_by(rides, |r| r.season)
        .into_iter()
        .map(|(season, counts)| SummaryRow {
            label: season.label().to_string(),
            counts,
        })
        .collect()
}


/// Rentals summed by working-day flag, non-working days first.
pub fn totals_by_working_day(rides: &[RideDay]) -> Vec<SummaryRow> {
    sum_by(rides, |r| r.working_day)
        .into_iter()
        .map(|(flag, counts)| SummaryRow {
            label: if flag { "working day" } else { "non-working day" }.to_string(),
            counts,
        })
        .collect()
}


/// Rentals summed by holiday flag, regular days first.
pub fn totals_by_holiday(rides: &[RideDay]) -> Vec<SummaryRow> {
    sum_by(rides, |r| r.holiday)
        .into_iter()
        .map(|(flag, counts)| SummaryRow {
            label: if flag { "holiday" } else { "non-holiday" }.to_string(),
            counts,
        })
        .collect()
}


/// Rentals summed per year, ascending.
pub fn totals_by_year(rides: &[RideDay]) -> Vec<SummaryRow> {
    sum_by(rides, |r| r.year)
        .into_iter()
        .map(|(year, counts)| SummaryRow {
            label: year.to_string(),
            counts,
        })
        .collect()
}


/// The four standard breakdowns of a filtered subset, in report order.
pub fn build_report(rides: &[RideDay]) -> Vec<ReportSection> {
    vec![
        ReportSection {
            title: "Rentals by Season",
            rows: totals_by_season(rides),
        },
        ReportSection {
            title: "Working Days vs Non-working Days",
            rows: totals_by_working_day(rides),
        },
        ReportSection {
            title: "Holidays vs Regular Days",
            rows: totals_by_holiday(rides),
        },
        ReportSection {
            title: "Rentals by Year",
            rows: totals_by_year(rides),
        },
    ]
}


/// Group records by a key and sum their counts, ascending by key.
fn sum_by<K, F>(rides: &[RideDay], key: F) -> Vec<(K, RentalCounts)>
where
    K: Ord,
    F: Fn(&RideDay) -> K,
{
    let mut groups: BTreeMap<K, RentalCounts> = BTreeMap::new();
    for ride in rides {
        groups.entry(key(ride)).or_default().add(ride.counts);
    }

    groups.into_iter().collect()
}
