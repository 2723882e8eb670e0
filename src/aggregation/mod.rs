//! Aggregation layer for rental summaries.

mod long_form;
mod rentals;

pub use long_form::{melt, LongRow};
pub use rentals::{
    build_report,
    filter_by_interval,
    totals_by_holiday,
    totals_by_season,
    totals_by_working_day,
    totals_by_year,
    ReportSection,
    SummaryRow,
};
