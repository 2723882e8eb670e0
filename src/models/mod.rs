//! Data model for bike-share observations and range selection.

mod interval;
mod ride_day;

pub use interval::{DateInterval, IntervalError};
pub use ride_day::{Measure, RentalCounts, RideDay, Season};
