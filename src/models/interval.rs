//! Inclusive date intervals for range selection.

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::RideDay;


/// Errors from interval construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IntervalError {
    #[error("start date {start} is after end date {end}")]
    StartAfterEnd { start: NaiveDate, end: NaiveDate },
}


/// An inclusive calendar date range with start <= end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateInterval {
    start: NaiveDate,
    end: NaiveDate,
}


impl DateInterval {
    /// Build an interval, rejecting an inverted range.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, IntervalError> {
        if start > end {
            return Err(IntervalError::StartAfterEnd { start, end });
        }
        Ok(Self { start, end })
    }

    /// The full range spanned by a record set, or None when it is empty.
    ///
    /// These bounds populate the range-selection side of the CLI.
    pub fn spanning(rides: &[RideDay]) -> Option<Self> {
        let start = rides.iter().map(|r| r.date).min()?;
        let end = rides.iter().map(|r| r.date).max()?;
        Some(Self { start, end })
    }

    /// Combine optional user-picked bounds with the dataset bounds.
    ///
    /// A missing side defaults to the dataset's edge; an inverted pair is
    /// rejected rather than clamped.
    pub fn resolve(
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
        bounds: DateInterval,
    ) -> Result<Self, IntervalError> {
        Self::new(from.unwrap_or(bounds.start), to.unwrap_or(bounds.end))
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Whether a date falls within the interval, inclusive on both ends.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RentalCounts, Season};

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn ride(date_str: &str) -> RideDay {
        RideDay {
            date: date(date_str),
            season: Season::Spring,
            working_day: true,
            holiday: false,
            year: 2011,
            counts: RentalCounts::default(),
        }
    }

    #[test]
    fn test_rejects_inverted_range() {
        let err = DateInterval::new(date("2012-01-01"), date("2011-01-01")).unwrap_err();
        assert_eq!(
            err,
            IntervalError::StartAfterEnd {
                start: date("2012-01-01"),
                end: date("2011-01-01"),
            }
        );
    }

    #[test]
    fn test_single_day_interval_is_valid() {
        let interval = DateInterval::new(date("2011-06-15"), date("2011-06-15")).unwrap();
        assert!(interval.contains(date("2011-06-15")));
        assert!(!interval.contains(date("2011-06-16")));
    }

    #[test]
    fn test_contains_is_inclusive_on_both_ends() {
        let interval = DateInterval::new(date("2011-01-10"), date("2011-01-20")).unwrap();
        assert!(interval.contains(date("2011-01-10")));
        assert!(interval.contains(date("2011-01-20")));
        assert!(!interval.contains(date("2011-01-09")));
        assert!(!interval.contains(date("2011-01-21")));
    }

    #[test]
    fn test_spanning_finds_dataset_bounds() {
        let rides = vec![ride("2011-05-03"), ride("2011-01-01"), ride("2012-12-31")];
        let bounds = DateInterval::spanning(&rides).unwrap();
        assert_eq!(bounds.start(), date("2011-01-01"));
        assert_eq!(bounds.end(), date("2012-12-31"));
    }

    #[test]
    fn test_spanning_empty_dataset() {
        assert!(DateInterval::spanning(&[]).is_none());
    }

    #[test]
    fn test_resolve_defaults_to_bounds() {
        let bounds = DateInterval::new(date("2011-01-01"), date("2012-12-31")).unwrap();

        let full = DateInterval::resolve(None, None, bounds).unwrap();
        assert_eq!(full, bounds);

        let tail = DateInterval::resolve(Some(date("2012-06-01")), None, bounds).unwrap();
        assert_eq!(tail.start(), date("2012-06-01"));
        assert_eq!(tail.end(), date("2012-12-31"));

        let inverted = DateInterval::resolve(Some(date("2013-01-01")), None, bounds);
        assert!(inverted.is_err());
    }
}
