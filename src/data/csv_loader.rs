//! CSV loader for the daily bike-share dataset.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::models::{RentalCounts, RideDay, Season};


/// Direct mapping of the input CSV schema.
///
/// Categorical columns stay `String` here because the dataset circulates in
/// two encodings (numeric codes and spelled-out names); conversion and
/// validation happen in `convert_row`. Columns beyond these are ignored.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "dteday")]
    date: String,
    season: String,
    #[serde(rename = "workingday")]
    working_day: String,
    holiday: String,
    yr: String,
    #[serde(rename = "cnt")]
    total: i64,
    registered: i64,
    casual: i64,
}


/// Load and validate the full dataset.
///
/// Any failure is fatal: a missing file, a missing required column, or a
/// value that does not parse. The error carries the file and row so the
/// message points at the offending line.
pub fn load_rides(path: &Path) -> Result<Vec<RideDay>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open dataset: {}", path.display()))?;

    let mut rides = Vec::new();
    for (idx, row) in reader.deserialize::<RawRow>().enumerate() {
        // Header is line 1, so the first data row is line 2.
        let line = idx + 2;
        let row = row.with_context(|| format!("{}: line {}", path.display(), line))?;
        let ride = convert_row(&row)
            .with_context(|| format!("{}: line {}", path.display(), line))?;
        rides.push(ride);
    }

    Ok(rides)
}


/// Convert a raw CSV row into a validated RideDay.
fn convert_row(row: &RawRow) -> Result<RideDay> {
    let date = NaiveDate::parse_from_str(row.date.trim(), "%Y-%m-%d")
        .with_context(|| format!("Invalid dteday value: {:?}", row.date))?;

    let season = parse_season(&row.season)?;
    let working_day = parse_flag(&row.working_day)
        .with_context(|| format!("Invalid workingday value: {:?}", row.working_day))?;
    let holiday = parse_flag(&row.holiday)
        .with_context(|| format!("Invalid holiday value: {:?}", row.holiday))?;
    let year = parse_year(&row.yr)?;

    Ok(RideDay {
        date,
        season,
        working_day,
        holiday,
        year,
        counts: RentalCounts {
            total: row.total,
            registered: row.registered,
            casual: row.casual,
        },
    })
}


/// Parse a season cell: numeric code 1-4 or a season name.
fn parse_season(raw: &str) -> Result<Season> {
    if let Ok(code) = raw.trim().parse::<i64>() {
        return Season::from_code(code)
            .with_context(|| format!("Unknown season code: {}", code));
    }

    Season::from_name(raw).with_context(|| format!("Unknown season name: {:?}", raw))
}


/// Parse a 0/1 flag cell.
fn parse_flag(raw: &str) -> Result<bool> {
    match raw.trim().parse::<i64>() {
        Ok(0) => Ok(false),
        Ok(1) => Ok(true),
        _ => anyhow::bail!("expected 0 or 1"),
    }
}


/// Parse the year cell: the dataset's 0/1 index or a literal year.
fn parse_year(raw: &str) -> Result<i32> {
    match raw.trim().parse::<i64>() {
        Ok(0) => Ok(2011),
        Ok(1) => Ok(2012),
        Ok(year @ 1900..=2100) => Ok(year as i32),
        _ => anyhow::bail!("Invalid yr value: {:?}", raw),
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn raw_row(date: &str, season: &str, working_day: &str, holiday: &str, yr: &str) -> RawRow {
        RawRow {
            date: date.to_string(),
            season: season.to_string(),
            working_day: working_day.to_string(),
            holiday: holiday.to_string(),
            yr: yr.to_string(),
            total: 985,
            registered: 654,
            casual: 331,
        }
    }

    #[test]
    fn test_convert_row_numeric_codes() {
        let ride = convert_row(&raw_row("2011-01-01", "1", "0", "0", "0")).unwrap();

        assert_eq!(ride.date, NaiveDate::from_ymd_opt(2011, 1, 1).unwrap());
        assert_eq!(ride.season, Season::Spring);
        assert!(!ride.working_day);
        assert!(!ride.holiday);
        assert_eq!(ride.year, 2011);
        assert_eq!(ride.counts.total, 985);
        assert_eq!(ride.counts.registered, 654);
        assert_eq!(ride.counts.casual, 331);
    }

    #[test]
    fn test_convert_row_named_season_and_literal_year() {
        let ride = convert_row(&raw_row("2012-07-04", "springer", "1", "1", "2012")).unwrap();
        assert_eq!(ride.season, Season::Spring);
        assert!(ride.working_day);
        assert!(ride.holiday);
        assert_eq!(ride.year, 2012);
    }

    #[test]
    fn test_convert_row_rejects_bad_date() {
        let err = convert_row(&raw_row("01/01/2011", "1", "0", "0", "0")).unwrap_err();
        assert!(err.to_string().contains("dteday"));
    }

    #[test]
    fn test_convert_row_rejects_unknown_season() {
        assert!(convert_row(&raw_row("2011-01-01", "5", "0", "0", "0")).is_err());
        assert!(convert_row(&raw_row("2011-01-01", "monsoon", "0", "0", "0")).is_err());
    }

    #[test]
    fn test_convert_row_rejects_bad_flag() {
        let err = convert_row(&raw_row("2011-01-01", "1", "2", "0", "0")).unwrap_err();
        assert!(err.to_string().contains("workingday"));
    }

    #[test]
    fn test_load_rides_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "dteday,season,workingday,holiday,yr,cnt,registered,casual").unwrap();
        writeln!(file, "2011-01-01,1,0,0,0,985,654,331").unwrap();
        writeln!(file, "2011-01-02,1,1,0,0,801,670,131").unwrap();

        let rides = load_rides(file.path()).unwrap();
        assert_eq!(rides.len(), 2);
        assert_eq!(rides[1].counts.total, 801);
    }

    #[test]
    fn test_load_rides_ignores_extra_columns() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "instant,dteday,season,workingday,holiday,yr,weathersit,cnt,registered,casual").unwrap();
        writeln!(file, "1,2011-01-01,1,0,0,0,2,985,654,331").unwrap();

        let rides = load_rides(file.path()).unwrap();
        assert_eq!(rides.len(), 1);
    }

    #[test]
    fn test_load_rides_missing_column_is_fatal() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "dteday,season,workingday,holiday,yr,registered,casual").unwrap();
        writeln!(file, "2011-01-01,1,0,0,0,654,331").unwrap();

        assert!(load_rides(file.path()).is_err());
    }

    #[test]
    fn test_load_rides_missing_file_is_fatal() {
        let err = load_rides(Path::new("/nonexistent/all_data.csv")).unwrap_err();
        assert!(err.to_string().contains("Failed to open dataset"));
    }
}
