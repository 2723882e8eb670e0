//! Core data model for daily bike-share observations.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};


/// Calendar season, declared in chart display order.
///
/// The derived `Ord` follows declaration order, so sorting season keys
/// yields spring, summer, fall, winter without a separate ordering table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}


impl Season {
    /// Category label used on chart axes.
    pub fn label(&self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Fall => "fall",
            Season::Winter => "winter",
        }
    }

    /// Map the dataset's numeric season code (1-4).
    pub fn from_code(code: i64) -> Option<Season> {
        match code {
            1 => Some(Season::Spring),
            2 => Some(Season::Summer),
            3 => Some(Season::Fall),
            4 => Some(Season::Winter),
            _ => None,
        }
    }

    /// Map a season name, including the "springer" spelling some exports
    /// of this dataset carry for spring.
    pub fn from_name(name: &str) -> Option<Season> {
        match name.trim().to_lowercase().as_str() {
            "spring" | "springer" => Some(Season::Spring),
            "summer" => Some(Season::Summer),
            "fall" | "autumn" => Some(Season::Fall),
            "winter" => Some(Season::Winter),
            _ => None,
        }
    }
}


/// One of the three summed rental measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Measure {
    Total,
    Registered,
    Casual,
}


impl Measure {
    /// Fixed series order for reshaping and chart legends.
    pub const ORDER: [Measure; 3] = [Measure::Total, Measure::Registered, Measure::Casual];

    /// Series label used in legends.
    pub fn label(&self) -> &'static str {
        match self {
            Measure::Total => "total",
            Measure::Registered => "registered",
            Measure::Casual => "casual",
        }
    }
}


/// Rental counts for one observation or one aggregate row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalCounts {
    pub total: i64,
    pub registered: i64,
    pub casual: i64,
}


impl RentalCounts {
    /// Accumulate another set of counts into this one.
    pub fn add(&mut self, other: RentalCounts) {
        self.total += other.total;
        self.registered += other.registered;
        self.casual += other.casual;
    }

    /// Value of a single measure.
    pub fn get(&self, measure: Measure) -> i64 {
        match measure {
            Measure::Total => self.total,
            Measure::Registered => self.registered,
            Measure::Casual => self.casual,
        }
    }
}


/// One daily observation from the bike-share dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RideDay {
    pub date: NaiveDate,
    pub season: Season,
    pub working_day: bool,
    pub holiday: bool,
    pub year: i32,
    pub counts: RentalCounts,
}
