//! Period keys and labels for monthly and weekly reporting.

use chrono::{Datelike, Month, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which year a weekly bucket is filed under.
///
/// `Calendar` uses the calendar year of the date, so 2027-01-01 (ISO week 53
/// of 2026) lands in "Week 53, 2027". `Iso` uses the ISO week-year and files it
/// under "Week 53, 2026".
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WeekYear {
    #[default]
    Calendar,
    Iso,
}

impl std::str::FromStr for WeekYear {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "calendar" => Ok(WeekYear::Calendar),
            "iso" => Ok(WeekYear::Iso),
            other => Err(format!("unknown week year policy: {other} (expected calendar or iso)")),
        }
    }
}

/// Sub-year period unit a bucket is keyed on
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PeriodUnit {
    /// Calendar month, 1-12
    Month(u32),
    /// ISO week number, 1-53
    Week(u32),
}

/// A reporting period: year plus month or week
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Period {
    pub year: i32,
    pub unit: PeriodUnit,
}

impl Period {
    pub fn month_of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            unit: PeriodUnit::Month(date.month()),
        }
    }

    pub fn week_of(date: NaiveDate, week_year: WeekYear) -> Self {
        let iso = date.iso_week();
        let year = match week_year {
            WeekYear::Calendar => date.year(),
            WeekYear::Iso => iso.year(),
        };
        Self {
            year,
            unit: PeriodUnit::Week(iso.week()),
        }
    }

    /// "January 2024" or "Week 3, 2024"
    pub fn label(&self) -> String {
        match self.unit {
            PeriodUnit::Month(m) => month_label(self.year, m),
            PeriodUnit::Week(w) => week_label(self.year, w),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Full month name followed by the year
pub fn month_label(year: i32, month: u32) -> String {
    let name = u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name())
        .unwrap_or("Unknown");
    format!("{name} {year}")
}

pub fn week_label(year: i32, week: u32) -> String {
    format!("Week {week}, {year}")
}
