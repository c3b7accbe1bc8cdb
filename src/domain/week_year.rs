// ============================================================
// WEEK YEAR
// ============================================================
// ISO-8601 week-of-year value, displayed as e.g. "2024W05"

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A week within a year, ISO-8601 numbering.
///
/// The year is the ISO week-year, which near year boundaries can differ
/// from the calendar year: Jan 1 may belong to week 52/53 of the
/// previous ISO year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WeekYear {
    pub year: i32,
    pub week: u32,
}

impl WeekYear {
    /// Create from an explicit year and week
    pub fn new(year: i32, week: u32) -> Self {
        Self { year, week }
    }

    /// ISO week-year and week number of a date
    pub fn from_date(date: NaiveDate) -> Self {
        let iso = date.iso_week();
        Self {
            year: iso.year(),
            week: iso.week(),
        }
    }
}

impl fmt::Display for WeekYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}W{:02}", self.year, self.week)
    }
}

impl From<NaiveDate> for WeekYear {
    fn from(date: NaiveDate) -> Self {
        Self::from_date(date)
    }
}
