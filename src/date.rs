// Date value type - calendar dates for admissions, discharges and birthdays
// Thin wrapper over chrono::NaiveDate so every subtraction goes through real
// calendar arithmetic (month lengths, leap years).

use chrono::{Datelike, Duration, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Sub;

use crate::error::{RecordError, Result};

// ============================================================================
// DATE
// ============================================================================

/// Calendar date value - immutable after construction
///
/// Equality is field-wise; subtraction yields a signed `chrono::Duration`.
///
/// Example: `Date::new(2022, 4, 22)? - Date::new(2022, 4, 14)?` is 8 days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Date(NaiveDate);

impl Date {
    /// Create a date, rejecting year/month/day combinations that no
    /// calendar contains (2022-02-30, month 13, ...)
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or(RecordError::InvalidDate { year, month, day })
    }

    /// Today's date from the local clock
    pub fn today() -> Self {
        Date(Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Render with a strftime pattern, e.g. `"%d/%m/%Y"`
    pub fn format(&self, pattern: &str) -> String {
        self.0.format(pattern).to_string()
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl Sub for Date {
    type Output = Duration;

    /// Signed day-count difference, calendar aware
    fn sub(self, other: Date) -> Duration {
        self.0 - other.0
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%d/%m/%Y"))
    }
}

// ============================================================================
// TESTS
// ============================================================================
