//! Date-bucketed task views: today, tomorrow and the current week.
//!
//! Only the calendar date of a task's due date matters; the time of day is
//! dropped before comparison. All buckets are computed in UTC from a single
//! `now` supplied by the caller, so the same instant always yields the same
//! bounds.
//!
//! The week runs Monday to Sunday and both ends are inclusive:
//!
//! ```text
//! days_from_monday = (day_of_week + 6) % 7     // Sunday = 0 → Monday = 0 .. Sunday = 6
//! start_of_week    = today - days_from_monday
//! end_of_week      = start_of_week + 6
//! ```

use super::messages::Message;
use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use std::fmt;
use std::str::FromStr;

/// Named bucket requested by a caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskRange {
    Today,
    Tomorrow,
    Week,
}

impl TaskRange {
    /// Inclusive calendar bounds of this bucket relative to `now`.
    pub fn bounds(self, now: DateTime<Utc>) -> DateRange {
        let today = now.date_naive();
        match self {
            TaskRange::Today => DateRange::single(today),
            TaskRange::Tomorrow => DateRange::single(today + Duration::days(1)),
            TaskRange::Week => week_containing(today),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TaskRange::Today => "today",
            TaskRange::Tomorrow => "tomorrow",
            TaskRange::Week => "this week",
        }
    }
}

impl fmt::Display for TaskRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TaskRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "today" => Ok(TaskRange::Today),
            "tomorrow" => Ok(TaskRange::Tomorrow),
            "week" | "this-week" => Ok(TaskRange::Week),
            other => Err(Message::InvalidRange(other.to_string()).to_string()),
        }
    }
}

/// Inclusive range of calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn single(day: NaiveDate) -> Self {
        Self { start: day, end: day }
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }
}

/// Monday-to-Sunday week containing `day`.
pub fn week_containing(day: NaiveDate) -> DateRange {
    let days_from_monday = (day.weekday().num_days_from_sunday() + 6) % 7;
    let start = day - Duration::days(i64::from(days_from_monday));

    DateRange {
        start,
        end: start + Duration::days(6),
    }
}
