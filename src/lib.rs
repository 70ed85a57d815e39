mod consts;
mod elapsed;
mod pattern;
mod prelude;
mod separator;
#[cfg(test)]
mod test_utils;
mod time;
mod types;
mod utils;

pub use consts::*;
pub use elapsed::ElapsedTime;
pub use pattern::{Component, FormatPattern};
pub use separator::Separator;
pub use time::{TimeOfDay, Timestamp};
pub use types::{Day, Month, Year, days_in_year, is_leap_year};
pub use utils::{
    date_to_string, date_to_string_with, days_left_in_year, days_left_in_year_str,
    days_left_in_year_str_with, elapsed,
    elapsed_hours, elapsed_hours_and_minutes_as_f64, elapsed_hours_and_minutes_as_string,
    elapsed_minutes, instant_to_date, instant_to_local_date, to_local_date, to_local_date_with,
};

use crate::prelude::*;
use std::str::FromStr;

use chrono::Datelike;

/// A valid date on the proleptic Gregorian calendar, years 1 through 9999.
///
/// Field order makes the derived ordering chronological. `Display` renders
/// the default `MM/dd/yyyy` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:02}/{:02}/{:04}", "month.get()", "day.get()", "year.get()")]
pub struct CalendarDate {
    year: types::Year,
    month: types::Month,
    day: types::Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid format pattern: {_0}")]
    InvalidPattern(String),
    #[display(fmt = "Invalid year: {} (must be {}-{})", "_0", MIN_YEAR, MAX_YEAR)]
    InvalidYear(i32),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { month: u8, day: u8, year: u16 },
    #[display(fmt = "Invalid time of day {hour:02}:{minute:02}:{second:02}")]
    InvalidTime { hour: u8, minute: u8, second: u8 },
    #[display(fmt = "Invalid nanosecond: {_0}")]
    InvalidNanosecond(u32),
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

/// Error returned by the utility functions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateTimeError {
    /// A required argument was absent.
    #[error("Invalid argument: `{0}` must not be absent")]
    InvalidArgument(&'static str),

    /// Text did not match its template or named an impossible date.
    #[error(transparent)]
    ParseFailure(#[from] ParseError),
}

impl CalendarDate {
    /// Creates a date, rejecting any combination that does not exist.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear`, `InvalidMonth` or `InvalidDay`.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        let year_nz = types::Year::new(year)?;
        let month_nz = types::Month::new(month)?;
        let day_nz = types::Day::new(day, year, month)?;
        Ok(Self {
            year: year_nz,
            month: month_nz,
            day: day_nz,
        })
    }

    /// Creates a date from already-validated components (day is re-checked
    /// against the year and month).
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` if the day does not exist in that month.
    pub fn from_parts(
        year: types::Year,
        month: types::Month,
        day: types::Day,
    ) -> Result<Self, ParseError> {
        Self::new(year.get(), month.get(), day.get())
    }

    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    pub const fn year_typed(&self) -> types::Year {
        self.year
    }

    pub const fn month_typed(&self) -> types::Month {
        self.month
    }

    pub const fn day_typed(&self) -> types::Day {
        self.day
    }

    pub const fn is_leap_year(&self) -> bool {
        self.year.is_leap()
    }

    /// 365 or 366.
    pub const fn length_of_year(&self) -> u16 {
        days_in_year(self.year())
    }

    /// 1-based day of the year.
    pub const fn ordinal(&self) -> u16 {
        types::ordinal(self.year(), self.month(), self.day())
    }

    /// Days remaining after this one until the end of its year; 0 on December 31st.
    pub const fn days_left_in_year(&self) -> u16 {
        self.length_of_year() - self.ordinal()
    }

    /// Days since 1970-01-01 (negative before).
    pub(crate) const fn epoch_day(&self) -> i64 {
        types::epoch_days_for_year(self.year()) + self.ordinal() as i64 - 1
    }

    /// Attaches a time of day.
    pub const fn and_time(self, time: TimeOfDay) -> Timestamp {
        Timestamp::new(self, time)
    }

    /// # Errors
    /// Returns `ParseError::InvalidTime` if any field is out of range.
    pub fn and_hms(self, hour: u8, minute: u8, second: u8) -> Result<Timestamp, ParseError> {
        TimeOfDay::new(hour, minute, second).map(|time| self.and_time(time))
    }
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    /// Parses the default `MM/dd/yyyy` form, ignoring surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        FormatPattern::default().parse(trimmed)
    }
}

impl TryFrom<chrono::NaiveDate> for CalendarDate {
    type Error = ParseError;

    fn try_from(value: chrono::NaiveDate) -> Result<Self, Self::Error> {
        let year = u16::try_from(value.year()).map_err(|_| ParseError::InvalidYear(value.year()))?;
        // chrono months and days are always 1-12 and 1-31
        let month = u8::try_from(value.month()).unwrap_or(u8::MAX);
        let day = u8::try_from(value.day()).unwrap_or(u8::MAX);
        Self::new(year, month, day)
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
