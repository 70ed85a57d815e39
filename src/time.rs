//! Naive time of day and timestamps (no zone attached).

use std::fmt;

use chrono::{NaiveDateTime, Timelike};

use crate::{
    CalendarDate, MAX_HOUR, MAX_MINUTE, MAX_SECOND, NANOS_PER_SECOND, ParseError, SECONDS_PER_DAY,
    SECONDS_PER_HOUR, SECONDS_PER_MINUTE,
};

/// Wall-clock time: hour 0-23, minute 0-59, second 0-59 and sub-second nanoseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
    second: u8,
    nanosecond: u32,
}

impl TimeOfDay {
    /// # Errors
    /// Returns `ParseError::InvalidTime` if any field is out of range.
    pub const fn new(hour: u8, minute: u8, second: u8) -> Result<Self, ParseError> {
        if hour > MAX_HOUR || minute > MAX_MINUTE || second > MAX_SECOND {
            return Err(ParseError::InvalidTime {
                hour,
                minute,
                second,
            });
        }
        Ok(Self {
            hour,
            minute,
            second,
            nanosecond: 0,
        })
    }

    /// Adds sub-second precision.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidNanosecond` unless `nanosecond < 1_000_000_000`.
    pub const fn with_nanosecond(self, nanosecond: u32) -> Result<Self, ParseError> {
        if nanosecond >= NANOS_PER_SECOND {
            return Err(ParseError::InvalidNanosecond(nanosecond));
        }
        Ok(Self { nanosecond, ..self })
    }

    pub const fn hour(&self) -> u8 {
        self.hour
    }

    pub const fn minute(&self) -> u8 {
        self.minute
    }

    pub const fn second(&self) -> u8 {
        self.second
    }

    pub const fn nanosecond(&self) -> u32 {
        self.nanosecond
    }

    const fn seconds_from_midnight(&self) -> i64 {
        self.hour as i64 * SECONDS_PER_HOUR
            + self.minute as i64 * SECONDS_PER_MINUTE
            + self.second as i64
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)?;
        if self.nanosecond > 0 {
            write!(f, ".{:09}", self.nanosecond)?;
        }
        Ok(())
    }
}

/// A calendar date plus a time of day. Field order makes the derived
/// ordering chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp {
    date: CalendarDate,
    time: TimeOfDay,
}

impl Timestamp {
    pub const fn new(date: CalendarDate, time: TimeOfDay) -> Self {
        Self { date, time }
    }

    pub const fn date(&self) -> CalendarDate {
        self.date
    }

    pub const fn time(&self) -> TimeOfDay {
        self.time
    }

    /// Whole seconds since 1970-01-01T00:00:00 on the same naive clock.
    pub(crate) const fn epoch_seconds(&self) -> i64 {
        self.date.epoch_day() * SECONDS_PER_DAY + self.time.seconds_from_midnight()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.date, self.time)
    }
}

impl TryFrom<NaiveDateTime> for Timestamp {
    type Error = ParseError;

    fn try_from(value: NaiveDateTime) -> Result<Self, Self::Error> {
        let date = CalendarDate::try_from(value.date())?;
        // Timelike fields are bounded by chrono: hour < 24, minute/second < 60
        let [hour, minute, second] = [value.hour(), value.minute(), value.second()]
            .map(|field| u8::try_from(field).unwrap_or(u8::MAX));
        let time = TimeOfDay::new(hour, minute, second)?.with_nanosecond(value.nanosecond())?;
        Ok(Self::new(date, time))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date, ts};
    use chrono::NaiveDate;

    #[test]
    fn test_time_bounds() {
        assert!(TimeOfDay::new(23, 59, 59).is_ok());
        assert!(matches!(
            TimeOfDay::new(24, 0, 0),
            Err(ParseError::InvalidTime { hour: 24, .. })
        ));
        assert!(TimeOfDay::new(0, 60, 0).is_err());
        assert!(TimeOfDay::new(0, 0, 60).is_err());
    }

    #[test]
    fn test_nanosecond_bounds() {
        let t = TimeOfDay::new(1, 2, 3).unwrap();
        assert_eq!(t.with_nanosecond(999_999_999).unwrap().nanosecond(), 999_999_999);
        assert!(matches!(
            t.with_nanosecond(1_000_000_000),
            Err(ParseError::InvalidNanosecond(1_000_000_000))
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(ts(2020, 1, 1, 2, 30, 0).to_string(), "01/01/2020 02:30:00");
        let t = TimeOfDay::new(8, 5, 9)
            .unwrap()
            .with_nanosecond(500_000_000)
            .unwrap();
        assert_eq!(t.to_string(), "08:05:09.500000000");
    }

    #[test]
    fn test_ordering_is_chronological() {
        let a = ts(2019, 12, 31, 23, 59, 59);
        let b = ts(2020, 1, 1, 0, 0, 0);
        let c = ts(2020, 1, 1, 0, 0, 1);
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn test_epoch_seconds() {
        assert_eq!(ts(1970, 1, 1, 0, 0, 0).epoch_seconds(), 0);
        assert_eq!(ts(1970, 1, 2, 0, 0, 1).epoch_seconds(), 86_401);
        assert_eq!(ts(1969, 12, 31, 23, 59, 59).epoch_seconds(), -1);
        assert_eq!(ts(2020, 1, 1, 0, 0, 0).epoch_seconds(), 1_577_836_800);
    }

    #[test]
    fn test_try_from_naive_date_time() {
        let naive = NaiveDate::from_ymd_opt(2017, 11, 13)
            .unwrap()
            .and_hms_nano_opt(14, 7, 30, 250)
            .unwrap();
        let stamp = Timestamp::try_from(naive).unwrap();
        assert_eq!(stamp.date(), date(2017, 11, 13));
        assert_eq!(stamp.time().hour(), 14);
        assert_eq!(stamp.time().minute(), 7);
        assert_eq!(stamp.time().second(), 30);
        assert_eq!(stamp.time().nanosecond(), 250);
    }

    #[test]
    fn test_try_from_naive_out_of_range_year() {
        let naive = NaiveDate::from_ymd_opt(10_000, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert!(matches!(
            Timestamp::try_from(naive),
            Err(ParseError::InvalidYear(10_000))
        ));
    }
}
