//! Signed elapsed time between two timestamps.
//!
//! All counts truncate toward zero. The hours and leftover minutes are
//! computed once here, so the string and numeric renderings always agree.

use std::fmt;

use crate::{MINUTES_PER_HOUR, SECONDS_PER_HOUR, SECONDS_PER_MINUTE, Timestamp};

/// Hundredths in one unit, for the `H.ff` rendering.
const HUNDREDTHS: i64 = 100;

/// Elapsed time from a first timestamp to a second one, negative when the
/// second precedes the first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ElapsedTime {
    /// Whole seconds, truncated toward zero.
    seconds: i64,
}

impl ElapsedTime {
    pub fn between(first: &Timestamp, second: &Timestamp) -> Self {
        let mut seconds = second.epoch_seconds() - first.epoch_seconds();
        let nanos = i64::from(second.time().nanosecond()) - i64::from(first.time().nanosecond());
        // Borrow a second when the sub-second part points the other way, so
        // whole seconds truncate toward zero
        if seconds > 0 && nanos < 0 {
            seconds -= 1;
        } else if seconds < 0 && nanos > 0 {
            seconds += 1;
        }
        Self { seconds }
    }

    /// Whole elapsed hours.
    pub const fn hours(&self) -> i64 {
        self.seconds / SECONDS_PER_HOUR
    }

    /// Whole elapsed minutes.
    pub const fn total_minutes(&self) -> i64 {
        self.seconds / SECONDS_PER_MINUTE
    }

    /// Minutes left over after the whole hours, taken from the total minutes.
    /// Carries the sign of the span.
    pub const fn minutes(&self) -> i64 {
        self.total_minutes() % MINUTES_PER_HOUR
    }

    pub const fn is_negative(&self) -> bool {
        self.seconds < 0
    }

    /// Renders as the number `H.ff`, where `ff` is the leftover minutes as a
    /// fraction of an hour rounded to two places: 2h30m is 2.50, 2h20m is
    /// 2.33, 2h1m is 2.02. A negative span yields a negative number.
    #[allow(clippy::cast_precision_loss)]
    pub const fn to_hours_dot_minutes(&self) -> f64 {
        // No minute count lands on a half-hundredth, so rounding half up is exact
        let fraction = (self.minutes().abs() * HUNDREDTHS + MINUTES_PER_HOUR / 2) / MINUTES_PER_HOUR;
        let magnitude = self.hours().abs() * HUNDREDTHS + fraction;
        let signed = if self.is_negative() {
            -magnitude
        } else {
            magnitude
        };
        signed as f64 / HUNDREDTHS as f64
    }
}

/// `<H>hr(s). <M>min(s)`
impl fmt::Display for ElapsedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}hr(s). {}min(s)", self.hours(), self.minutes())
    }
}
