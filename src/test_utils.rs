//! Value builders shared by unit tests.

use crate::{CalendarDate, Timestamp};

pub fn date(year: u16, month: u8, day: u8) -> CalendarDate {
    CalendarDate::new(year, month, day).expect("test date must be valid")
}

pub fn ts(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Timestamp {
    date(year, month, day)
        .and_hms(hour, minute, second)
        .expect("test time must be valid")
}
