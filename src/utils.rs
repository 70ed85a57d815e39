//! Stateless conversion and arithmetic helpers.
//!
//! Every argument that may be absent is taken as `impl Into<Option<_>>`, so
//! callers pass a value directly or `None`; an absent argument fails with
//! [`DateTimeError::InvalidArgument`] before any work is done.

use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{DateTime, Local, TimeZone, Utc};

use crate::{CalendarDate, DateTimeError, ElapsedTime, FormatPattern, Separator, Timestamp};

fn require<T>(value: Option<T>, name: &'static str) -> Result<T, DateTimeError> {
    value.ok_or_else(|| {
        log::trace!("required argument `{name}` was absent");
        DateTimeError::InvalidArgument(name)
    })
}

/// Formats `date` as `MM/dd/yyyy`.
///
/// # Errors
/// `InvalidArgument` if `date` is absent.
pub fn date_to_string<'a>(
    date: impl Into<Option<&'a CalendarDate>>,
) -> Result<String, DateTimeError> {
    date_to_string_with(date, Separator::default())
}

/// Formats `date` as `MM<sep>dd<sep>yyyy`. The separator may be a catalog
/// member, a `char`, or any string (used verbatim, even when empty).
///
/// # Errors
/// `InvalidArgument` if `date` is absent.
pub fn date_to_string_with<'a>(
    date: impl Into<Option<&'a CalendarDate>>,
    separator: impl Into<Separator>,
) -> Result<String, DateTimeError> {
    let date = require(date.into(), "date")?;
    Ok(FormatPattern::with_separator(&separator.into()).format(date))
}

/// Parses `text` under a template such as `"MM-dd-yyyy"`.
///
/// # Errors
/// `InvalidArgument` if either argument is absent, `ParseFailure` if the
/// template is malformed or the text does not name a valid date under it.
pub fn to_local_date<'a, 'b>(
    text: impl Into<Option<&'a str>>,
    template: impl Into<Option<&'b str>>,
) -> Result<CalendarDate, DateTimeError> {
    let text = require(text.into(), "text")?;
    let template = require(template.into(), "template")?;
    let pattern = FormatPattern::new(template).inspect_err(|err| {
        log::trace!("rejected template {template:?}: {err}");
    })?;
    to_local_date_with(text, &pattern)
}

/// Parses `text` under an already-built pattern.
///
/// # Errors
/// `InvalidArgument` if either argument is absent, `ParseFailure` if the text
/// does not name a valid date under the pattern.
pub fn to_local_date_with<'a, 'b>(
    text: impl Into<Option<&'a str>>,
    pattern: impl Into<Option<&'b FormatPattern>>,
) -> Result<CalendarDate, DateTimeError> {
    let text = require(text.into(), "text")?;
    let pattern = require(pattern.into(), "pattern")?;
    pattern.parse(text).map_err(|err| {
        log::trace!("could not parse {text:?} as {pattern}: {err}");
        DateTimeError::from(err)
    })
}

/// The calendar date `instant` falls on in `zone`, time of day discarded.
///
/// # Errors
/// `InvalidArgument` if `instant` is absent or beyond chrono's range,
/// `ParseFailure` if the resulting year is outside 1..=9999.
pub fn instant_to_date<Tz: TimeZone>(
    instant: impl Into<Option<SystemTime>>,
    zone: &Tz,
) -> Result<CalendarDate, DateTimeError> {
    let instant = require(instant.into(), "instant")?;
    let utc = to_utc(instant).ok_or_else(|| {
        log::trace!("instant {instant:?} is outside the representable range");
        DateTimeError::InvalidArgument("instant")
    })?;
    let local = utc.with_timezone(zone).date_naive();
    Ok(CalendarDate::try_from(local)?)
}

/// Like [`instant_to_date`], in the process's default time zone
/// ([`chrono::Local`]). The result depends on the host's zone settings.
///
/// # Errors
/// See [`instant_to_date`].
pub fn instant_to_local_date(
    instant: impl Into<Option<SystemTime>>,
) -> Result<CalendarDate, DateTimeError> {
    instant_to_date(instant, &Local)
}

fn to_utc(instant: SystemTime) -> Option<DateTime<Utc>> {
    let (secs, nanos) = match instant.duration_since(UNIX_EPOCH) {
        Ok(after) => (i64::try_from(after.as_secs()).ok()?, after.subsec_nanos()),
        Err(err) => {
            let before = err.duration();
            let secs = -i64::try_from(before.as_secs()).ok()?;
            match before.subsec_nanos() {
                0 => (secs, 0),
                n => (secs - 1, crate::NANOS_PER_SECOND - n),
            }
        }
    };
    DateTime::from_timestamp(secs, nanos)
}

/// Days remaining in the year of `date`; 0 on December 31st.
///
/// # Errors
/// `InvalidArgument` if `date` is absent.
pub fn days_left_in_year<'a>(
    date: impl Into<Option<&'a CalendarDate>>,
) -> Result<u16, DateTimeError> {
    Ok(require(date.into(), "date")?.days_left_in_year())
}

/// Parses `text` under a template such as `"MM-dd-yyyy"`, then counts the
/// days remaining in its year.
///
/// # Errors
/// `InvalidArgument` if either argument is absent, `ParseFailure` from parsing.
pub fn days_left_in_year_str<'a, 'b>(
    text: impl Into<Option<&'a str>>,
    template: impl Into<Option<&'b str>>,
) -> Result<u16, DateTimeError> {
    to_local_date(text, template).map(|date| date.days_left_in_year())
}

/// Parses `text` under an already-built pattern, then counts the days
/// remaining in its year.
///
/// # Errors
/// `InvalidArgument` if either argument is absent, `ParseFailure` from parsing.
pub fn days_left_in_year_str_with<'a, 'b>(
    text: impl Into<Option<&'a str>>,
    pattern: impl Into<Option<&'b FormatPattern>>,
) -> Result<u16, DateTimeError> {
    to_local_date_with(text, pattern).map(|date| date.days_left_in_year())
}

/// Elapsed time from `first` to `second`.
///
/// # Errors
/// `InvalidArgument` if either timestamp is absent.
pub fn elapsed<'a>(
    first: impl Into<Option<&'a Timestamp>>,
    second: impl Into<Option<&'a Timestamp>>,
) -> Result<ElapsedTime, DateTimeError> {
    let first = require(first.into(), "first")?;
    let second = require(second.into(), "second")?;
    Ok(ElapsedTime::between(first, second))
}

/// Whole hours from `first` to `second`, truncated toward zero.
///
/// # Errors
/// `InvalidArgument` if either timestamp is absent.
pub fn elapsed_hours<'a>(
    first: impl Into<Option<&'a Timestamp>>,
    second: impl Into<Option<&'a Timestamp>>,
) -> Result<i64, DateTimeError> {
    elapsed(first, second).map(|e| e.hours())
}

/// Whole minutes from `first` to `second`, truncated toward zero.
///
/// # Errors
/// `InvalidArgument` if either timestamp is absent.
pub fn elapsed_minutes<'a>(
    first: impl Into<Option<&'a Timestamp>>,
    second: impl Into<Option<&'a Timestamp>>,
) -> Result<i64, DateTimeError> {
    elapsed(first, second).map(|e| e.total_minutes())
}

/// Whole hours, then the leftover minutes as two decimal places of an hour:
/// 2h30m is `2.50`. See [`ElapsedTime::to_hours_dot_minutes`].
///
/// # Errors
/// `InvalidArgument` if either timestamp is absent.
pub fn elapsed_hours_and_minutes_as_f64<'a>(
    first: impl Into<Option<&'a Timestamp>>,
    second: impl Into<Option<&'a Timestamp>>,
) -> Result<f64, DateTimeError> {
    elapsed(first, second).map(|e| e.to_hours_dot_minutes())
}

/// `"<H>hr(s). <M>min(s)"`, e.g. `"2hr(s). 30min(s)"`.
///
/// # Errors
/// `InvalidArgument` if either timestamp is absent.
pub fn elapsed_hours_and_minutes_as_string<'a>(
    first: impl Into<Option<&'a Timestamp>>,
    second: impl Into<Option<&'a Timestamp>>,
) -> Result<String, DateTimeError> {
    elapsed(first, second).map(|e| e.to_string())
}
