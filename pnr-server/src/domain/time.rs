//! Date and time handling for GDS segment lines.
//!
//! GDS terminals print dates as a two-digit day plus a three-letter month
//! ("15JAN") with no year, and times as four bare digits in 24-hour form
//! ("0745"). This module provides types for those tokens and for turning
//! them into timezone-aware instants once a year and an airport timezone
//! are known.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone};
use chrono_tz::Tz;
use serde::Deserialize;

/// Month abbreviations in GDS order (index 0 is January).
const MONTHS: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

/// Error returned when parsing an invalid date or time token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A year-less GDS date such as "15JAN".
///
/// The year is supplied later by the caller, since segment lines never
/// carry one. A `DayMonth` is only checked for a plausible day (1-31);
/// whether the day exists in a given month and year is decided by
/// [`DayMonth::in_year`].
///
/// # Examples
///
/// ```
/// use pnr_server::domain::DayMonth;
///
/// let dm = DayMonth::parse("15JAN").unwrap();
/// assert_eq!(dm.day(), 15);
/// assert_eq!(dm.month0(), 0);
///
/// assert!(DayMonth::parse("32JAN").is_err());
/// assert!(DayMonth::parse("15XYZ").is_err());
/// assert!(DayMonth::parse("5JAN").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayMonth {
    day: u32,
    month0: u32,
}

impl DayMonth {
    /// Parse a "DDMON" token. The month must be uppercase.
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        let bytes = s.as_bytes();
        if bytes.len() != 5 {
            return Err(TimeError::new("expected DDMON format"));
        }

        let day = parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::new("invalid day"))?;
        if !(1..=31).contains(&day) {
            return Err(TimeError::new("day must be 1-31"));
        }

        let month0 = MONTHS
            .iter()
            .position(|m| m.as_bytes() == &bytes[2..5])
            .ok_or_else(|| TimeError::new("unknown month abbreviation"))?;

        Ok(Self {
            day,
            month0: month0 as u32,
        })
    }

    /// Day of month (1-31).
    pub fn day(&self) -> u32 {
        self.day
    }

    /// Zero-based month index (January is 0, December is 11).
    pub fn month0(&self) -> u32 {
        self.month0
    }

    /// Instantiate this day and month in a concrete year.
    ///
    /// Returns `None` when the day does not exist in that month and year
    /// (for example "29FEB" outside a leap year).
    pub fn in_year(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month0 + 1, self.day)
    }
}

impl fmt::Debug for DayMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DayMonth({})", self)
    }
}

impl fmt::Display for DayMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}{}", self.day, MONTHS[self.month0 as usize])
    }
}

/// Parse a four-digit 24-hour time token ("0745", "2359").
///
/// # Examples
///
/// ```
/// use pnr_server::domain::parse_hhmm;
///
/// assert!(parse_hhmm("0000").is_ok());
/// assert!(parse_hhmm("2359").is_ok());
/// assert!(parse_hhmm("2400").is_err());
/// assert!(parse_hhmm("12:30").is_err());
/// ```
pub fn parse_hhmm(s: &str) -> Result<NaiveTime, TimeError> {
    let bytes = s.as_bytes();
    if bytes.len() != 4 {
        return Err(TimeError::new("expected HHMM format"));
    }

    let hour = parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::new("invalid hour digits"))?;
    if hour > 23 {
        return Err(TimeError::new("hour must be 0-23"));
    }

    let minute =
        parse_two_digits(&bytes[2..4]).ok_or_else(|| TimeError::new("invalid minute digits"))?;
    if minute > 59 {
        return Err(TimeError::new("minute must be 0-59"));
    }

    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| TimeError::new("invalid time"))
}

/// Parse two ASCII digit bytes into a u32.
fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some(d1 * 10 + d2)
}

/// Resolve a timezone name, falling back to UTC for unknown names.
pub fn resolve_timezone(name: &str) -> Tz {
    name.parse::<Tz>().unwrap_or(Tz::UTC)
}

/// Combine a wall-clock date and time in `tz` into an instant.
///
/// Ambiguous local times (DST fall-back) take the earlier instant. Times
/// that do not exist locally (DST spring-forward gap) yield `None`.
pub fn localize(date: NaiveDate, time: NaiveTime, tz: Tz) -> Option<DateTime<Tz>> {
    tz.from_local_datetime(&date.and_time(time)).earliest()
}

/// Format a minute count as "HHh MMm" with two-digit padding.
///
/// # Examples
///
/// ```
/// use pnr_server::domain::format_hours_minutes;
///
/// assert_eq!(format_hours_minutes(185), "03h 05m");
/// assert_eq!(format_hours_minutes(1500), "25h 00m");
/// ```
pub fn format_hours_minutes(minutes: i64) -> String {
    format!("{:02}h {:02}m", minutes / 60, minutes % 60)
}

/// Format a departure date for display ("Thursday, 15 Jan 2026").
pub fn format_long_date(instant: &DateTime<Tz>) -> String {
    instant.format("%A, %d %b %Y").to_string()
}

/// Format a local calendar date in GDS style ("16JAN").
pub fn format_day_month(instant: &DateTime<Tz>) -> String {
    instant.format("%d%b").to_string().to_uppercase()
}

/// Clock style for rendered times.
///
/// Deserializes from the strings `"12h"` and `"24h"`; any other value is
/// treated as 12-hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum TimeFormat {
    #[default]
    TwelveHour,
    TwentyFourHour,
}

impl From<String> for TimeFormat {
    fn from(s: String) -> Self {
        if s.trim().eq_ignore_ascii_case("24h") {
            TimeFormat::TwentyFourHour
        } else {
            TimeFormat::TwelveHour
        }
    }
}

impl TimeFormat {
    /// Render the local wall-clock time of an instant.
    pub fn format(&self, instant: &DateTime<Tz>) -> String {
        match self {
            TimeFormat::TwelveHour => instant.format("%I:%M %p").to_string(),
            TimeFormat::TwentyFourHour => instant.format("%H:%M").to_string(),
        }
    }

    /// Render an instant that may not exist; missing instants render as "".
    pub fn format_opt(&self, instant: Option<DateTime<Tz>>) -> String {
        instant.as_ref().map(|i| self.format(i)).unwrap_or_default()
    }
}
