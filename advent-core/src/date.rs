//! Captured calendar date and the clock collaborator.
//!
//! The model reads the clock exactly once at construction, so a page left open
//! across midnight keeps the gate it loaded with.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    #[error("month {0} is outside 1..=12")]
    Month(u8),
    #[error("day {0} is outside 1..=31")]
    Day(u8),
    #[error("expected a date formatted as MM-DD, got {0:?}")]
    Format(String),
}

/// Day-of-month and month, captured once per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CalendarDate {
    day: u8,
    month: u8,
}

impl CalendarDate {
    /// # Errors
    ///
    /// Returns [`DateError`] when the month is outside `1..=12` or the day outside `1..=31`.
    pub const fn new(day: u8, month: u8) -> Result<Self, DateError> {
        if month < 1 || month > 12 {
            return Err(DateError::Month(month));
        }
        if day < 1 || day > 31 {
            return Err(DateError::Day(day));
        }
        Ok(Self { day, month })
    }

    /// Build a date from raw clock readings, pulling out-of-range parts to the
    /// nearest valid value.
    #[must_use]
    pub fn clamped(day: u32, month: u32) -> Self {
        let clamp = |value: u32, max: u8| u8::try_from(value.clamp(1, u32::from(max))).unwrap_or(1);
        Self {
            day: clamp(day, 31),
            month: clamp(month, 12),
        }
    }

    #[must_use]
    pub const fn day(self) -> u8 {
        self.day
    }

    #[must_use]
    pub const fn month(self) -> u8 {
        self.month
    }

    /// English rendering such as `December 19`.
    #[must_use]
    pub fn label(self) -> String {
        let month = month_name(self.month).unwrap_or("Unknown");
        format!("{month} {}", self.day)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}

impl FromStr for CalendarDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let format_err = || DateError::Format(trimmed.to_string());
        let (month, day) = trimmed.split_once('-').ok_or_else(format_err)?;
        let month = month.parse::<u8>().map_err(|_| format_err())?;
        let day = day.parse::<u8>().map_err(|_| format_err())?;
        Self::new(day, month)
    }
}

/// Name of a 1-based month from the fixed English table.
#[must_use]
pub fn month_name(month: u8) -> Option<&'static str> {
    usize::from(month)
        .checked_sub(1)
        .and_then(|idx| MONTH_NAMES.get(idx).copied())
}

/// Source of the current date.
pub trait Clock {
    fn today(&self) -> CalendarDate;
}

/// Clock pinned to a single date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub CalendarDate);

impl Clock for FixedClock {
    fn today(&self) -> CalendarDate {
        self.0
    }
}

impl<F> Clock for F
where
    F: Fn() -> CalendarDate,
{
    fn today(&self) -> CalendarDate {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_parts() {
        assert_eq!(CalendarDate::new(1, 0), Err(DateError::Month(0)));
        assert_eq!(CalendarDate::new(1, 13), Err(DateError::Month(13)));
        assert_eq!(CalendarDate::new(0, 12), Err(DateError::Day(0)));
        assert_eq!(CalendarDate::new(32, 12), Err(DateError::Day(32)));
    }

    #[test]
    fn clamps_raw_clock_readings() {
        assert_eq!(CalendarDate::clamped(19, 12), CalendarDate::new(19, 12).unwrap());
        assert_eq!(CalendarDate::clamped(0, 0), CalendarDate::new(1, 1).unwrap());
        assert_eq!(CalendarDate::clamped(40, 99), CalendarDate::new(31, 12).unwrap());
    }

    #[test]
    fn parses_month_day_strings() {
        let date: CalendarDate = "12-19".parse().unwrap();
        assert_eq!(date.day(), 19);
        assert_eq!(date.month(), 12);
        assert_eq!(date.to_string(), "12-19");

        let padded: CalendarDate = " 01-05 ".parse().unwrap();
        assert_eq!(padded, CalendarDate::new(5, 1).unwrap());
    }

    #[test]
    fn rejects_malformed_strings() {
        assert!(matches!("1219".parse::<CalendarDate>(), Err(DateError::Format(_))));
        assert!(matches!("12-xx".parse::<CalendarDate>(), Err(DateError::Format(_))));
        assert_eq!("13-01".parse::<CalendarDate>(), Err(DateError::Month(13)));
    }

    #[test]
    fn labels_use_month_table() {
        assert_eq!(CalendarDate::new(19, 12).unwrap().label(), "December 19");
        assert_eq!(CalendarDate::new(1, 1).unwrap().label(), "January 1");
        assert_eq!(month_name(0), None);
        assert_eq!(month_name(13), None);
    }

    #[test]
    fn closures_act_as_clocks() {
        let date = CalendarDate::new(3, 12).unwrap();
        let clock = move || date;
        assert_eq!(clock.today(), date);
        assert_eq!(FixedClock(date).today(), date);
    }
}
