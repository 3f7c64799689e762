use advent_core::{CalendarDate, Clock};
use chrono::{Datelike, Local};

/// The machine's local date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> CalendarDate {
        let now = Local::now();
        CalendarDate::clamped(now.day(), now.month())
    }
}
