use advent_core::{CalendarDate, Clock};

use crate::dom;

/// Reads the browser's local date.
///
/// A `?date=MM-DD` query parameter pins the date instead, which lets a page be
/// checked against any day of the season without touching the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn today(&self) -> CalendarDate {
        if let Some(raw) = dom::query_param("date") {
            match raw.parse::<CalendarDate>() {
                Ok(date) => return date,
                Err(err) => log::warn!("ignoring date override {raw:?}: {err}"),
            }
        }
        let now = js_sys::Date::new_0();
        CalendarDate::clamped(now.get_date(), now.get_month() + 1)
    }
}
