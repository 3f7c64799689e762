use advent_core::CalendarConfig;
use once_cell::sync::Lazy;

static CONFIG: Lazy<CalendarConfig> = Lazy::new(|| {
    parse_config(include_str!("../static/assets/data/config.json"))
});

fn parse_config(json: &str) -> CalendarConfig {
    CalendarConfig::from_json(json).unwrap_or_else(|err| {
        log::error!("Failed to parse calendar config, using defaults: {err}");
        CalendarConfig::default_config()
    })
}

/// Deployment settings bundled with the page.
#[must_use]
pub fn config() -> &'static CalendarConfig {
    &CONFIG
}
