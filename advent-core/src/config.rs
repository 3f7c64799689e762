use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_BOUNCE_MS, DEFAULT_DOOR_STAGGER_MS, DEFAULT_SEASON_YEAR, DEFAULT_SHAKE_MS,
    DEFAULT_STORAGE_KEY,
};

/// Deployment settings for a calendar instance.
///
/// Every field has a serde default so a partial JSON document only overrides
/// what it names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarConfig {
    /// Key-value record that stores the opened set.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// Year shown next to the captured date.
    #[serde(default = "default_season_year")]
    pub season_year: i32,
    /// Entrance animation offset between consecutive doors.
    #[serde(default = "default_door_stagger_ms")]
    pub door_stagger_ms: u32,
    /// How long a locked door shakes after a rejected activation.
    #[serde(default = "default_shake_ms")]
    pub shake_ms: u32,
    /// How long a door bounces after a reveal.
    #[serde(default = "default_bounce_ms")]
    pub bounce_ms: u32,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

const fn default_season_year() -> i32 {
    DEFAULT_SEASON_YEAR
}

const fn default_door_stagger_ms() -> u32 {
    DEFAULT_DOOR_STAGGER_MS
}

const fn default_shake_ms() -> u32 {
    DEFAULT_SHAKE_MS
}

const fn default_bounce_ms() -> u32 {
    DEFAULT_BOUNCE_MS
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self::default_config()
    }
}

impl CalendarConfig {
    #[must_use]
    pub fn default_config() -> Self {
        Self {
            storage_key: default_storage_key(),
            season_year: DEFAULT_SEASON_YEAR,
            door_stagger_ms: DEFAULT_DOOR_STAGGER_MS,
            shake_ms: DEFAULT_SHAKE_MS,
            bounce_ms: DEFAULT_BOUNCE_MS,
        }
    }

    /// Parse a config document.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a field has the wrong type.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let cfg = CalendarConfig::from_json("{}").unwrap();
        assert_eq!(cfg, CalendarConfig::default_config());
        assert_eq!(cfg.storage_key, "adventCalendarOpened");
    }

    #[test]
    fn partial_document_overrides_named_fields() {
        let cfg = CalendarConfig::from_json(r#"{"storage_key":"alt","shake_ms":250}"#).unwrap();
        assert_eq!(cfg.storage_key, "alt");
        assert_eq!(cfg.shake_ms, 250);
        assert_eq!(cfg.bounce_ms, 600);
        assert_eq!(cfg.season_year, 2025);
    }

    #[test]
    fn wrong_field_type_is_rejected() {
        assert!(CalendarConfig::from_json(r#"{"season_year":"soon"}"#).is_err());
    }
}
