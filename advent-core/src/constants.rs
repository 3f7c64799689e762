//! Fixed calendar shape and persistence identifiers.
//!
//! The door count and unlock month are part of the calendar's contract, not
//! tunables, so they live here rather than in the JSON config.

/// Number of doors in the calendar; the catalog must hold exactly this many days.
pub const DOOR_COUNT: u8 = 24;

/// The only month in which doors ever unlock.
pub const UNLOCK_MONTH: u8 = 12;

/// Name of the key-value record holding the opened set.
pub const DEFAULT_STORAGE_KEY: &str = "adventCalendarOpened";

/// Reward file suffixes that are played as video rather than shown as an image.
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "webm", "ogv", "mov"];

// Presentation defaults ----------------------------------------------------
pub(crate) const DEFAULT_SEASON_YEAR: i32 = 2025;
pub(crate) const DEFAULT_DOOR_STAGGER_MS: u32 = 50;
pub(crate) const DEFAULT_SHAKE_MS: u32 = 500;
pub(crate) const DEFAULT_BOUNCE_MS: u32 = 600;
