use serde::{Deserialize, Serialize};

use crate::constants::{DOOR_COUNT, VIDEO_EXTENSIONS};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog JSON is malformed: {0}")]
    Json(String),
    #[error("catalog holds {found} days, expected {expected}")]
    Count { found: usize, expected: usize },
    #[error("day {0} is outside 1..=24")]
    OutOfRange(u8),
    #[error("day {0} appears more than once")]
    Duplicate(u8),
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RewardKind {
    Image,
    Video,
}

impl RewardKind {
    /// Classify a reward source by its file suffix, ignoring query and fragment.
    #[must_use]
    pub fn from_src(src: &str) -> Self {
        let path = src.split(['?', '#']).next().unwrap_or(src);
        let file = path.rsplit('/').next().unwrap_or(path);
        let is_video = file.rsplit_once('.').is_some_and(|(_, ext)| {
            VIDEO_EXTENSIONS
                .iter()
                .any(|candidate| candidate.eq_ignore_ascii_case(ext))
        });
        if is_video { Self::Video } else { Self::Image }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Reward {
    pub kind: RewardKind,
    pub src: String,
}

impl Reward {
    #[must_use]
    pub fn new(src: impl Into<String>) -> Self {
        let src = src.into();
        Self {
            kind: RewardKind::from_src(&src),
            src,
        }
    }
}

/// One calendar day and what it reveals.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DayRecord {
    pub day: u8,
    pub reward: Reward,
    pub text: String,
}

// Authoring shape: the reward is a bare path, classified on load.
#[derive(Debug, Deserialize)]
struct DayEntry {
    day: u8,
    reward: String,
    text: String,
}

impl From<DayEntry> for DayRecord {
    fn from(entry: DayEntry) -> Self {
        Self {
            day: entry.day,
            reward: Reward::new(entry.reward),
            text: entry.text,
        }
    }
}

/// The fixed, ordered set of 24 days. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    // Dense: `days[n - 1].day == n`.
    days: Vec<DayRecord>,
}

impl Catalog {
    /// Load the bundled calendar content.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled data does not describe exactly days 1 through 24.
    pub fn load() -> Result<Self, CatalogError> {
        Self::from_json(include_str!("../data/calendar.json"))
    }

    /// Parse an authored catalog: a JSON array of `{ day, reward, text }` objects.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the days are not exactly 1 through 24.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let entries: Vec<DayEntry> = serde_json::from_str(json)?;
        Self::from_records(entries.into_iter().map(DayRecord::from).collect())
    }

    /// Build a catalog from records in any order.
    ///
    /// # Errors
    ///
    /// Returns an error unless the records cover each day 1 through 24 exactly once.
    pub fn from_records(mut records: Vec<DayRecord>) -> Result<Self, CatalogError> {
        let expected = usize::from(DOOR_COUNT);
        if records.len() != expected {
            return Err(CatalogError::Count {
                found: records.len(),
                expected,
            });
        }
        if let Some(bad) = records
            .iter()
            .find(|r| r.day == 0 || r.day > DOOR_COUNT)
        {
            return Err(CatalogError::OutOfRange(bad.day));
        }
        records.sort_by_key(|r| r.day);
        // With the count and range fixed, any gap implies a duplicate.
        if let Some(pair) = records.windows(2).find(|pair| pair[0].day == pair[1].day) {
            return Err(CatalogError::Duplicate(pair[0].day));
        }
        Ok(Self { days: records })
    }

    #[must_use]
    pub fn by_day(&self, day: u8) -> Option<&DayRecord> {
        let idx = usize::from(day).checked_sub(1)?;
        self.days.get(idx)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DayRecord> {
        self.days.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a DayRecord;
    type IntoIter = std::slice::Iter<'a, DayRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(day: u8) -> DayRecord {
        DayRecord {
            day,
            reward: Reward::new(format!("img/day{day}.png")),
            text: format!("Day {day}"),
        }
    }

    #[test]
    fn bundled_catalog_is_dense() {
        let catalog = Catalog::load().unwrap();
        assert_eq!(catalog.len(), 24);
        for (idx, rec) in catalog.iter().enumerate() {
            assert_eq!(usize::from(rec.day), idx + 1);
        }
        assert_eq!(catalog.by_day(1).unwrap().reward.src, "img/orangeade.png");
        assert!(catalog.by_day(0).is_none());
        assert!(catalog.by_day(25).is_none());
    }

    #[test]
    fn records_are_sorted_by_day() {
        let records = (1..=24).rev().map(record).collect();
        let catalog = Catalog::from_records(records).unwrap();
        assert_eq!(catalog.by_day(7).unwrap().text, "Day 7");
        assert_eq!(catalog.iter().next().unwrap().day, 1);
    }

    #[test]
    fn rejects_wrong_count() {
        let records = (1..=23).map(record).collect();
        assert_eq!(
            Catalog::from_records(records),
            Err(CatalogError::Count {
                found: 23,
                expected: 24
            })
        );
    }

    #[test]
    fn rejects_duplicates_and_out_of_range_days() {
        let mut dup: Vec<_> = (1..=24).map(record).collect();
        dup[23] = record(5);
        assert_eq!(Catalog::from_records(dup), Err(CatalogError::Duplicate(5)));

        let mut wide: Vec<_> = (1..=24).map(record).collect();
        wide[0] = record(25);
        assert_eq!(Catalog::from_records(wide), Err(CatalogError::OutOfRange(25)));
    }

    #[test]
    fn malformed_json_is_a_catalog_error() {
        assert!(matches!(
            Catalog::from_json("[{\"day\": 1}]"),
            Err(CatalogError::Json(_))
        ));
    }

    #[test]
    fn reward_kind_follows_suffix() {
        assert_eq!(RewardKind::from_src("img/hug.png"), RewardKind::Image);
        assert_eq!(RewardKind::from_src("media/snow.MP4"), RewardKind::Video);
        assert_eq!(RewardKind::from_src("clips/a.webm?autoplay=1"), RewardKind::Video);
        assert_eq!(
            RewardKind::from_src("https://placehold.co/150x100/7F11E8/white?text=Day+11"),
            RewardKind::Image
        );
        assert_eq!(RewardKind::from_src("https://cdn.example/v.mp4/poster"), RewardKind::Image);
        assert_eq!(RewardKind::from_src("noext"), RewardKind::Image);
    }
}
