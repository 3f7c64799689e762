//! The persisted set of opened doors and its JSON record format.
//!
//! The stored record is a plain JSON array of day numbers, e.g. `[1,19]`.
//! Decoding is fail-open: anything that is not such an array loads as empty.

use serde::Serialize;
use std::collections::BTreeSet;

use crate::constants::DOOR_COUNT;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct OpenedSet(BTreeSet<u8>);

impl OpenedSet {
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Returns `true` when the day was not already opened.
    pub fn insert(&mut self, day: u8) -> bool {
        self.0.insert(day)
    }

    pub fn remove(&mut self, day: u8) -> bool {
        self.0.remove(&day)
    }

    #[must_use]
    pub fn contains(&self, day: u8) -> bool {
        self.0.contains(&day)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.iter().copied()
    }

    /// Serialized record, ascending day order.
    #[must_use]
    pub fn to_json(&self) -> String {
        let days: Vec<u8> = self.iter().collect();
        serde_json::to_string(&days).unwrap_or_else(|_| "[]".to_string())
    }

    /// Rebuild the set from a stored record.
    ///
    /// Missing records, malformed JSON and arrays holding anything other than
    /// integers all yield the empty set. Integers outside the calendar are dropped.
    #[must_use]
    pub fn decode(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::new();
        };
        let values: Vec<i64> = match serde_json::from_str(raw) {
            Ok(values) => values,
            Err(err) => {
                log::warn!("ignoring unreadable opened-door record: {err}");
                return Self::new();
            }
        };
        let mut set = Self::new();
        for value in values {
            match u8::try_from(value) {
                Ok(day) if (1..=DOOR_COUNT).contains(&day) => {
                    set.insert(day);
                }
                _ => log::warn!("dropping out-of-range day {value} from opened-door record"),
            }
        }
        set
    }
}

impl FromIterator<u8> for OpenedSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
