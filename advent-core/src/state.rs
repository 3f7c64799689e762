//! Door unlock/open state model.
//!
//! `AdventCalendar` owns the catalog, the date captured at construction, and the
//! opened set. Every mutation writes the full opened set back to the store before
//! returning; a failed write rolls the in-memory change back.
//!
//! Two tabs on the same profile each hold their own copy of the opened set and
//! the later write wins. No merge is attempted.

use serde::Serialize;
use std::mem;

use crate::catalog::{Catalog, DayRecord};
use crate::config::CalendarConfig;
use crate::constants::{DEFAULT_STORAGE_KEY, DOOR_COUNT, UNLOCK_MONTH};
use crate::date::{CalendarDate, Clock};
use crate::opened::OpenedSet;
use crate::storage::KeyValueStore;

/// Whether door `day` is still date-gated on `today`.
///
/// Only December unlocks anything, and door `n` opens on December `n`.
#[must_use]
pub const fn is_locked_on(today: CalendarDate, day: u8) -> bool {
    today.month() != UNLOCK_MONTH || today.day() < day
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    Locked,
}

/// Outcome of activating a door. A locked door is an expected rejection, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    Revealed {
        record: DayRecord,
        /// `false` when the door had been opened before; the reveal is replayed.
        newly_opened: bool,
    },
    Rejected(RejectReason),
}

impl Activation {
    #[must_use]
    pub const fn is_revealed(&self) -> bool {
        matches!(self, Self::Revealed { .. })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CalendarError {
    #[error("day {0} is not in the catalog")]
    UnknownDay(u8),
    #[error("failed to persist opened doors: {0}")]
    Persist(#[source] Box<dyn std::error::Error + Send + Sync>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub unlocked_count: usize,
    pub opened_count: usize,
    /// Share of all doors opened, rounded half-up to a whole percent.
    pub percent_opened: u8,
}

/// What the renderer needs for one door.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DoorState {
    pub day: u8,
    pub locked: bool,
    pub opened: bool,
}

impl DoorState {
    /// An opened door only renders open while it is also unlocked.
    #[must_use]
    pub const fn shows_open(self) -> bool {
        self.opened && !self.locked
    }
}

/// Summary suitable for logging or reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarStatus {
    pub today: String,
    pub unlocked_doors: usize,
    pub opened_doors: usize,
    pub progress: u8,
}

pub struct AdventCalendar<S>
where
    S: KeyValueStore,
{
    catalog: Catalog,
    today: CalendarDate,
    opened: OpenedSet,
    store: S,
    storage_key: String,
}

impl<S> AdventCalendar<S>
where
    S: KeyValueStore,
{
    /// Build a model, reading the clock once and loading the stored opened set.
    ///
    /// A missing or unreadable record starts the calendar empty.
    pub fn new<C>(catalog: Catalog, clock: &C, store: S) -> Self
    where
        C: Clock + ?Sized,
    {
        Self::with_storage_key(catalog, clock, store, DEFAULT_STORAGE_KEY)
    }

    /// Like [`AdventCalendar::new`], persisting under `config.storage_key`.
    pub fn with_config<C>(catalog: Catalog, clock: &C, store: S, config: &CalendarConfig) -> Self
    where
        C: Clock + ?Sized,
    {
        Self::with_storage_key(catalog, clock, store, &config.storage_key)
    }

    fn with_storage_key<C>(catalog: Catalog, clock: &C, store: S, storage_key: &str) -> Self
    where
        C: Clock + ?Sized,
    {
        let today = clock.today();
        let raw = match store.load(storage_key) {
            Ok(raw) => raw,
            Err(err) => {
                log::warn!("could not read {storage_key}, starting empty: {err}");
                None
            }
        };
        let opened = OpenedSet::decode(raw.as_deref());
        log::debug!(
            "calendar loaded for {today} with {} opened doors",
            opened.len()
        );
        Self {
            catalog,
            today,
            opened,
            store,
            storage_key: storage_key.to_string(),
        }
    }

    #[must_use]
    pub const fn today(&self) -> CalendarDate {
        self.today
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn opened(&self) -> &OpenedSet {
        &self.opened
    }

    #[must_use]
    pub fn is_locked(&self, day: u8) -> bool {
        is_locked_on(self.today, day)
    }

    #[must_use]
    pub fn is_opened(&self, day: u8) -> bool {
        self.opened.contains(day)
    }

    /// Try to reveal a door.
    ///
    /// A locked door is rejected without touching the opened set. An unlocked door
    /// is recorded as opened (once) and persisted before its record is returned;
    /// activating an already opened door replays the reveal.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::UnknownDay`] for an unlocked day missing from the
    /// catalog, and [`CalendarError::Persist`] when the store rejects the write, in
    /// which case the door stays closed.
    pub fn activate(&mut self, day: u8) -> Result<Activation, CalendarError> {
        if self.is_locked(day) {
            log::debug!("door {day} rejected: locked on {}", self.today);
            return Ok(Activation::Rejected(RejectReason::Locked));
        }
        let record = self
            .catalog
            .by_day(day)
            .cloned()
            .ok_or(CalendarError::UnknownDay(day))?;
        let newly_opened = self.opened.insert(day);
        if newly_opened {
            if let Err(err) = self.persist() {
                self.opened.remove(day);
                return Err(err);
            }
            log::debug!("door {day} opened");
        }
        Ok(Activation::Revealed {
            record,
            newly_opened,
        })
    }

    /// Forget every opened door and persist the empty set.
    ///
    /// Confirmation is the caller's job.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::Persist`] when the store rejects the write; the
    /// opened set is left as it was.
    pub fn reset(&mut self) -> Result<(), CalendarError> {
        let previous = mem::take(&mut self.opened);
        if let Err(err) = self.persist() {
            self.opened = previous;
            return Err(err);
        }
        log::debug!("calendar reset, {} doors closed", previous.len());
        Ok(())
    }

    #[must_use]
    pub fn progress(&self) -> Progress {
        let unlocked_count = self
            .catalog
            .iter()
            .filter(|record| !self.is_locked(record.day))
            .count();
        let opened_count = self.opened.len();
        Progress {
            unlocked_count,
            opened_count,
            percent_opened: percent_of_doors(opened_count),
        }
    }

    #[must_use]
    pub fn door_states(&self) -> Vec<DoorState> {
        self.catalog
            .iter()
            .map(|record| DoorState {
                day: record.day,
                locked: self.is_locked(record.day),
                opened: self.is_opened(record.day),
            })
            .collect()
    }

    #[must_use]
    pub fn status(&self) -> CalendarStatus {
        let progress = self.progress();
        CalendarStatus {
            today: self.today.label(),
            unlocked_doors: progress.unlocked_count,
            opened_doors: progress.opened_count,
            progress: progress.percent_opened,
        }
    }

    fn persist(&self) -> Result<(), CalendarError> {
        self.store
            .save(&self.storage_key, &self.opened.to_json())
            .map_err(|err| CalendarError::Persist(Box::new(err)))
    }
}

fn percent_of_doors(opened: usize) -> u8 {
    let doors = usize::from(DOOR_COUNT);
    let percent = (opened * 200 + doors) / (doors * 2);
    u8::try_from(percent.min(100)).unwrap_or(100)
}
