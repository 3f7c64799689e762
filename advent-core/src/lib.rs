//! Advent Calendar Engine
//!
//! Platform-agnostic core for a 24-door advent calendar: the day catalog, the
//! date gate, and the persisted set of opened doors. The clock and the key-value
//! store are injected, so the model runs without any browser environment.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod date;
pub mod opened;
pub mod state;
pub mod storage;

// Re-export commonly used types
pub use catalog::{Catalog, CatalogError, DayRecord, Reward, RewardKind};
pub use config::CalendarConfig;
pub use constants::{DEFAULT_STORAGE_KEY, DOOR_COUNT, UNLOCK_MONTH};
pub use date::{CalendarDate, Clock, DateError, FixedClock, month_name};
pub use opened::OpenedSet;
pub use state::{
    Activation, AdventCalendar, CalendarError, CalendarStatus, DoorState, Progress, RejectReason,
    is_locked_on,
};
pub use storage::{KeyValueStore, MemoryStore};
