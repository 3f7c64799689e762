//! Browser `localStorage` as the calendar's key-value store.

use advent_core::KeyValueStore;

use crate::dom;

/// Web-specific store backed by `localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebStore;

#[derive(Debug, thiserror::Error)]
pub enum WebStorageError {
    #[error("localStorage unavailable: {0}")]
    Unavailable(String),
    #[error("Storage error: {0}")]
    Storage(String),
}

impl KeyValueStore for WebStore {
    type Error = WebStorageError;

    fn load(&self, key: &str) -> Result<Option<String>, Self::Error> {
        let storage = dom::local_storage()
            .map_err(|e| WebStorageError::Unavailable(dom::js_error_message(&e)))?;
        storage
            .get_item(key)
            .map_err(|e| WebStorageError::Storage(dom::js_error_message(&e)))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        let storage = dom::local_storage()
            .map_err(|e| WebStorageError::Unavailable(dom::js_error_message(&e)))?;
        storage
            .set_item(key, value)
            .map_err(|e| WebStorageError::Storage(dom::js_error_message(&e)))
    }
}
