use std::cell::RefCell;
use std::collections::HashMap;
use std::convert::Infallible;
use std::rc::Rc;

/// Named string records, as offered by browser `localStorage`.
///
/// Platform-specific implementations should provide this.
pub trait KeyValueStore {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Read a record; `Ok(None)` when nothing is stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn load(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Replace the record under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store rejects the write.
    fn save(&self, key: &str, value: &str) -> Result<(), Self::Error>;
}

/// In-process store. Clones share the same records, which lets a test hand one
/// handle to a model and inspect or reload through another.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a record directly, bypassing any model.
    pub fn insert(&self, key: &str, value: impl Into<String>) {
        self.records
            .borrow_mut()
            .insert(key.to_string(), value.into());
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        self.records.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    type Error = Infallible;

    fn load(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Ok(self.get(key))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        self.insert(key, value);
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    type Error = S::Error;

    fn load(&self, key: &str) -> Result<Option<String>, Self::Error> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        (**self).save(key, value)
    }
}
