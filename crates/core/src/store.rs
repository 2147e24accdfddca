//! Key-value storage seam for the progress record.
//!
//! The browser shell implements [`ProgressStore`] over `localStorage`; tests
//! use [`MemoryStore`].

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::Error;
use crate::progress::ProgressRecord;
use crate::result::{Result, ResultExt};

/// String key-value storage, shaped like the Web Storage API.
pub trait ProgressStore {
    /// Read the value under `key`, `None` when unset.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage rejects the write (quota, privacy mode).
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

impl<T: ProgressStore + ?Sized> ProgressStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

/// Load the record under `key`; read and parse failures yield an empty record.
pub fn load_record(store: &dyn ProgressStore, key: &str) -> ProgressRecord {
    let raw = store.get(key).or_default_logged(None);
    ProgressRecord::from_stored(raw.as_deref())
}

/// Persist `record` under `key`.
///
/// # Errors
///
/// Returns an error if serialization or the storage write fails.
pub fn save_record(store: &dyn ProgressStore, key: &str, record: &ProgressRecord) -> Result<()> {
    let payload = record.to_json()?;
    store.set(key, &payload)
}

/// In-memory store with optional failure injection.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
    fail_reads: bool,
    fail_writes: bool,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that already holds `value` under `key`.
    #[must_use]
    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }

    /// Make every read fail.
    #[must_use]
    pub const fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    /// Make every write fail.
    #[must_use]
    pub const fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// Raw stored value, bypassing failure injection.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }
}

impl ProgressStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        if self.fail_reads {
            return Err(Error::storage_read_failed(key, "reads disabled"));
        }
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes {
            return Err(Error::storage_write_failed(key, "quota exceeded"));
        }
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
