//! `localStorage`-backed progress store

use learn_core::{Error, ProgressStore, Result};
use web_sys::{Storage, Window};

use crate::error::describe_js;

/// [`ProgressStore`] over the window's local storage.
///
/// Opening never fails: when storage is blocked (privacy mode, sandboxed
/// iframe) every read and write returns [`Error::StorageUnavailable`] and the
/// tracker carries on with an empty record.
pub struct LocalStorageStore {
    storage: std::result::Result<Storage, String>,
}

impl LocalStorageStore {
    #[must_use]
    pub fn open(window: &Window) -> Self {
        let storage = match window.local_storage() {
            Ok(Some(storage)) => Ok(storage),
            Ok(None) => Err("localStorage is not provided".to_string()),
            Err(e) => Err(describe_js(&e)),
        };

        if let Err(reason) = &storage {
            tracing::warn!("Progress will not persist: {}", reason);
        }

        Self { storage }
    }

    fn storage(&self) -> Result<&Storage> {
        self.storage
            .as_ref()
            .map_err(|reason| Error::StorageUnavailable {
                reason: reason.clone(),
            })
    }
}

impl ProgressStore for LocalStorageStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage()?
            .get_item(key)
            .map_err(|e| Error::storage_read_failed(key, describe_js(&e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| Error::storage_write_failed(key, describe_js(&e)))
    }
}
