//! `localStorage` adapter
//!
//! Private browsing modes and sandboxed frames may refuse storage access.
//! [`local_or_memory`] then hands out an in-memory store so the theme and
//! session keep working for the lifetime of the page.

use std::rc::Rc;

use tracing::warn;
use vanilla_core::headless::MemoryStorage;
use vanilla_core::{Error, KeyValueStorage, Result};
use web_sys::{Storage, Window};

use crate::error::js_error_message;

#[derive(Debug, Clone)]
pub struct BrowserStorage {
    storage: Storage,
}

impl BrowserStorage {
    /// Open the window's local storage.
    ///
    /// # Errors
    /// Returns `Error::StorageUnavailable` when access throws or storage is
    /// disabled.
    pub fn open(window: &Window) -> Result<Self> {
        window
            .local_storage()
            .map_err(|e| Error::storage_unavailable(js_error_message(&e)))?
            .map(|storage| Self { storage })
            .ok_or_else(|| Error::storage_unavailable("localStorage is disabled"))
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| Error::storage_read_failed(key, js_error_message(&e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| Error::storage_write_failed(key, js_error_message(&e)))
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.storage
            .remove_item(key)
            .map_err(|e| Error::storage_write_failed(key, js_error_message(&e)))
    }
}

/// Local storage, or an in-memory replacement when it cannot be opened.
pub fn local_or_memory(window: &Window) -> Rc<dyn KeyValueStorage> {
    match BrowserStorage::open(window) {
        Ok(storage) => Rc::new(storage),
        Err(e) => {
            warn!(error = %e, "falling back to in-memory storage");
            Rc::new(MemoryStorage::new())
        }
    }
}
