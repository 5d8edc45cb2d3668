//! Durable key/value storage behind the session guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser build persists to `localStorage`; native builds and tests use
//! an in-memory map. Callers only see [`DurableStorage`], so session logic is
//! identical in both.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde::Serialize;
use serde::de::DeserializeOwned;

/// String key/value store with `localStorage` semantics.
pub trait DurableStorage {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str);
    fn remove_item(&self, key: &str);
}

/// Storage handle shared through Leptos context.
pub type SharedStorage = Arc<dyn DurableStorage + Send + Sync>;

/// `window.localStorage`. Every call is a no-op outside the browser build.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    match web_sys::window()?.local_storage() {
        Ok(storage) => storage,
        Err(_) => None,
    }
}

#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
impl DurableStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            match local_storage()?.get_item(key) {
                Ok(value) => value,
                Err(_) => None,
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn set_item(&self, key: &str, value: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                if storage.set_item(key, value).is_err() {
                    log::warn!("localStorage write failed for key {key}");
                }
            }
        }
    }

    fn remove_item(&self, key: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                if storage.remove_item(key).is_err() {
                    log::warn!("localStorage remove failed for key {key}");
                }
            }
        }
    }
}

/// Process-local storage used by native builds and tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, String>>,
}

impl DurableStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        match self.items.lock() {
            Ok(items) => items.get(key).cloned(),
            Err(_) => None,
        }
    }

    fn set_item(&self, key: &str, value: &str) {
        if let Ok(mut items) = self.items.lock() {
            items.insert(key.to_owned(), value.to_owned());
        }
    }

    fn remove_item(&self, key: &str) {
        if let Ok(mut items) = self.items.lock() {
            items.remove(key);
        }
    }
}

/// Storage backend for the current build target.
pub fn default_storage() -> SharedStorage {
    if cfg!(feature = "csr") {
        Arc::new(BrowserStorage)
    } else {
        Arc::new(MemoryStorage::default())
    }
}

/// Load a JSON value stored under `key`. Unparseable values read as absent.
pub fn load_json<T: DeserializeOwned>(storage: &dyn DurableStorage, key: &str) -> Option<T> {
    let raw = storage.get_item(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("discarding unparseable stored value for {key}: {e}");
            None
        }
    }
}

/// Serialize `value` as JSON under `key`.
pub fn save_json<T: Serialize>(storage: &dyn DurableStorage, key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(raw) => storage.set_item(key, &raw),
        Err(e) => log::warn!("failed to serialize value for {key}: {e}"),
    }
}
