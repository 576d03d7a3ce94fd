//! Settings (localStorage) and chat-history (sessionStorage) persistence.
//!
//! Every failure here is non-fatal: loads fall back to defaults, saves are
//! logged and dropped.  The `KeyValueStore` seam exists so the same code runs
//! against the browser `Storage` objects and against `MemoryStore` (tests, or
//! browsers with storage disabled).

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;

use serde_json::{from_str, to_string};

use crate::constants::{HISTORY_STORAGE_KEY, SETTINGS_STORAGE_KEY};
use crate::models::{ChatTurn, Settings};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageError(pub String);

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "storage error: {}", self.0)
    }
}

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl KeyValueStore for web_sys::Storage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.get_item(key)
            .map_err(|e| StorageError(crate::utils::describe_js_error(&e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.set_item(key, value)
            .map_err(|e| StorageError(crate::utils::describe_js_error(&e)))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.remove_item(key)
            .map_err(|e| StorageError(crate::utils::describe_js_error(&e)))
    }
}

/// In-memory stand-in for a browser `Storage`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// Browser `localStorage`, or `None` when access is denied.
pub fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Browser `sessionStorage`, or `None` when access is denied.
pub fn session_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.session_storage().ok().flatten()
}

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

/// Read settings once at startup.  Missing, unreadable or malformed content
/// yields the defaults.
pub fn load_settings(store: &dyn KeyValueStore) -> Settings {
    let raw = match store.get(SETTINGS_STORAGE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Settings::default(),
        Err(e) => {
            crate::warn_log!("Could not read settings, using defaults: {}", e);
            return Settings::default();
        }
    };
    match from_str::<Settings>(&raw) {
        Ok(settings) => settings,
        Err(e) => {
            crate::warn_log!("Stored settings are malformed, using defaults: {}", e);
            Settings::default()
        }
    }
}

pub fn save_settings(store: &dyn KeyValueStore, settings: &Settings) -> Result<(), StorageError> {
    let json = to_string(settings).map_err(|e| StorageError(e.to_string()))?;
    store.set(SETTINGS_STORAGE_KEY, &json)
}

// ---------------------------------------------------------------------------
// Chat history
// ---------------------------------------------------------------------------

pub fn load_history(store: &dyn KeyValueStore) -> Vec<ChatTurn> {
    match store.get(HISTORY_STORAGE_KEY) {
        Ok(Some(raw)) => from_str::<Vec<ChatTurn>>(&raw).unwrap_or_else(|e| {
            crate::warn_log!("Saved chat history is malformed, ignoring: {}", e);
            Vec::new()
        }),
        Ok(None) => Vec::new(),
        Err(e) => {
            crate::warn_log!("Could not read chat history: {}", e);
            Vec::new()
        }
    }
}

pub fn save_history(store: &dyn KeyValueStore, history: &[ChatTurn]) -> Result<(), StorageError> {
    let json = to_string(history).map_err(|e| StorageError(e.to_string()))?;
    store.set(HISTORY_STORAGE_KEY, &json)
}

pub fn clear_history(store: &dyn KeyValueStore) -> Result<(), StorageError> {
    store.remove(HISTORY_STORAGE_KEY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError("SecurityError".into()))
        }
        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError("QuotaExceededError".into()))
        }
        fn remove(&self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError("SecurityError".into()))
        }
    }

    #[wasm_bindgen_test]
    fn settings_survive_a_fresh_load() {
        let store = MemoryStore::new();
        let saved = Settings {
            dark_mode: false,
            auto_scroll: false,
            sound_effects: true,
            show_sources: false,
        };
        save_settings(&store, &saved).unwrap();
        assert_eq!(load_settings(&store), saved);
    }

    #[wasm_bindgen_test]
    fn corrupted_settings_fall_back_to_defaults() {
        let store = MemoryStore::new();
        for junk in ["{not json", "[]", r#"{"darkMode":"yes"}"#, "null"] {
            store.set(SETTINGS_STORAGE_KEY, junk).unwrap();
            assert_eq!(load_settings(&store), Settings::default(), "input: {}", junk);
        }
    }

    #[wasm_bindgen_test]
    fn unavailable_storage_is_not_fatal() {
        assert_eq!(load_settings(&BrokenStore), Settings::default());
        assert!(load_history(&BrokenStore).is_empty());
        assert!(save_settings(&BrokenStore, &Settings::default()).is_err());
    }

    #[wasm_bindgen_test]
    fn history_round_trips_and_clears() {
        let store = MemoryStore::new();
        let turns = vec![ChatTurn {
            question: "What is it about?".into(),
            answer: "Rust.".into(),
            source: Some("Chapter 1".into()),
            timestamp: Utc::now(),
        }];
        save_history(&store, &turns).unwrap();
        assert_eq!(load_history(&store), turns);

        clear_history(&store).unwrap();
        assert!(load_history(&store).is_empty());
    }
}
