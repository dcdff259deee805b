//! Durable key-value storage for mcbe-preview.
//!
//! All persisted client state (render history, panel visibility, last mode)
//! is stored as JSON strings under fixed keys. Backends implement
//! [`KeyValueStore`]; the SQLite backend lives in [`crate::database`], the
//! in-memory one in [`memory_store`].

pub mod memory_store;

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::types::errors::StorageError;

/// Key holding the JSON-serialized render history.
pub const HISTORY_KEY: &str = "history-v1";
/// Key holding the JSON-serialized `{collapsed}` panel state.
pub const HISTORY_UI_KEY: &str = "history-ui-v1";
/// Key holding the last-selected mode string.
pub const MODE_KEY: &str = "mode-v1";

/// String-keyed, string-valued durable storage.
///
/// Reads and writes are treated as atomic; callers decide how to degrade when
/// an operation fails.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// Store handle shared by every component of one client.
pub type SharedStore = Arc<dyn KeyValueStore>;

/// Result of reading a typed value from storage.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome<T> {
    Loaded(T),
    /// Nothing is stored under the key.
    NotFound,
    /// Something is stored (or the read failed) but no valid value came out.
    CorruptData(String),
}

impl<T> LoadOutcome<T> {
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadOutcome::Loaded(_))
    }

    pub fn loaded(self) -> Option<T> {
        match self {
            LoadOutcome::Loaded(value) => Some(value),
            _ => None,
        }
    }
}

/// Reads and deserializes the JSON value under `key`.
pub fn load_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> LoadOutcome<T> {
    let raw = match store.get_item(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return LoadOutcome::NotFound,
        Err(e) => return LoadOutcome::CorruptData(e.to_string()),
    };
    match serde_json::from_str(&raw) {
        Ok(value) => LoadOutcome::Loaded(value),
        Err(e) => LoadOutcome::CorruptData(format!("invalid JSON under '{}': {}", key, e)),
    }
}

/// Serializes `value` as JSON and writes it under `key`.
pub fn save_json<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let json = serde_json::to_string(value)
        .map_err(|e| StorageError::SerializationError(e.to_string()))?;
    store.set_item(key, &json)
}
