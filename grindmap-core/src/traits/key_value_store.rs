//! Key-value persistence abstract Trait

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::error::{CoreError, CoreResult};

/// Key-value storage Trait
///
/// Platform implementation:
/// - TUI: `JsonFileStore` (one JSON file per key under the config directory)
/// - Tests: [`InMemoryKeyValueStore`]
///
/// Calls are synchronous: the history store persists right after every
/// mutation, from the single event-processing context.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`
    ///
    /// # Returns
    /// * `Ok(Some(value))` - value exists
    /// * `Ok(None)` - key was never written
    fn get(&self, key: &str) -> CoreResult<Option<String>>;

    /// Overwrite the value stored under `key`
    ///
    /// # Arguments
    /// * `key` - storage key
    /// * `value` - serialized payload
    fn set(&self, key: &str, value: &str) -> CoreResult<()>;
}

/// In-memory key-value store
///
/// Default implementation, available on all platforms. Clones share the same map.
#[derive(Clone, Default)]
pub struct InMemoryKeyValueStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryKeyValueStore {
    /// Create an empty memory store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a memory store pre-seeded with one entry
    #[must_use]
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let store = Self::new();
        if let Ok(mut entries) = store.entries.write() {
            entries.insert(key.into(), value.into());
        }
        store
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get(&self, key: &str) -> CoreResult<Option<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|e| CoreError::StorageError(e.to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> CoreResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| CoreError::StorageError(e.to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
