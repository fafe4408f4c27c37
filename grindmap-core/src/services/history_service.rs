//! Per-platform search history

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::traits::KeyValueStore;
use crate::types::Platform;

/// Storage key holding the whole history mapping
pub const HISTORY_KEY: &str = "grindmap_history";

/// Maximum number of entries kept per platform
pub const MAX_HISTORY: usize = 5;

/// Bounded, most-recent-first, de-duplicated history per platform
///
/// The in-memory lists are authoritative for the session; every mutation is
/// written through to the injected [`KeyValueStore`], and write failures are
/// logged and swallowed.
pub struct HistoryStore {
    entries: BTreeMap<Platform, Vec<String>>,
    storage: Arc<dyn KeyValueStore>,
}

impl HistoryStore {
    /// Load history from storage
    ///
    /// Never fails: a missing key or malformed payload yields an empty
    /// history for every platform.
    pub fn load(storage: Arc<dyn KeyValueStore>) -> Self {
        let entries = match Self::read(storage.as_ref()) {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!("{e}; starting with empty history");
                BTreeMap::new()
            }
        };

        let total: usize = entries.values().map(Vec::len).sum();
        log::debug!("Loaded {total} history entries");

        Self { entries, storage }
    }

    /// Entries for `platform`, most recent first
    pub fn entries(&self, platform: Platform) -> &[String] {
        self.entries
            .get(&platform)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn len(&self, platform: Platform) -> usize {
        self.entries(platform).len()
    }

    pub fn is_empty(&self, platform: Platform) -> bool {
        self.entries(platform).is_empty()
    }

    /// Entry at `index` for `platform`
    pub fn get(&self, platform: Platform, index: usize) -> Option<&str> {
        self.entries(platform).get(index).map(String::as_str)
    }

    /// Move `identifier` to the front of the platform's list (inserting it if
    /// absent) and evict anything beyond [`MAX_HISTORY`]
    pub fn promote(&mut self, platform: Platform, identifier: &str) {
        Self::promote_in(self.list_mut(platform), identifier);
        self.save();
    }

    /// Promote several identifiers with a single write
    ///
    /// Used by the fetch gate, which commits every accepted field at once.
    pub fn promote_all<'a>(&mut self, items: impl IntoIterator<Item = (Platform, &'a str)>) {
        let mut changed = false;
        for (platform, identifier) in items {
            Self::promote_in(self.list_mut(platform), identifier);
            changed = true;
        }
        if changed {
            self.save();
        }
    }

    /// Delete `identifier` from the platform's list
    ///
    /// Returns whether an entry was removed; absence is not an error.
    pub fn remove(&mut self, platform: Platform, identifier: &str) -> bool {
        let list = self.list_mut(platform);
        let original_len = list.len();
        list.retain(|entry| entry != identifier);
        let removed = list.len() != original_len;

        self.save();
        removed
    }

    /// Drop every entry of `platform`
    pub fn clear(&mut self, platform: Platform) {
        self.entries.remove(&platform);
        self.save();
    }

    /// Write the full mapping to storage, overwriting prior content
    pub fn save(&self) {
        if let Err(e) = self.write() {
            if e.is_expected() {
                log::warn!("{e}");
            } else {
                log::error!("{e}");
            }
        }
    }

    fn list_mut(&mut self, platform: Platform) -> &mut Vec<String> {
        self.entries.entry(platform).or_default()
    }

    fn promote_in(list: &mut Vec<String>, identifier: &str) {
        list.retain(|entry| entry != identifier);
        list.insert(0, identifier.to_string());
        list.truncate(MAX_HISTORY);
    }

    fn read(storage: &dyn KeyValueStore) -> CoreResult<BTreeMap<Platform, Vec<String>>> {
        let Some(content) = storage
            .get(HISTORY_KEY)
            .map_err(|e| CoreError::HistoryLoadFailure(e.to_string()))?
        else {
            return Ok(BTreeMap::new());
        };

        let raw: BTreeMap<String, Vec<String>> = serde_json::from_str(&content)
            .map_err(|e| CoreError::HistoryLoadFailure(e.to_string()))?;

        let mut entries = BTreeMap::new();
        for (id, list) in raw {
            let Some(platform) = Platform::from_id(&id) else {
                log::debug!("Ignoring history for unknown platform: {id}");
                continue;
            };
            entries.insert(platform, sanitize(list));
        }
        Ok(entries)
    }

    fn write(&self) -> CoreResult<()> {
        let raw: BTreeMap<&str, &Vec<String>> = self
            .entries
            .iter()
            .map(|(platform, list)| (platform.id(), list))
            .collect();

        let content = serde_json::to_string(&raw)
            .map_err(|e| CoreError::SerializationError(e.to_string()))?;

        self.storage
            .set(HISTORY_KEY, &content)
            .map_err(|e| CoreError::HistoryPersistFailure(e.to_string()))
    }
}

/// Restore the list invariants on data read from storage
fn sanitize(list: Vec<String>) -> Vec<String> {
    let mut cleaned: Vec<String> = Vec::with_capacity(list.len().min(MAX_HISTORY));
    for entry in list {
        if entry.is_empty() || cleaned.contains(&entry) {
            continue;
        }
        cleaned.push(entry);
        if cleaned.len() == MAX_HISTORY {
            break;
        }
    }
    cleaned
}
