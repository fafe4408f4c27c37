//! JSON 文件存储
//!
//! 实现 grindmap-core 的 KeyValueStore trait，每个键一个文件

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use grindmap_core::{CoreError, CoreResult, KeyValueStore};

use super::config_dir;

/// 基于 JSON 文件的键值存储
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// 使用默认配置目录
    pub fn new() -> Self {
        Self::with_dir(config_dir())
    }

    /// 使用指定目录
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> CoreResult<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(CoreError::StorageError(e.to_string())),
        }
    }

    fn set(&self, key: &str, value: &str) -> CoreResult<()> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir).map_err(|e| CoreError::StorageError(e.to_string()))?;
        }

        fs::write(self.path_for(key), value).map_err(|e| CoreError::StorageError(e.to_string()))?;

        log::debug!("Saved {key} to {}", self.dir.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_reads_none() {
        let tmp = tempfile::tempdir().unwrap();
        let store = JsonFileStore::with_dir(tmp.path());
        assert_eq!(store.get("grindmap_history").unwrap(), None);
    }

    #[test]
    fn set_creates_directory_and_round_trips() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("nested").join("grindmap-tui");
        let store = JsonFileStore::with_dir(&dir);

        store.set("grindmap_history", r#"{"leetcode":["a"]}"#).unwrap();

        assert!(dir.join("grindmap_history.json").exists());
        assert_eq!(
            store.get("grindmap_history").unwrap().as_deref(),
            Some(r#"{"leetcode":["a"]}"#)
        );
    }

    #[test]
    fn history_survives_restart() {
        use std::sync::Arc;

        use grindmap_core::{HistoryStore, Platform};

        let tmp = tempfile::tempdir().unwrap();
        {
            let mut history = HistoryStore::load(Arc::new(JsonFileStore::with_dir(tmp.path())));
            history.promote(Platform::Codeforces, "tourist");
        }
        let history = HistoryStore::load(Arc::new(JsonFileStore::with_dir(tmp.path())));
        assert_eq!(history.entries(Platform::Codeforces), ["tourist"]);
    }
}
