//! 测试辅助模块
//!
//! 提供 mock 实现。

use crate::error::{CoreError, CoreResult};
use crate::traits::{FormHost, KeyValueStore};
use crate::types::{FetchRequest, Platform};

// ===== FailingKeyValueStore =====

/// 读写都失败的存储，用于测试降级路径
pub struct FailingKeyValueStore;

impl KeyValueStore for FailingKeyValueStore {
    fn get(&self, key: &str) -> CoreResult<Option<String>> {
        Err(CoreError::StorageError(format!("cannot read {key}")))
    }

    fn set(&self, key: &str, _value: &str) -> CoreResult<()> {
        Err(CoreError::StorageError(format!("cannot write {key}")))
    }
}

// ===== RecordingHost =====

/// 记录所有通知的宿主
#[derive(Default)]
pub struct RecordingHost {
    pub changes: Vec<(Platform, String)>,
    pub fetches: Vec<FetchRequest>,
}

impl FormHost for RecordingHost {
    fn identifier_changed(&mut self, platform: Platform, value: &str) {
        self.changes.push((platform, value.to_string()));
    }

    fn fetch_requested(&mut self, request: &FetchRequest) {
        self.fetches.push(request.clone());
    }
}
