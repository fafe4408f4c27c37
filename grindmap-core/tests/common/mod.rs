//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use grindmap_core::{
    FetchRequest, FormHost, InMemoryKeyValueStore, Platform, UsernameForm, HISTORY_KEY,
};

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

pub const BLUR_DELAY: Duration = Duration::from_millis(200);

/// 以给定的历史 JSON 创建表单，同时返回底层存储以便检查写入
pub fn form_with_history(json: &str) -> (UsernameForm, InMemoryKeyValueStore) {
    let backing = InMemoryKeyValueStore::with_entry(HISTORY_KEY, json);
    let form = UsernameForm::new(Arc::new(backing.clone()), BLUR_DELAY);
    (form, backing)
}

pub fn empty_form() -> (UsernameForm, InMemoryKeyValueStore) {
    let backing = InMemoryKeyValueStore::new();
    let form = UsernameForm::new(Arc::new(backing.clone()), BLUR_DELAY);
    (form, backing)
}
