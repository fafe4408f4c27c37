//! 测试辅助模块

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use grindmap_core::{FetchRequest, InMemoryKeyValueStore, HISTORY_KEY};

use crate::backend::{
    AppConfig, ConfigService, FetchOutcome, FetchService, PlatformResult,
};
use crate::model::App;

// ===== StubFetchService =====

#[derive(Default)]
struct StubInner {
    submitted: Vec<FetchRequest>,
    pending: Vec<FetchRequest>,
    ready: VecDeque<FetchOutcome>,
}

/// 不发网络请求的 FetchService，克隆后共享状态
#[derive(Clone, Default)]
pub struct StubFetchService {
    inner: Arc<Mutex<StubInner>>,
}

impl StubFetchService {
    pub fn submitted(&self) -> Vec<FetchRequest> {
        self.inner.lock().unwrap().submitted.clone()
    }

    /// 让所有未完成的请求以成功结束
    pub fn complete_all(&self) {
        let mut inner = self.inner.lock().unwrap();
        let pending = std::mem::take(&mut inner.pending);
        for request in pending {
            inner.ready.push_back(FetchOutcome {
                results: request
                    .usernames
                    .iter()
                    .map(|(platform, _)| PlatformResult {
                        platform: *platform,
                        error: None,
                    })
                    .collect(),
            });
        }
    }
}

impl FetchService for StubFetchService {
    fn submit(&mut self, request: &FetchRequest) {
        let mut inner = self.inner.lock().unwrap();
        inner.submitted.push(request.clone());
        inner.pending.push(request.clone());
    }

    fn poll(&mut self) -> Option<FetchOutcome> {
        self.inner.lock().unwrap().ready.pop_front()
    }
}

// ===== MemoryConfigService =====

/// 把配置保存在内存里的 ConfigService
#[derive(Clone, Default)]
pub struct MemoryConfigService {
    saved: Arc<Mutex<Option<AppConfig>>>,
}

impl MemoryConfigService {
    pub fn saved(&self) -> Option<AppConfig> {
        self.saved.lock().unwrap().clone()
    }
}

impl ConfigService for MemoryConfigService {
    fn load(&self) -> anyhow::Result<AppConfig> {
        Ok(self.saved().unwrap_or_default())
    }

    fn save(&self, config: &AppConfig) -> anyhow::Result<()> {
        *self.saved.lock().unwrap() = Some(config.clone());
        Ok(())
    }
}

// ===== App 工厂 =====

pub struct TestApp {
    pub app: App,
    pub fetcher: StubFetchService,
    pub config: MemoryConfigService,
}

/// 以给定的历史 JSON 创建 App
pub fn app_with_history(json: &str) -> TestApp {
    let fetcher = StubFetchService::default();
    let config = MemoryConfigService::default();
    let app = App::new(
        AppConfig::default(),
        Arc::new(InMemoryKeyValueStore::with_entry(HISTORY_KEY, json)),
        Box::new(fetcher.clone()),
        Box::new(config.clone()),
    );
    TestApp {
        app,
        fetcher,
        config,
    }
}

pub fn test_app() -> TestApp {
    app_with_history("{}")
}
