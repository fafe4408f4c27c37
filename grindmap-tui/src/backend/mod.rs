//!
//! src/backend/mod.rs
//! Backend 层：与 UI 无关的服务
//!
//! Backend 层不渲染任何东西，只负责三件事：
//! 把历史记录写到磁盘、读写配置文件、把用户名发给 relay。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod json_file_store;    // KeyValueStore 的 JSON 文件实现
//!         mod config_service;     // 配置文件读写
//!         mod fetch_service;      // relay HTTP 请求（tokio + reqwest）
//!         mod fetch_session;      // FormHost 实现，连接表单与 fetch_service
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、历史记录存储（JsonFileStore）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     实现 grindmap-core 的 KeyValueStore trait。
//!     每个键对应一个文件：~/.config/grindmap-tui/<key>.json
//!
//!     UsernameForm 只认识 KeyValueStore，不知道数据落在哪里。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、Fetch 数据流
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     用户按 Ctrl+R / 点击按钮
//!         ↓
//!     Update 层调用 form.request_fetch(&mut app.session)
//!         ↓
//!     Fetch Gate 放行 → FetchSession::fetch_requested
//!         ↓
//!     RelayFetchService::submit 在 tokio 运行时上发起 GET 请求
//!         ↓
//!     请求结束后把 FetchOutcome 送进 channel
//!         ↓
//!     主循环每个 Tick 调用 session.poll_outcome()，清除 loading
//!

mod config_service;
mod fetch_service;
mod fetch_session;
mod json_file_store;

use std::path::PathBuf;

pub use config_service::{AppConfig, ConfigService, LocalConfigService};
pub use fetch_service::{FetchOutcome, FetchService, PlatformResult, RelayFetchService};
pub use fetch_session::FetchSession;
pub use json_file_store::JsonFileStore;

/// 获取配置目录路径
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("grindmap-tui")
}
