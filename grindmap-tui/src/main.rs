//! GrindMap TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 存储、配置与 relay 请求 (`backend/`)
//!
//! 表单规则（规范化、历史、下拉框状态机、Fetch Gate）全部在 grindmap-core 中，
//! 本 crate 只负责把终端输入翻译成对 core 的调用。
//!
//!
//! 启动顺序：
//!     init_logging()          // 日志写入配置目录，终端被 TUI 占用
//!     ConfigService::load()   // 读取 config.json，读失败时用默认值
//!     set_theme / set_language
//!     App::new()              // 读取历史，焦点落在第一个输入框
//!     init_terminal()
//!     app::run()
//!     restore_terminal()      // 无论成功与否都恢复终端

mod app;
mod backend;
mod event;
pub mod i18n;
mod message;
mod model;
#[cfg(test)]
mod test_utils;
mod update;
mod util;
mod view;

use std::sync::Arc;

use anyhow::Result;

use backend::{config_dir, ConfigService, JsonFileStore, LocalConfigService, RelayFetchService};
use i18n::{set_language, Language};
use util::{init_logging, init_terminal, restore_terminal};

fn main() -> Result<()> {
    // 1. 日志（guard 需存活到退出，保证缓冲写盘）
    let _log_guard = init_logging(&config_dir())?;
    log::info!("Starting grindmap-tui v{}", env!("CARGO_PKG_VERSION"));

    // 2. 配置
    let config_service = LocalConfigService::new();
    let config = config_service.load().unwrap_or_else(|e| {
        log::warn!("Failed to load config: {e:#}; using defaults");
        backend::AppConfig::default()
    });
    view::theme::set_theme(config.theme);
    match Language::from_code(&config.language) {
        Some(lang) => set_language(lang),
        None => log::warn!("Unknown language {:?}, keeping default", config.language),
    }
    log::info!("Relay: {}", config.relay_url);

    // 3. 应用实例
    let fetcher = RelayFetchService::new(config.relay_url.clone())?;
    let mut app = model::App::new(
        config,
        Arc::new(JsonFileStore::new()),
        Box::new(fetcher),
        Box::new(config_service),
    );

    // 4. 主循环
    let mut terminal = init_terminal()?;
    let result = app::run(&mut terminal, &mut app);

    // 5. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    if let Err(ref e) = result {
        log::error!("Exited with error: {e:#}");
    }
    result
}
