//! 应用主状态结构

use std::sync::Arc;

use grindmap_core::{KeyValueStore, UsernameForm};
use ratatui::layout::Rect;

use crate::backend::{AppConfig, ConfigService, FetchService, FetchSession};

use super::FocusTarget;

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 键盘焦点
    pub focus: FocusTarget,

    /// 用户名表单（输入框、历史、下拉框状态）
    pub form: UsernameForm,

    /// 表单宿主，持有 relay 客户端
    pub session: FetchSession,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 是否显示帮助浮层
    pub show_help: bool,

    /// 最近一次渲染的终端区域，用于鼠标命中测试
    pub viewport: Rect,

    pub config: AppConfig,
    config_service: Box<dyn ConfigService>,
}

impl App {
    /// 创建新的应用实例
    ///
    /// 启动时焦点位于第一个输入框，下拉框随之可见。
    pub fn new(
        config: AppConfig,
        storage: Arc<dyn KeyValueStore>,
        fetcher: Box<dyn FetchService>,
        config_service: Box<dyn ConfigService>,
    ) -> Self {
        let focus = FocusTarget::default();
        let mut form = UsernameForm::new(storage, config.blur_delay());
        if let Some(platform) = focus.platform() {
            form.focus_gained(platform);
        }

        Self {
            should_quit: false,
            focus,
            form,
            session: FetchSession::new(fetcher),
            status_message: None,
            show_help: false,
            viewport: Rect::default(),
            config,
            config_service,
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// 保存当前配置，失败只记录日志
    pub fn persist_config(&self) {
        if let Err(e) = self.config_service.save(&self.config) {
            log::warn!("Failed to save config: {e:#}");
        }
    }
}
