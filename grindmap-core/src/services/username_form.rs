//! 用户名表单
//!
//! 组合输入框状态、历史记录、交互状态机与 Fetch Gate，
//! 对外只暴露渲染所需的状态和事件入口。宿主（UI）负责把原始事件翻译成这里的方法调用。

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::error::IdentifierError;
use crate::traits::{FormHost, KeyValueStore};
use crate::types::{FieldState, FormFields, Platform};

use super::fetch_gate::{self, FetchDecision};
use super::interaction::{Commit, InteractionState, NavKey, Transition};
use super::normalizer::normalize;
use super::HistoryStore;

/// 按键处理结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// 表单已处理，宿主应抑制默认行为
    Consumed,
    /// 表单未处理，宿主可执行默认行为
    Ignored,
}

/// 用户名表单
pub struct UsernameForm {
    fields: FormFields,
    history: HistoryStore,
    interaction: InteractionState,
    loading: bool,
}

impl UsernameForm {
    /// 创建表单，并从存储加载历史记录
    ///
    /// # Arguments
    /// * `storage` - 历史记录持久化
    /// * `blur_delay` - 失焦到关闭下拉框的延迟
    pub fn new(storage: Arc<dyn KeyValueStore>, blur_delay: Duration) -> Self {
        Self {
            fields: FormFields::new(),
            history: HistoryStore::load(storage),
            interaction: InteractionState::new(blur_delay),
            loading: false,
        }
    }

    // ===== 渲染所需状态 =====

    pub fn value(&self, platform: Platform) -> &str {
        &self.fields.get(platform).value
    }

    pub fn error(&self, platform: Platform) -> Option<&IdentifierError> {
        self.fields.get(platform).error.as_ref()
    }

    pub fn field(&self, platform: Platform) -> &FieldState {
        self.fields.get(platform)
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn history(&self, platform: Platform) -> &[String] {
        self.history.entries(platform)
    }

    pub fn focused(&self) -> Option<Platform> {
        self.interaction.focused()
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.interaction.highlighted()
    }

    /// 下拉框是否可见：获得焦点且有历史记录
    pub fn dropdown_visible(&self, platform: Platform) -> bool {
        self.interaction.is_focused(platform) && !self.history.is_empty(platform)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// 触发按钮是否可用
    pub fn fetch_enabled(&self) -> bool {
        !self.loading && fetch_gate::can_fetch(&self.fields)
    }

    // ===== 事件入口 =====

    /// 输入框内容变化
    pub fn input(&mut self, platform: Platform, raw: &str, host: &mut dyn FormHost) {
        let normalized = normalize(platform, raw);
        let ok = normalized.is_ok();

        let field = self.fields.get_mut(platform);
        field.value = normalized.value;
        field.error = normalized.error;

        if ok {
            host.identifier_changed(platform, &field.value);
        }
    }

    pub fn focus_gained(&mut self, platform: Platform) {
        self.interaction.focus_gained(platform);
    }

    pub fn focus_lost(&mut self, now: Instant) {
        self.interaction.focus_lost(now);
    }

    /// 推进时间，触发到期的失焦任务
    pub fn tick(&mut self, now: Instant) -> bool {
        self.interaction.tick(now)
    }

    pub fn handle_key(&mut self, key: NavKey, host: &mut dyn FormHost) -> KeyOutcome {
        let transition = self.interaction.handle_key(key, &self.history);
        self.apply(transition, host)
    }

    pub fn hover(&mut self, index: usize) -> KeyOutcome {
        let transition = self.interaction.hover(index, &self.history);
        match transition {
            Transition::Ignored => KeyOutcome::Ignored,
            _ => KeyOutcome::Consumed,
        }
    }

    /// 点击第 `index` 个历史项
    pub fn click_item(&mut self, platform: Platform, index: usize, host: &mut dyn FormHost) {
        let Some(identifier) = self.history.get(platform, index).map(str::to_string) else {
            return;
        };
        let transition = self.interaction.click(platform, &identifier);
        self.apply(transition, host);
    }

    /// 删除第 `index` 个历史项
    pub fn remove_item(&mut self, platform: Platform, index: usize) {
        let Some(identifier) = self.history.get(platform, index).map(str::to_string) else {
            return;
        };
        self.history.remove(platform, &identifier);
        self.interaction
            .after_remove(platform, self.history.len(platform));
    }

    /// 删除当前高亮的历史项
    pub fn remove_highlighted(&mut self) -> bool {
        let (Some(platform), Some(index)) = (self.focused(), self.highlighted()) else {
            return false;
        };
        if index >= self.history.len(platform) {
            return false;
        }
        self.remove_item(platform, index);
        true
    }

    /// 清空某个平台的全部历史
    pub fn clear_history(&mut self, platform: Platform) {
        self.history.clear(platform);
        self.interaction.after_remove(platform, 0);
    }

    /// 请求获取数据
    pub fn request_fetch(&mut self, host: &mut dyn FormHost) -> FetchDecision {
        fetch_gate::submit(&self.fields, &mut self.history, self.loading, host)
    }

    /// 由宿主回报请求是否进行中
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    fn apply(&mut self, transition: Transition, host: &mut dyn FormHost) -> KeyOutcome {
        match transition {
            Transition::Ignored => KeyOutcome::Ignored,
            Transition::Handled => KeyOutcome::Consumed,
            Transition::Commit(Commit {
                platform,
                identifier,
            }) => {
                self.input(platform, &identifier, host);
                KeyOutcome::Consumed
            }
        }
    }
}
