//! 焦点 / 高亮状态机
//!
//! 跟踪哪个平台的输入框获得焦点、历史下拉框中哪一项被高亮，
//! 并把键盘、鼠标、焦点事件翻译为高亮变化或一次「选中提交」。
//!
//! 状态：
//!     Idle            focused = None
//!     Focused(p)      focused = Some(p)，highlighted ∈ {None} ∪ [0, len(history(p)) - 1]
//!
//! 失焦不会立刻回到 Idle，而是登记一个延迟任务（默认 200ms），
//! 这样紧随失焦而来的下拉项点击仍能在 Focused 状态下被处理。
//! 延迟任务带有焦点代数（generation），若期间发生过新的 focus_gained，则任务触发时被丢弃。

use std::time::{Duration, Instant};

use crate::types::Platform;

use super::HistoryStore;

/// 失焦到回到 Idle 的默认延迟
pub const DEFAULT_BLUR_DELAY: Duration = Duration::from_millis(200);

/// 状态机关心的按键
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Down,
    Up,
    Enter,
    Escape,
}

/// 选中历史项后需要写回输入框的内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    pub platform: Platform,
    pub identifier: String,
}

/// 单次转换的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// 与当前状态无关，宿主可执行默认行为
    Ignored,
    /// 已处理，宿主应抑制默认行为（如光标移动）
    Handled,
    /// 已处理，并且需要提交一个历史项
    Commit(Commit),
}

/// 已登记但尚未触发的失焦任务
#[derive(Debug, Clone, Copy)]
struct PendingBlur {
    generation: u64,
    due: Instant,
}

/// 交互状态
#[derive(Debug, Clone)]
pub struct InteractionState {
    focused: Option<Platform>,
    highlighted: Option<usize>,
    /// 每次 focus_gained 自增，用于识别过期的失焦任务
    generation: u64,
    pending_blur: Option<PendingBlur>,
    blur_delay: Duration,
}

impl InteractionState {
    /// 创建处于 Idle 的状态机
    pub fn new(blur_delay: Duration) -> Self {
        Self {
            focused: None,
            highlighted: None,
            generation: 0,
            pending_blur: None,
            blur_delay,
        }
    }

    pub fn focused(&self) -> Option<Platform> {
        self.focused
    }

    pub fn is_focused(&self, platform: Platform) -> bool {
        self.focused == Some(platform)
    }

    /// 高亮项索引，`None` 表示无高亮
    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn blur_delay(&self) -> Duration {
        self.blur_delay
    }

    /// 是否有尚未触发的失焦任务
    pub fn has_pending_blur(&self) -> bool {
        self.pending_blur.is_some()
    }

    /// 获得焦点：任意状态 → Focused(p)，清除高亮
    pub fn focus_gained(&mut self, platform: Platform) {
        self.generation = self.generation.wrapping_add(1);
        self.focused = Some(platform);
        self.highlighted = None;
        log::trace!("focus gained: {platform} (generation {})", self.generation);
    }

    /// 失去焦点：登记延迟任务，`now + blur_delay` 之后由 [`tick`](Self::tick) 触发
    pub fn focus_lost(&mut self, now: Instant) {
        if self.focused.is_none() {
            return;
        }
        self.pending_blur = Some(PendingBlur {
            generation: self.generation,
            due: now + self.blur_delay,
        });
    }

    /// 推进时间，到期的失焦任务在此触发
    ///
    /// 返回状态是否因此回到 Idle。
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(pending) = self.pending_blur else {
            return false;
        };
        if now < pending.due {
            return false;
        }
        self.pending_blur = None;

        if pending.generation != self.generation {
            log::trace!(
                "stale blur discarded (scheduled in generation {}, now {})",
                pending.generation,
                self.generation
            );
            return false;
        }

        let was_focused = self.focused.is_some();
        self.reset();
        was_focused
    }

    /// 处理按键
    pub fn handle_key(&mut self, key: NavKey, history: &HistoryStore) -> Transition {
        let Some(platform) = self.focused else {
            return Transition::Ignored;
        };
        let len = history.len(platform);

        match key {
            NavKey::Down => {
                if len == 0 {
                    return Transition::Ignored;
                }
                let next = self.highlighted.map_or(0, |i| i + 1);
                self.highlighted = Some(next.min(len - 1));
                Transition::Handled
            }

            NavKey::Up => {
                if len == 0 {
                    return Transition::Ignored;
                }
                self.highlighted = match self.highlighted {
                    None | Some(0) => None,
                    Some(i) => Some((i - 1).min(len - 1)),
                };
                Transition::Handled
            }

            NavKey::Enter => {
                let Some(identifier) = self
                    .highlighted
                    .and_then(|i| history.get(platform, i))
                    .map(str::to_string)
                else {
                    return Transition::Ignored;
                };
                self.reset();
                Transition::Commit(Commit {
                    platform,
                    identifier,
                })
            }

            NavKey::Escape => {
                self.reset();
                Transition::Handled
            }
        }
    }

    /// 鼠标悬停在第 `index` 项：与键盘共用同一个高亮光标
    pub fn hover(&mut self, index: usize, history: &HistoryStore) -> Transition {
        match self.focused {
            Some(platform) if index < history.len(platform) => {
                self.highlighted = Some(index);
                Transition::Handled
            }
            _ => Transition::Ignored,
        }
    }

    /// 点击下拉项：与 Enter 相同的提交，然后回到 Idle
    pub fn click(&mut self, platform: Platform, identifier: &str) -> Transition {
        self.reset();
        Transition::Commit(Commit {
            platform,
            identifier: identifier.to_string(),
        })
    }

    /// 历史项被删除后修正高亮，焦点不变
    pub fn after_remove(&mut self, platform: Platform, new_len: usize) {
        if self.focused != Some(platform) {
            return;
        }
        if let Some(i) = self.highlighted {
            if i >= new_len {
                self.highlighted = new_len.checked_sub(1);
            }
        }
    }

    /// 回到 Idle
    fn reset(&mut self) {
        self.focused = None;
        self.highlighted = None;
    }
}

impl Default for InteractionState {
    fn default() -> Self {
        Self::new(DEFAULT_BLUR_DELAY)
    }
}
