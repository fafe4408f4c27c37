//! 表单消息

use grindmap_core::{NavKey, Platform};

/// 作用于当前输入框或其历史下拉框的消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMessage {
    /// 输入一个字符
    Input(char),
    /// 删除最后一个字符
    Backspace,
    /// 清空输入框
    Clear,
    /// 括号粘贴的整段文本
    Paste(String),
    /// ↑ ↓ Enter Esc
    Nav(NavKey),
    /// 鼠标悬停在第 n 项
    Hover(usize),
    /// 点击历史项
    ClickItem(Platform, usize),
    /// 点击历史项的 ×
    RemoveItem(Platform, usize),
    /// 删除高亮的历史项（Ctrl+D）
    RemoveHighlighted,
}
