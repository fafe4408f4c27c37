//! 应用主消息枚举

use grindmap_core::Platform;

use super::FormMessage;

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 时间推进（每轮主循环一次）：触发延迟失焦、收取请求结果
    Tick,

    /// 焦点移到下一个控件（Tab）
    FocusNext,

    /// 焦点移到上一个控件（Shift+Tab）
    FocusPrev,

    /// 鼠标点击输入框
    FocusField(Platform),

    /// 鼠标在输入框以外按下
    Blur,

    /// 输入框 / 下拉框相关消息
    Form(FormMessage),

    /// 请求获取数据（Ctrl+R、按钮上的 Enter、点击按钮）
    RequestFetch,

    /// 显示/隐藏帮助
    ToggleHelp,

    /// 切换界面语言
    SwitchLanguage,

    /// 清除状态消息
    ClearStatus,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
