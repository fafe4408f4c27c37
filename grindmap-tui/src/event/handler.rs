//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use grindmap_core::NavKey;

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, FormMessage};
use crate::model::{App, FocusTarget};
use crate::view::layout::{hit_test, HitTarget};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(key, app),
        Event::Paste(text) => match app.focus {
            FocusTarget::Field(_) if !app.show_help => AppMessage::Form(FormMessage::Paste(text)),
            _ => AppMessage::Noop,
        },
        Event::Mouse(mouse) if !app.show_help => handle_mouse_event(mouse, app),
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 帮助浮层打开时只处理关闭和退出
    if app.show_help {
        return if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
            AppMessage::Quit
        } else if DefaultKeymap::HELP.matches(&key)
            || DefaultKeymap::NAV_CLOSE.matches(&key)
            || DefaultKeymap::HELP_ON_BUTTON.matches(&key)
        {
            AppMessage::ToggleHelp
        } else {
            AppMessage::Noop
        };
    }

    // 全局快捷键
    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::HELP.matches(&key) {
        return AppMessage::ToggleHelp;
    }
    if DefaultKeymap::FETCH.matches(&key) {
        return AppMessage::RequestFetch;
    }
    if DefaultKeymap::SWITCH_LANGUAGE.matches(&key) {
        return AppMessage::SwitchLanguage;
    }
    if DefaultKeymap::FOCUS_NEXT.matches(&key) {
        return AppMessage::FocusNext;
    }
    // 部分终端上报 BackTab 时不带 SHIFT
    if DefaultKeymap::FOCUS_PREV.matches(&key) || key.code == KeyCode::BackTab {
        return AppMessage::FocusPrev;
    }

    match app.focus {
        FocusTarget::Field(_) => handle_field_keys(key),
        FocusTarget::FetchButton => handle_button_keys(key),
    }
}

/// 输入框中的按键
fn handle_field_keys(key: KeyEvent) -> AppMessage {
    let nav = |k| AppMessage::Form(FormMessage::Nav(k));

    if DefaultKeymap::NAV_DOWN.matches(&key) {
        return nav(NavKey::Down);
    }
    if DefaultKeymap::NAV_UP.matches(&key) {
        return nav(NavKey::Up);
    }
    if DefaultKeymap::NAV_CONFIRM.matches(&key) {
        return nav(NavKey::Enter);
    }
    if DefaultKeymap::NAV_CLOSE.matches(&key) {
        return nav(NavKey::Escape);
    }
    if DefaultKeymap::REMOVE_ENTRY.matches(&key) {
        return AppMessage::Form(FormMessage::RemoveHighlighted);
    }
    if DefaultKeymap::CLEAR_FIELD.matches(&key) {
        return AppMessage::Form(FormMessage::Clear);
    }
    if DefaultKeymap::BACKSPACE.matches(&key) {
        return AppMessage::Form(FormMessage::Backspace);
    }

    match key.code {
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            AppMessage::Form(FormMessage::Input(c))
        }
        _ => AppMessage::Noop,
    }
}

/// 获取按钮上的按键
fn handle_button_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => AppMessage::RequestFetch,
        KeyCode::Up => AppMessage::FocusPrev,
        KeyCode::Down => AppMessage::FocusNext,
        KeyCode::Esc => AppMessage::ClearStatus,
        _ if DefaultKeymap::HELP_ON_BUTTON.matches(&key) => AppMessage::ToggleHelp,
        _ => AppMessage::Noop,
    }
}

/// 鼠标事件
///
/// 与浏览器一致：按下时决定焦点（按在输入框以外即失焦，下拉框延迟关闭），
/// 松开时才算“点击”，此时下拉框仍处于打开状态。
fn handle_mouse_event(mouse: MouseEvent, app: &App) -> AppMessage {
    let target = hit_test(app, mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => match target {
            HitTarget::Field(platform) => AppMessage::FocusField(platform),
            _ => AppMessage::Blur,
        },
        MouseEventKind::Up(MouseButton::Left) => match target {
            HitTarget::HistoryItem(platform, index) => {
                AppMessage::Form(FormMessage::ClickItem(platform, index))
            }
            HitTarget::RemoveItem(platform, index) => {
                AppMessage::Form(FormMessage::RemoveItem(platform, index))
            }
            HitTarget::FetchButton => AppMessage::RequestFetch,
            HitTarget::Field(_) | HitTarget::Nothing => AppMessage::Noop,
        },
        MouseEventKind::Moved => match target {
            HitTarget::HistoryItem(_, index) | HitTarget::RemoveItem(_, index) => {
                AppMessage::Form(FormMessage::Hover(index))
            }
            _ => AppMessage::Noop,
        },
        _ => AppMessage::Noop,
    }
}
