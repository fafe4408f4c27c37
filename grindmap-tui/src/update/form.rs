//! 输入框与下拉框消息处理

use grindmap_core::{KeyOutcome, NavKey, Platform};

use crate::i18n::t;
use crate::message::{AppMessage, FormMessage};
use crate::model::App;

/// 处理表单消息
pub fn update(app: &mut App, msg: FormMessage) {
    match msg {
        FormMessage::Input(c) => edit(app, |value| value.push(c)),
        FormMessage::Backspace => edit(app, |value| {
            value.pop();
        }),
        FormMessage::Clear => edit(app, String::clear),
        FormMessage::Paste(text) => edit(app, |value| {
            // 终端粘贴可能带换行，输入框是单行的
            value.extend(text.chars().filter(|c| !c.is_control()));
        }),

        FormMessage::Nav(key) => {
            let Some(platform) = app.focus.platform() else {
                return;
            };
            ensure_form_focus(app, platform);
            if app.form.handle_key(key, &mut app.session) == KeyOutcome::Ignored {
                fall_through(app, key);
            }
        }

        FormMessage::Hover(index) => {
            app.form.hover(index);
        }

        FormMessage::ClickItem(platform, index) => {
            app.form.click_item(platform, index, &mut app.session);
        }

        FormMessage::RemoveItem(platform, index) => {
            app.form.remove_item(platform, index);
            app.set_status(t().status.entry_removed);
        }

        FormMessage::RemoveHighlighted => {
            if app.form.remove_highlighted() {
                app.set_status(t().status.entry_removed);
            }
        }
    }
}

/// 以当前值为基础修改输入框，再交给 core 规范化
fn edit(app: &mut App, apply: impl FnOnce(&mut String)) {
    let Some(platform) = app.focus.platform() else {
        return;
    };
    ensure_form_focus(app, platform);

    let mut raw = app.form.value(platform).to_string();
    apply(&mut raw);
    app.form.input(platform, &raw, &mut app.session);
}

/// 鼠标失焦后继续打字，下拉框重新打开
fn ensure_form_focus(app: &mut App, platform: Platform) {
    if app.form.focused() != Some(platform) {
        app.form.focus_gained(platform);
    }
}

/// 下拉框没有消费的按键
fn fall_through(app: &mut App, key: NavKey) {
    let msg = match key {
        NavKey::Down => AppMessage::FocusNext,
        NavKey::Up => AppMessage::FocusPrev,
        NavKey::Enter => AppMessage::RequestFetch,
        NavKey::Escape => AppMessage::ClearStatus,
    };
    super::update(app, msg);
}
