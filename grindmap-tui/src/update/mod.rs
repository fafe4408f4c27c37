//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态，是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod form;               // 输入框与下拉框子消息处理
//!
//!         pub fn update(app: &mut App, msg: AppMessage) {...}
//!
//!
//! 两种“焦点”：
//!     app.focus           键盘焦点，决定按键发往哪个控件（含获取按钮）
//!     app.form.focused()  下拉框焦点，由 core 管理，失焦后延迟关闭
//!
//!     键盘切换焦点时两者同步移动：
//!         move_focus(app, target)
//!             ├─ form.focus_lost(now)     旧输入框排期关闭下拉框
//!             ├─ app.focus = target
//!             └─ form.focus_gained(p)     新输入框立即打开下拉框，并取消旧的排期
//!
//!     鼠标按在输入框以外时只发 Blur，键盘焦点不动；
//!     延迟窗口内松开鼠标，点击仍落在打开着的下拉框上。
//!
//!
//! Tick（每轮主循环一次）：
//!     - form.tick(now)        触发到期的延迟失焦
//!     - session.poll_outcome  收取 relay 请求结果，更新 loading 与状态栏
//!

mod form;

use std::time::Instant;

use grindmap_core::{FetchDecision, FetchRejection};

use crate::backend::FetchOutcome;
use crate::i18n::{current_language, set_language, t};
use crate::message::AppMessage;
use crate::model::{App, FocusTarget};

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::Tick => tick(app, Instant::now()),

        AppMessage::FocusNext => {
            let target = app.focus.next();
            move_focus(app, target);
        }

        AppMessage::FocusPrev => {
            let target = app.focus.prev();
            move_focus(app, target);
        }

        AppMessage::FocusField(platform) => {
            move_focus(app, FocusTarget::Field(platform));
        }

        AppMessage::Blur => {
            if app.form.focused().is_some() {
                app.form.focus_lost(Instant::now());
            }
        }

        AppMessage::Form(form_msg) => form::update(app, form_msg),

        AppMessage::RequestFetch => request_fetch(app),

        AppMessage::ToggleHelp => {
            app.show_help = !app.show_help;
        }

        AppMessage::SwitchLanguage => {
            let next = current_language().next();
            set_language(next);
            app.config.language = next.code().to_string();
            app.persist_config();
            app.set_status(t().status.language_switched);
        }

        AppMessage::ClearStatus => {
            app.clear_status();
        }

        AppMessage::Noop => {}
    }
}

/// 移动键盘焦点，同步下拉框焦点
fn move_focus(app: &mut App, target: FocusTarget) {
    if app.form.focused().is_some() {
        app.form.focus_lost(Instant::now());
    }
    app.focus = target;
    if let Some(platform) = target.platform() {
        app.form.focus_gained(platform);
    }
}

/// 推进时间
fn tick(app: &mut App, now: Instant) {
    if app.form.tick(now) {
        log::debug!("History dropdown closed after blur delay");
    }

    while let Some(outcome) = app.session.poll_outcome() {
        report_outcome(app, &outcome);
    }
}

fn report_outcome(app: &mut App, outcome: &FetchOutcome) {
    if !app.session.is_in_flight() {
        app.form.set_loading(false);
    }

    for result in outcome.failed() {
        log::warn!(
            "{} fetch failed for {:?}: {}",
            result.platform,
            app.session.username(result.platform).unwrap_or_default(),
            result.error.as_deref().unwrap_or_default()
        );
    }

    let texts = &t().status;
    let failed: Vec<&str> = outcome
        .failed()
        .map(|r| r.platform.display_name())
        .collect();

    if failed.is_empty() {
        let count = outcome.succeeded().to_string();
        app.set_status(texts.fetch_succeeded.replace("{count}", &count));
    } else {
        app.set_status(texts.fetch_failed.replace("{platforms}", &failed.join(", ")));
    }
}

/// 经过 Fetch Gate 提交请求
fn request_fetch(app: &mut App) {
    let texts = &t().status;
    match app.form.request_fetch(&mut app.session) {
        FetchDecision::Accepted(request) => {
            app.form.set_loading(true);
            let count = request.usernames.len().to_string();
            app.set_status(texts.fetch_started.replace("{count}", &count));
        }
        FetchDecision::Rejected(reason) => {
            log::debug!("Fetch rejected: {reason:?}");
            let message = match reason {
                FetchRejection::Loading => texts.rejected_loading,
                FetchRejection::HasErrors => texts.rejected_errors,
                FetchRejection::AllEmpty => texts.rejected_empty,
            };
            app.set_status(message);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use grindmap_core::Platform;

    use super::*;
    use crate::message::FormMessage;
    use crate::test_utils::{app_with_history, test_app};

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            update(app, AppMessage::Form(FormMessage::Input(c)));
        }
    }

    #[test]
    fn quit_sets_flag() {
        let mut ctx = test_app();
        update(&mut ctx.app, AppMessage::Quit);
        assert!(ctx.app.should_quit);
    }

    #[test]
    fn tab_moves_dropdown_focus_with_keyboard() {
        let mut ctx = app_with_history(r#"{"leetcode": ["a"], "codeforces": ["b"]}"#);
        assert!(ctx.app.form.dropdown_visible(Platform::LeetCode));

        update(&mut ctx.app, AppMessage::FocusNext);

        assert_eq!(ctx.app.focus, FocusTarget::Field(Platform::Codeforces));
        assert_eq!(ctx.app.form.focused(), Some(Platform::Codeforces));
        assert!(ctx.app.form.dropdown_visible(Platform::Codeforces));
        assert!(!ctx.app.form.dropdown_visible(Platform::LeetCode));
    }

    #[test]
    fn blur_closes_dropdown_only_after_delay() {
        let mut ctx = app_with_history(r#"{"leetcode": ["a"]}"#);
        update(&mut ctx.app, AppMessage::Blur);
        assert!(ctx.app.form.dropdown_visible(Platform::LeetCode));

        let later = Instant::now() + ctx.app.config.blur_delay() + Duration::from_millis(50);
        tick(&mut ctx.app, later);
        assert!(!ctx.app.form.dropdown_visible(Platform::LeetCode));
        // 键盘焦点不随鼠标失焦移动
        assert_eq!(ctx.app.focus, FocusTarget::Field(Platform::LeetCode));
    }

    #[test]
    fn fetch_submits_and_tracks_loading() {
        let mut ctx = test_app();
        type_text(&mut ctx.app, "tourist");

        update(&mut ctx.app, AppMessage::RequestFetch);

        assert!(ctx.app.form.is_loading());
        let submitted = ctx.fetcher.submitted();
        assert_eq!(submitted.len(), 1);
        assert_eq!(submitted[0].username(Platform::LeetCode), Some("tourist"));
        assert_eq!(ctx.app.form.history(Platform::LeetCode), ["tourist"]);

        // 请求进行中再次提交被拒绝
        update(&mut ctx.app, AppMessage::RequestFetch);
        assert_eq!(ctx.fetcher.submitted().len(), 1);

        ctx.fetcher.complete_all();
        update(&mut ctx.app, AppMessage::Tick);
        assert!(!ctx.app.form.is_loading());
        assert!(ctx.app.status_message.is_some());
    }

    #[test]
    fn empty_form_is_rejected() {
        let mut ctx = test_app();
        update(&mut ctx.app, AppMessage::RequestFetch);
        assert!(ctx.fetcher.submitted().is_empty());
        assert!(!ctx.app.form.is_loading());
        assert!(ctx.app.status_message.is_some());
    }

    #[test]
    fn invalid_field_blocks_fetch() {
        let mut ctx = test_app();
        type_text(&mut ctx.app, "bad name!");
        assert!(ctx.app.form.error(Platform::LeetCode).is_some());

        update(&mut ctx.app, AppMessage::RequestFetch);
        assert!(ctx.fetcher.submitted().is_empty());
    }

    #[test]
    fn switch_language_persists_config() {
        let mut ctx = test_app();
        let before = current_language();

        update(&mut ctx.app, AppMessage::SwitchLanguage);

        let saved = ctx.config.saved().expect("config saved");
        assert_eq!(saved.language, ctx.app.config.language);
        assert_ne!(saved.language, before.code());

        // 还原全局语言，避免影响其他测试
        set_language(before);
    }

    #[test]
    fn toggle_help_and_clear_status() {
        let mut ctx = test_app();
        update(&mut ctx.app, AppMessage::ToggleHelp);
        assert!(ctx.app.show_help);
        update(&mut ctx.app, AppMessage::ToggleHelp);
        assert!(!ctx.app.show_help);

        ctx.app.set_status("x");
        update(&mut ctx.app, AppMessage::ClearStatus);
        assert!(ctx.app.status_message.is_none());
    }
}
