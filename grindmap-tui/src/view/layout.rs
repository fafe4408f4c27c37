//! 主布局渲染
//!
//! 布局由终端尺寸唯一确定，渲染与鼠标命中测试共用同一份 [`FormLayout`]。
//!
//!     ┌ 标题栏 ─────────────────────────────────────┐
//!     │            Enter Your Usernames             │
//!     │  LeetCode                                   │
//!     │  ┌───────────────────────────────────────┐  │
//!     │  │ tourist                               │  │
//!     │  └───────────────────────────────────────┘  │
//!     │  ┌ Recent searches ──────────────────────┐  │  ← 下拉框覆盖在下方控件之上
//!     │  │ tourist                             × │  │
//!     │  └───────────────────────────────────────┘  │
//!     │  ...                                        │
//!     │              ┌ Refresh All ┐                │
//!     └ 状态栏 ─────────────────────────────────────┘

use grindmap_core::Platform;
use ratatui::{
    layout::{Constraint, Direction, Layout, Margin, Position, Rect},
    style::Style,
    text::Line,
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::i18n::t;
use crate::model::{App, FocusTarget};

use super::components;
use super::theme::{colors, Styles};

/// 表单列最大宽度
pub const FORM_WIDTH: u16 = 60;
/// 标签(1) + 输入框(3) + 错误行(1)
const FIELD_HEIGHT: u16 = 5;
const BUTTON_WIDTH: u16 = 24;
const BUTTON_HEIGHT: u16 = 3;
/// 下拉框每行右侧 “ × ” 所占列数
pub const REMOVE_COLUMN_WIDTH: u16 = 3;

/// 单个平台输入区
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldArea {
    pub label: Rect,
    pub input: Rect,
    pub error: Rect,
}

/// 整个界面的几何布局
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormLayout {
    pub title: Rect,
    pub heading: Rect,
    pub fields: [FieldArea; 3],
    pub button: Rect,
    pub status: Rect,
    body: Rect,
}

impl FormLayout {
    /// 根据终端区域计算布局
    pub fn compute(area: Rect) -> Self {
        // 三层布局：标题栏 + 主内容区 + 状态栏
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(area);
        let (title, body, status) = (rows[0], rows[1], rows[2]);

        let width = FORM_WIDTH.min(body.width);
        let x = body.x + (body.width - width) / 2;
        let clip = |rect: Rect| rect.intersection(body);

        let heading = clip(Rect::new(x, body.y + 1, width, 1));

        let mut fields = [FieldArea::default(); 3];
        let mut y = body.y + 3;
        for field in &mut fields {
            *field = FieldArea {
                label: clip(Rect::new(x, y, width, 1)),
                input: clip(Rect::new(x, y + 1, width, 3)),
                error: clip(Rect::new(x, y + 4, width, 1)),
            };
            y = y.saturating_add(FIELD_HEIGHT);
        }

        let button_width = BUTTON_WIDTH.min(width);
        let button = clip(Rect::new(
            x + (width - button_width) / 2,
            y.saturating_add(1),
            button_width,
            BUTTON_HEIGHT,
        ));

        Self {
            title,
            heading,
            fields,
            button,
            status,
            body,
        }
    }

    pub fn field(&self, platform: Platform) -> &FieldArea {
        &self.fields[platform.index()]
    }

    /// 历史下拉框区域：紧贴输入框下方，每项一行，带边框
    pub fn dropdown(&self, platform: Platform, entries: usize) -> Rect {
        let input = self.field(platform).input;
        let rows = u16::try_from(entries).unwrap_or(u16::MAX);
        Rect::new(input.x, input.bottom(), input.width, rows.saturating_add(2))
            .intersection(self.body)
    }
}

/// 鼠标命中的控件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Field(Platform),
    HistoryItem(Platform, usize),
    RemoveItem(Platform, usize),
    FetchButton,
    Nothing,
}

/// 命中测试：下拉框覆盖在其他控件之上，优先判断
pub fn hit_test(app: &App, column: u16, row: u16) -> HitTarget {
    let layout = FormLayout::compute(app.viewport);
    let pos = Position::new(column, row);

    if let Some(platform) = app.form.focused() {
        if app.form.dropdown_visible(platform) {
            let len = app.form.history(platform).len();
            let dropdown = layout.dropdown(platform, len);
            if dropdown.contains(pos) {
                let inner = dropdown.inner(Margin::new(1, 1));
                if inner.contains(pos) {
                    let index = usize::from(row - inner.y);
                    if index < len {
                        let remove_from = inner.right().saturating_sub(REMOVE_COLUMN_WIDTH);
                        return if column >= remove_from {
                            HitTarget::RemoveItem(platform, index)
                        } else {
                            HitTarget::HistoryItem(platform, index)
                        };
                    }
                }
                return HitTarget::Nothing;
            }
        }
    }

    for platform in Platform::ALL {
        if layout.field(platform).input.contains(pos) {
            return HitTarget::Field(platform);
        }
    }

    if layout.button.contains(pos) {
        HitTarget::FetchButton
    } else {
        HitTarget::Nothing
    }
}

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let layout = FormLayout::compute(frame.area());
    let texts = t();

    // 背景
    frame.render_widget(
        Paragraph::new("").style(Style::default().bg(colors().bg)),
        frame.area(),
    );

    render_title_bar(frame, layout.title);

    frame.render_widget(
        Paragraph::new(Line::from(texts.form.heading).centered()).style(Styles::title()),
        layout.heading,
    );

    for platform in Platform::ALL {
        components::input_field::render(app, frame, platform, layout.field(platform));
    }

    components::fetch_button::render(app, frame, layout.button);
    components::statusbar::render(app, frame, layout.status);

    // 下拉框在输入框之后渲染，覆盖在下方控件之上
    if let Some(platform) = app.form.focused() {
        if app.form.dropdown_visible(platform) {
            let area = layout.dropdown(platform, app.form.history(platform).len());
            components::history_dropdown::render(app, frame, platform, area);
        }
    }

    if app.show_help {
        components::help::render(frame);
        return;
    }

    if let FocusTarget::Field(platform) = app.focus {
        let input = layout.field(platform).input;
        let value_width = u16::try_from(app.form.value(platform).width()).unwrap_or(u16::MAX);
        let x = input
            .x
            .saturating_add(1)
            .saturating_add(value_width)
            .min(input.right().saturating_sub(2));
        frame.set_cursor_position(Position::new(x, input.y + 1));
    }
}

/// 渲染标题栏
fn render_title_bar(frame: &mut Frame, area: Rect) {
    let c = colors();
    let title = Paragraph::new(format!(" {} v{}", t().common.app_name, env!("CARGO_PKG_VERSION")))
        .style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(title, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{app_with_history, test_app};

    fn viewport() -> Rect {
        Rect::new(0, 0, 80, 30)
    }

    #[test]
    fn fields_stack_below_heading() {
        let layout = FormLayout::compute(viewport());
        assert_eq!(layout.title, Rect::new(0, 0, 80, 1));
        assert_eq!(layout.status, Rect::new(0, 29, 80, 1));

        let leetcode = layout.field(Platform::LeetCode);
        let codeforces = layout.field(Platform::Codeforces);
        assert_eq!(leetcode.input, Rect::new(10, 5, 60, 3));
        assert_eq!(codeforces.input.y, leetcode.input.y + FIELD_HEIGHT);
        assert!(layout.button.y > layout.field(Platform::CodeChef).error.y);
    }

    #[test]
    fn narrow_terminal_shrinks_form() {
        let layout = FormLayout::compute(Rect::new(0, 0, 30, 30));
        assert_eq!(layout.field(Platform::LeetCode).input.width, 30);
    }

    #[test]
    fn click_on_input_hits_field() {
        let mut ctx = test_app();
        ctx.app.viewport = viewport();
        let input = FormLayout::compute(viewport()).field(Platform::CodeChef).input;
        assert_eq!(
            hit_test(&ctx.app, input.x + 2, input.y + 1),
            HitTarget::Field(Platform::CodeChef)
        );
    }

    #[test]
    fn dropdown_rows_and_remove_column() {
        let mut ctx = app_with_history(r#"{"leetcode": ["a", "b"]}"#);
        ctx.app.viewport = viewport();
        let layout = FormLayout::compute(viewport());
        let dropdown = layout.dropdown(Platform::LeetCode, 2);

        assert_eq!(
            hit_test(&ctx.app, dropdown.x + 3, dropdown.y + 2),
            HitTarget::HistoryItem(Platform::LeetCode, 1)
        );
        assert_eq!(
            hit_test(&ctx.app, dropdown.right() - 2, dropdown.y + 1),
            HitTarget::RemoveItem(Platform::LeetCode, 0)
        );
        // 边框不属于任何历史项
        assert_eq!(hit_test(&ctx.app, dropdown.x, dropdown.y), HitTarget::Nothing);
    }

    #[test]
    fn hidden_dropdown_is_not_hit() {
        let mut ctx = app_with_history(r#"{"codechef": ["a"]}"#);
        ctx.app.viewport = viewport();
        let dropdown = FormLayout::compute(viewport()).dropdown(Platform::CodeChef, 1);
        assert_ne!(
            hit_test(&ctx.app, dropdown.x + 3, dropdown.y + 1),
            HitTarget::HistoryItem(Platform::CodeChef, 0)
        );
    }

    #[test]
    fn button_is_hit() {
        let mut ctx = test_app();
        ctx.app.viewport = viewport();
        let button = FormLayout::compute(viewport()).button;
        assert_eq!(
            hit_test(&ctx.app, button.x + 1, button.y + 1),
            HitTarget::FetchButton
        );
    }
}
