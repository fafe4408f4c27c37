//! 历史下拉框组件

use grindmap_core::Platform;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::i18n::t;
use crate::model::App;
use crate::view::layout::REMOVE_COLUMN_WIDTH;
use crate::view::theme::{colors, Styles};

/// 渲染下拉框
///
/// 每行左侧为用户名，右侧 `REMOVE_COLUMN_WIDTH` 列为 “ × ”。
pub fn render(app: &App, frame: &mut Frame, platform: Platform, area: Rect) {
    let c = colors();
    let entries = app.form.history(platform);
    let highlighted = app.form.highlighted();

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", t().form.recent_searches))
        .title_style(Styles::muted())
        .borders(Borders::ALL)
        .border_style(Styles::border_focused())
        .style(Style::default().bg(c.dropdown_bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let name_width = usize::from(inner.width.saturating_sub(REMOVE_COLUMN_WIDTH));
    let lines: Vec<Line> = entries
        .iter()
        .enumerate()
        .map(|(index, name)| {
            let style = if highlighted == Some(index) {
                Styles::selected()
            } else {
                Style::default().fg(c.fg)
            };
            let padding = name_width.saturating_sub(name.width() + 1);
            Line::from(vec![
                Span::styled(format!(" {name}{}", " ".repeat(padding)), style),
                Span::styled(" × ", style.fg(c.muted)),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}
