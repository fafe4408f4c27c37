//! 帮助浮层

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::i18n::t;
use crate::view::theme::{colors, Styles};

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 渲染帮助浮层
pub fn render(frame: &mut Frame) {
    let texts = &t().help;
    let key_width = texts
        .entries
        .iter()
        .map(|(key, _)| key.width())
        .max()
        .unwrap_or(0);

    let mut lines: Vec<Line> = texts
        .entries
        .iter()
        .map(|(key, desc)| {
            let padding = key_width.saturating_sub(key.width());
            Line::from(vec![
                Span::styled(format!("  {key}{}", " ".repeat(padding)), Styles::hint_key()),
                Span::raw("   "),
                Span::styled(*desc, Style::default().fg(colors().fg)),
            ])
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(texts.close_hint, Styles::muted())).centered());

    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2);
    let area = centered_rect(60, height, frame.area());

    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(format!(" {} ", texts.title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Styles::border_focused())
        .style(Style::default().bg(colors().dropdown_bg));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
