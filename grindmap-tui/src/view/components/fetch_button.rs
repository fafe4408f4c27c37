//! 获取按钮组件

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染按钮：不可用时变暗，请求进行中显示“加载中”
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let enabled = app.form.fetch_enabled();

    let label = if app.form.is_loading() {
        texts.common.loading
    } else {
        texts.form.fetch_button
    };

    let (text_style, border_style) = if !enabled {
        (Styles::muted().add_modifier(Modifier::DIM), Styles::border())
    } else if app.focus.is_button() {
        (
            Style::default().fg(c.selected_fg).bg(c.highlight).add_modifier(Modifier::BOLD),
            Styles::border_focused(),
        )
    } else {
        (
            Style::default().fg(c.fg).add_modifier(Modifier::BOLD),
            Styles::border(),
        )
    };

    let button = Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(text_style)
        .block(Block::default().borders(Borders::ALL).border_style(border_style));
    frame.render_widget(button, area);
}
