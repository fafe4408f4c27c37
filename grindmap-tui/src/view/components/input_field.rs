//! 平台输入框组件

use grindmap_core::{IdentifierError, Platform};
use ratatui::{
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::{App, FocusTarget};
use crate::view::layout::FieldArea;
use crate::view::theme::{colors, Styles};

/// 渲染标签、输入框和错误行
pub fn render(app: &App, frame: &mut Frame, platform: Platform, area: &FieldArea) {
    let config = platform.config();
    let value = app.form.value(platform);
    let error = app.form.error(platform);
    let is_focused = app.focus == FocusTarget::Field(platform);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(config.display_name, Styles::title()))),
        area.label,
    );

    let border_style = if error.is_some() {
        Styles::border_error()
    } else if is_focused {
        Styles::border_focused()
    } else {
        Styles::border()
    };

    let content = if value.is_empty() {
        Line::from(Span::styled(config.placeholder, Styles::muted()))
    } else {
        Line::from(Span::styled(value, Style::default().fg(colors().fg)))
    };

    let input = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    frame.render_widget(input, area.input);

    if let Some(error) = error {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(error_text(error), Styles::error()))),
            area.error,
        );
    }
}

/// 校验错误的界面文本
pub fn error_text(error: &IdentifierError) -> String {
    let texts = &t().errors;
    match error {
        IdentifierError::NotAPlatformUrl { platform } => {
            texts.not_platform_url.replace("{platform}", platform)
        }
        IdentifierError::InvalidUrlFormat => texts.invalid_url_format.to_string(),
        IdentifierError::InvalidIdentifierFormat => texts.invalid_username_format.to_string(),
    }
}
