//! Status bar component

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use crate::constants::{STATUS_HINTS, STATUS_HINTS_SELECTOR};

/// What the status bar should say this frame
#[derive(Debug, Clone, Default)]
pub struct StatusInfo<'a> {
    pub message: Option<&'a str>,
    pub is_error: bool,
    pub selector_active: bool,
    pub memo_count: usize,
}

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar
    pub fn render(f: &mut Frame, area: Rect, info: &StatusInfo<'_>) {
        let status_text = match info.message {
            Some(message) => message.to_string(),
            None if info.selector_active => STATUS_HINTS_SELECTOR.to_string(),
            None => format!("{} memo(s) this month • {}", info.memo_count, STATUS_HINTS),
        };

        let status_color = if info.is_error {
            Color::Red
        } else if info.message.is_some() {
            Color::Green
        } else {
            Color::Gray
        };

        let status_bar = Paragraph::new(status_text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }
}
