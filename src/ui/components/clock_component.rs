//! Single-label digital clock.

use chrono::NaiveTime;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::clock::format_time;
use crate::ui::core::{Action, Component};

pub struct ClockComponent {
    format: String,
    label: String,
}

impl ClockComponent {
    pub fn new(format: impl Into<String>) -> Self {
        Self {
            format: format.into(),
            label: String::new(),
        }
    }

    /// Refresh the label from a tick
    pub fn set_time(&mut self, time: NaiveTime) {
        self.label = format_time(time, &self.format);
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Component for ClockComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let [_, middle, _] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(3), Constraint::Fill(1)]).areas(rect);
        let width = (self.label.chars().count() as u16 + 8).min(middle.width);
        let [_, center, _] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(width),
            Constraint::Fill(1),
        ])
        .areas(middle);

        let clock = Paragraph::new(self.label.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::Gray)),
            );

        f.render_widget(clock, center);
    }
}
