//! Month/year selector bar.
//!
//! Shows `< Prev  [ Month ]  [ Year ]  Next >`. The two fields hold raw
//! text so that anything the user types reaches validation unchanged; the
//! app component decides whether the pending pair becomes the new view.

use crate::calendar::{month_name, ViewState, MONTH_NAMES};
use crate::constants::{YEAR_MAX, YEAR_MIN};
use crate::ui::core::{Action, Component};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

const PREV_LABEL: &str = " < Prev ";
const NEXT_LABEL: &str = " Next > ";
const GAP: &str = "  ";
const MONTH_FIELD_WIDTH: usize = 11;
const YEAR_FIELD_WIDTH: usize = 6;
const YEAR_INPUT_MAX_CHARS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorField {
    Month,
    Year,
}

/// Clickable parts of the bar, recorded on every render
#[derive(Debug, Default, Clone, Copy)]
struct HitAreas {
    prev: Rect,
    month: Rect,
    year: Rect,
    next: Rect,
}

pub struct SelectorComponent {
    /// Last valid selection
    committed: ViewState,
    month_input: String,
    year_input: String,
    active: Option<SelectorField>,
    hit_areas: HitAreas,
}

impl SelectorComponent {
    pub fn new(view: ViewState) -> Self {
        Self {
            committed: view,
            month_input: view.month_name().to_string(),
            year_input: view.year().to_string(),
            active: None,
            hit_areas: HitAreas::default(),
        }
    }

    /// Show a new committed view and drop any pending edit
    pub fn set_view(&mut self, view: ViewState) {
        self.committed = view;
        self.revert();
    }

    /// Restore the display to the last valid selection
    pub fn revert(&mut self) {
        self.month_input = self.committed.month_name().to_string();
        self.year_input = self.committed.year().to_string();
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn active_field(&self) -> Option<SelectorField> {
        self.active
    }

    pub fn activate(&mut self, field: SelectorField) {
        self.active = Some(field);
    }

    pub fn month_input(&self) -> &str {
        &self.month_input
    }

    pub fn year_input(&self) -> &str {
        &self.year_input
    }

    fn apply(&mut self) -> Action {
        self.active = None;
        Action::ApplySelection {
            year: self.year_input.trim().to_string(),
            month: self.month_input.trim().to_string(),
        }
    }

    /// Leave editing and drop the pending text
    pub fn deactivate(&mut self) {
        self.active = None;
        self.revert();
    }

    fn cancel(&mut self) -> Action {
        self.deactivate();
        Action::None
    }

    /// Step through the enumerated month names or years
    fn cycle(&mut self, forward: bool) {
        match self.active {
            Some(SelectorField::Month) => {
                let current = MONTH_NAMES
                    .iter()
                    .position(|m| m.eq_ignore_ascii_case(self.month_input.trim()))
                    .unwrap_or(self.committed.month() as usize - 1);
                let next = if forward { (current + 1) % 12 } else { (current + 11) % 12 };
                self.month_input = month_name(next as u32 + 1).to_string();
            }
            Some(SelectorField::Year) => {
                let current = self.year_input.trim().parse::<i32>().unwrap_or(self.committed.year());
                let next = if forward { current + 1 } else { current - 1 };
                self.year_input = next.clamp(YEAR_MIN, YEAR_MAX).to_string();
            }
            None => {}
        }
    }

    fn active_input_mut(&mut self) -> Option<&mut String> {
        match self.active {
            Some(SelectorField::Month) => Some(&mut self.month_input),
            Some(SelectorField::Year) => Some(&mut self.year_input),
            None => None,
        }
    }

    fn field_span(&self, field: SelectorField, text: &str, width: usize) -> Span<'static> {
        let label = format!("[{:^width$}]", text, width = width);
        let style = if self.active == Some(field) {
            Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        };
        Span::styled(label, style)
    }
}

impl Component for SelectorComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if self.active.is_none() {
            return match key.code {
                KeyCode::Tab => {
                    self.activate(SelectorField::Month);
                    Action::None
                }
                _ => Action::None,
            };
        }

        match key.code {
            KeyCode::Esc => self.cancel(),
            KeyCode::Enter => self.apply(),
            KeyCode::Tab | KeyCode::BackTab => {
                self.active = match self.active {
                    Some(SelectorField::Month) => Some(SelectorField::Year),
                    _ => Some(SelectorField::Month),
                };
                Action::None
            }
            KeyCode::Up => {
                self.cycle(false);
                Action::None
            }
            KeyCode::Down => {
                self.cycle(true);
                Action::None
            }
            KeyCode::Backspace => {
                if let Some(input) = self.active_input_mut() {
                    input.pop();
                }
                Action::None
            }
            KeyCode::Char(c) => {
                let max_chars = match self.active {
                    Some(SelectorField::Year) => YEAR_INPUT_MAX_CHARS,
                    _ => MONTH_FIELD_WIDTH,
                };
                if let Some(input) = self.active_input_mut() {
                    if input.chars().count() < max_chars {
                        input.push(c);
                    }
                }
                Action::None
            }
            // Swallow everything else while editing so grid keys don't fire
            _ => Action::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Action::None;
        }

        let (col, row) = (mouse.column, mouse.row);
        if LayoutManager::contains(self.hit_areas.prev, col, row) {
            Action::PreviousMonth
        } else if LayoutManager::contains(self.hit_areas.next, col, row) {
            Action::NextMonth
        } else if LayoutManager::contains(self.hit_areas.month, col, row) {
            self.activate(SelectorField::Month);
            Action::None
        } else if LayoutManager::contains(self.hit_areas.year, col, row) {
            self.activate(SelectorField::Year);
            Action::None
        } else {
            Action::None
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" memocal ")
            .border_style(Style::default().fg(if self.is_active() { Color::Cyan } else { Color::Gray }));
        let inner = block.inner(rect);

        let nav_style = Style::default().fg(Color::Yellow);
        let month_span = self.field_span(SelectorField::Month, &self.month_input, MONTH_FIELD_WIDTH);
        let year_span = self.field_span(SelectorField::Year, &self.year_input, YEAR_FIELD_WIDTH);

        let widths = [
            PREV_LABEL.len(),
            GAP.len(),
            month_span.content.chars().count(),
            GAP.len(),
            year_span.content.chars().count(),
            GAP.len(),
            NEXT_LABEL.len(),
        ];
        let total: usize = widths.iter().sum();

        // The line is centered, so hit areas start at the same offset
        let start = inner.x + (inner.width.saturating_sub(total as u16)) / 2;
        let mut x = start;
        let mut area_at = |w: usize| {
            let r = Rect::new(x, inner.y, w as u16, inner.height.max(1));
            x = x.saturating_add(w as u16);
            r
        };
        let prev = area_at(widths[0]);
        area_at(widths[1]);
        let month = area_at(widths[2]);
        area_at(widths[3]);
        let year = area_at(widths[4]);
        area_at(widths[5]);
        let next = area_at(widths[6]);
        self.hit_areas = HitAreas { prev, month, year, next };

        let line = Line::from(vec![
            Span::styled(PREV_LABEL, nav_style),
            Span::raw(GAP),
            month_span,
            Span::raw(GAP),
            year_span,
            Span::raw(GAP),
            Span::styled(NEXT_LABEL, nav_style),
        ]);

        let paragraph = Paragraph::new(line).alignment(Alignment::Center).block(block);
        f.render_widget(paragraph, rect);
    }
}
