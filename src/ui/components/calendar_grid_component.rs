//! Month grid with memo markers.
//!
//! The whole grid is rebuilt from the current [`MonthGrid`] and memo map on
//! every frame; cell areas are recorded during render so mouse clicks can be
//! mapped back to a day.

use std::collections::HashMap;

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::calendar::{MonthGrid, WEEKDAY_LABELS};
use crate::ui::core::{Action, Component};
use crate::ui::layout::LayoutManager;

/// Visual state of a single day cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellFlags {
    pub has_memo: bool,
    pub is_today: bool,
    pub is_cursor: bool,
}

/// Style of a day cell; the memo marker is the cell background.
pub fn cell_style(flags: CellFlags, memo_color: Color) -> Style {
    let mut style = Style::default().fg(Color::White);

    if flags.has_memo {
        style = style.bg(memo_color).fg(Color::Black);
    }
    if flags.is_today {
        style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        if !flags.has_memo {
            style = style.fg(Color::Cyan);
        }
    }
    if flags.is_cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }

    style
}

pub struct CalendarGridComponent {
    grid: MonthGrid,
    memos: HashMap<u32, String>,
    cursor_day: u32,
    today: Option<NaiveDate>,
    memo_color: Color,
    show_preview: bool,
    /// Filled during render
    cell_areas: Vec<(Rect, u32)>,
}

impl CalendarGridComponent {
    pub fn new(grid: MonthGrid, memo_color: Color) -> Self {
        Self {
            grid,
            memos: HashMap::new(),
            cursor_day: 1,
            today: None,
            memo_color,
            show_preview: true,
            cell_areas: Vec::new(),
        }
    }

    pub fn set_today(&mut self, today: Option<NaiveDate>) {
        self.today = today;
    }

    pub fn set_show_preview(&mut self, show: bool) {
        self.show_preview = show;
    }

    /// Replace the displayed month; the cursor keeps its day where possible
    pub fn update_data(&mut self, grid: MonthGrid, memos: HashMap<u32, String>) {
        self.cursor_day = self.cursor_day.clamp(1, grid.days_in_month());
        self.grid = grid;
        self.memos = memos;
    }

    pub fn grid(&self) -> &MonthGrid {
        &self.grid
    }

    pub fn memos(&self) -> &HashMap<u32, String> {
        &self.memos
    }

    pub fn has_memo(&self, day: u32) -> bool {
        self.memos.get(&day).is_some_and(|m| !m.is_empty())
    }

    pub fn cursor_day(&self) -> u32 {
        self.cursor_day
    }

    pub fn set_cursor_day(&mut self, day: u32) {
        self.cursor_day = day.clamp(1, self.grid.days_in_month());
    }

    pub fn cursor_date(&self) -> Option<NaiveDate> {
        self.grid.date_of(self.cursor_day)
    }

    /// Area the day occupied in the last render
    pub fn cell_area(&self, day: u32) -> Option<Rect> {
        self.cell_areas.iter().find(|(_, d)| *d == day).map(|(r, _)| *r)
    }

    /// Day under a terminal position, from the last render
    pub fn day_at_position(&self, column: u16, row: u16) -> Option<u32> {
        self.cell_areas
            .iter()
            .find(|(r, _)| LayoutManager::contains(*r, column, row))
            .map(|(_, d)| *d)
    }

    fn move_cursor(&mut self, delta: i64) {
        let target = i64::from(self.cursor_day) + delta;
        if target >= 1 && target <= i64::from(self.grid.days_in_month()) {
            self.cursor_day = target as u32;
        }
    }

    fn flags(&self, day: u32) -> CellFlags {
        CellFlags {
            has_memo: self.has_memo(day),
            is_today: self.today.is_some_and(|t| self.grid.date_of(day) == Some(t)),
            is_cursor: day == self.cursor_day,
        }
    }

    fn cell_lines(&self, day: u32, area: Rect) -> Vec<Line<'static>> {
        let mut lines = vec![Line::from(format!("{:>2}", day))];

        if self.show_preview && area.height > 1 {
            if let Some(memo) = self.memos.get(&day).filter(|m| !m.is_empty()) {
                let width = area.width as usize;
                let first_line = memo.lines().next().unwrap_or_default();
                let preview: String = if first_line.chars().count() > width {
                    first_line.chars().take(width.saturating_sub(1)).chain(['…']).collect()
                } else {
                    first_line.to_string()
                };
                lines.push(Line::from(preview));
            }
        }

        lines
    }
}

impl Component for CalendarGridComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                self.move_cursor(-1);
                Action::None
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.move_cursor(1);
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_cursor(-7);
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_cursor(7);
                Action::None
            }
            KeyCode::Home => {
                self.cursor_day = 1;
                Action::None
            }
            KeyCode::End => {
                self.cursor_day = self.grid.days_in_month();
                Action::None
            }
            KeyCode::Enter | KeyCode::Char('e') => match self.cursor_date() {
                Some(date) => Action::OpenMemo(date),
                None => Action::None,
            },
            _ => Action::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Action::None;
        }

        match self.day_at_position(mouse.column, mouse.row) {
            Some(day) => {
                self.cursor_day = day;
                self.grid.date_of(day).map_or(Action::None, Action::OpenMemo)
            }
            None => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(" {} ", self.grid.view()))
            .title_alignment(Alignment::Center)
            .title_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        self.cell_areas.clear();
        let rows = LayoutManager::grid_rows(inner, self.grid.row_count());

        // Weekday header
        if let Some(header) = rows.first() {
            for (col, area) in LayoutManager::grid_columns(*header).into_iter().enumerate() {
                let style = if col == 0 || col == 6 {
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD)
                };
                f.render_widget(
                    Paragraph::new(WEEKDAY_LABELS[col]).alignment(Alignment::Center).style(style),
                    area,
                );
            }
        }

        for (row_index, week) in self.grid.weeks().iter().enumerate() {
            let Some(row_area) = rows.get(row_index + 1) else {
                break;
            };

            for (area, day) in LayoutManager::grid_columns(*row_area).into_iter().zip(week.iter()) {
                let Some(day) = *day else {
                    continue;
                };

                let style = cell_style(self.flags(day), self.memo_color);
                let cell_block = Block::default().borders(Borders::NONE).style(style);
                let content_area = cell_block.inner(area);
                let paragraph = Paragraph::new(self.cell_lines(day, content_area))
                    .block(cell_block)
                    .alignment(Alignment::Center);

                f.render_widget(paragraph, area);
                self.cell_areas.push((area, day));
            }
        }
    }
}
