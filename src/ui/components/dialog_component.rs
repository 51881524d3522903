//! Modal dialog component.
//!
//! Hosts the memo edit prompt and the system dialogs (error, help, logs).
//! The memo prompt is the whole edit flow: opening it pre-fills the current
//! text, Esc closes it without a write, Enter hands the text to the app as
//! [`Action::SaveMemo`]. There is never more than one dialog open.

use crate::constants::MEMO_MAX_CHARS;
use crate::ui::components::dialogs::{memo_dialog, scroll_behavior::ScrollState, system_dialogs};
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};

#[derive(Default)]
pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    pub input_buffer: String,
    /// Cursor position in chars
    pub cursor_position: usize,
    pub scroll: ScrollState,
    logs: Vec<String>,
}

impl DialogComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    /// Snapshot of log lines shown by the logs dialog
    pub fn set_logs(&mut self, logs: Vec<String>) {
        self.logs = logs;
    }

    fn open(&mut self, dialog_type: DialogType) {
        self.clear_dialog();
        if let DialogType::MemoEdit { text, .. } = &dialog_type {
            self.input_buffer = text.clone();
            self.cursor_position = text.chars().count();
        }
        self.dialog_type = Some(dialog_type);
    }

    fn clear_dialog(&mut self) {
        self.dialog_type = None;
        self.input_buffer.clear();
        self.cursor_position = 0;
        self.scroll.reset();
    }

    fn handle_submit(&mut self) -> Action {
        match &self.dialog_type {
            Some(DialogType::MemoEdit { date, .. }) => {
                let action = Action::SaveMemo {
                    date: *date,
                    text: self.input_buffer.trim().to_string(),
                };
                self.clear_dialog();
                action
            }
            _ => {
                self.clear_dialog();
                Action::None
            }
        }
    }

    fn byte_index(&self, char_pos: usize) -> usize {
        self.input_buffer
            .char_indices()
            .nth(char_pos)
            .map_or(self.input_buffer.len(), |(i, _)| i)
    }

    fn insert_char(&mut self, c: char) {
        if self.input_buffer.chars().count() >= MEMO_MAX_CHARS {
            return;
        }
        let index = self.byte_index(self.cursor_position);
        self.input_buffer.insert(index, c);
        self.cursor_position += 1;
    }

    fn delete_before_cursor(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
            let index = self.byte_index(self.cursor_position);
            self.input_buffer.remove(index);
        }
    }

    fn delete_at_cursor(&mut self) {
        if self.cursor_position < self.input_buffer.chars().count() {
            let index = self.byte_index(self.cursor_position);
            self.input_buffer.remove(index);
        }
    }

    fn handle_memo_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => {
                self.clear_dialog();
                Action::None
            }
            KeyCode::Enter => self.handle_submit(),
            KeyCode::Backspace => {
                self.delete_before_cursor();
                Action::None
            }
            KeyCode::Delete => {
                self.delete_at_cursor();
                Action::None
            }
            KeyCode::Left => {
                self.cursor_position = self.cursor_position.saturating_sub(1);
                Action::None
            }
            KeyCode::Right => {
                self.cursor_position = (self.cursor_position + 1).min(self.input_buffer.chars().count());
                Action::None
            }
            KeyCode::Home => {
                self.cursor_position = 0;
                Action::None
            }
            KeyCode::End => {
                self.cursor_position = self.input_buffer.chars().count();
                Action::None
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input_buffer.clear();
                self.cursor_position = 0;
                Action::None
            }
            KeyCode::Char(c) => {
                self.insert_char(c);
                Action::None
            }
            _ => Action::None,
        }
    }

    fn handle_scrollable_key(&mut self, key: KeyEvent, close_keys: &[KeyCode]) -> Action {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll.up();
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll.down();
                Action::None
            }
            code if code == KeyCode::Esc || close_keys.contains(&code) => {
                self.clear_dialog();
                Action::None
            }
            _ => Action::None,
        }
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match &self.dialog_type {
            Some(DialogType::MemoEdit { .. }) => self.handle_memo_key(key),
            Some(DialogType::Error(_)) => {
                // Any key dismisses the error
                self.clear_dialog();
                Action::None
            }
            Some(DialogType::Help) => {
                self.handle_scrollable_key(key, &[KeyCode::Char('?'), KeyCode::Char('q'), KeyCode::F(1)])
            }
            Some(DialogType::Logs) => {
                self.handle_scrollable_key(key, &[KeyCode::Char('G'), KeyCode::Char('q')])
            }
            None => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                self.open(dialog_type);
                Action::None
            }
            other => other,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        match self.dialog_type.clone() {
            Some(DialogType::MemoEdit { date, .. }) => {
                memo_dialog::render_memo_edit_dialog(f, rect, date, &self.input_buffer, self.cursor_position);
            }
            Some(DialogType::Error(message)) => system_dialogs::render_error_dialog(f, rect, &message),
            Some(DialogType::Help) => system_dialogs::render_help_dialog(f, rect, &mut self.scroll),
            Some(DialogType::Logs) => system_dialogs::render_logs_dialog(f, rect, &self.logs, &mut self.scroll),
            None => {}
        }
    }
}
