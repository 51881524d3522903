//! Memo edit prompt

use chrono::NaiveDate;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Margin, Rect},
    style::{Color, Style},
    widgets::{Clear, Paragraph},
    Frame,
};

use super::common::{self, shortcuts};
use crate::ui::layout::LayoutManager;

pub fn render_memo_edit_dialog(f: &mut Frame, area: Rect, date: NaiveDate, input_buffer: &str, cursor_position: usize) {
    let dialog_area = LayoutManager::centered_rect_lines(60, 9, area);
    f.render_widget(Clear, dialog_area);

    let title = format!(" ✏️ Memo for {} ", date.format("%A, %B %-d %Y"));
    let block = common::create_dialog_block(title, Color::Yellow);
    let inner = dialog_area.inner(Margin {
        vertical: 1,
        horizontal: 1,
    });
    f.render_widget(block, dialog_area);

    let [hint_area, input_area, instructions_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(3), Constraint::Length(1)]).areas(inner);

    let hint = Paragraph::new("Leave empty to clear the memo")
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);
    f.render_widget(hint, hint_area);

    f.render_widget(
        common::create_input_paragraph(input_buffer, cursor_position, "Memo"),
        input_area,
    );

    let instructions = common::create_instructions_paragraph(&[
        shortcuts::ENTER_SAVE,
        shortcuts::SEPARATOR,
        shortcuts::ESC_CANCEL,
    ]);
    f.render_widget(instructions, instructions_area);
}
