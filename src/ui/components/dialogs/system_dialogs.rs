use super::common::{self, shortcuts, InstructionShortcut};
use super::scroll_behavior::ScrollState;
use crate::constants::{DIALOG_TITLE_HELP, DIALOG_TITLE_LOGS};
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Clear, Paragraph, Scrollbar, ScrollbarOrientation, Wrap},
    Frame,
};

const HELP_TEXT: &str = "\
Navigation
  ← → ↑ ↓ / h l k j   Move between days
  Home / End          First / last day of the month
  n / p               Next / previous month
  N / P               Next / previous year
  t                   Jump to today

Memos
  Enter / e / click   Edit the memo of the selected day
  Enter (in dialog)   Save
  Esc (in dialog)     Cancel without saving
  Days with a memo are highlighted.

Month / year selector
  Tab                 Focus the selector, then switch field
  ↑ / ↓               Cycle months or years
  type                Enter a month name or a year directly
  Enter               Apply the selection
  Esc                 Cancel and restore the previous selection

General
  G                   Show logs
  ? / F1              Show this help
  q / Ctrl+C          Quit";

/// Bordered popup with a scrollable body and an instruction line
fn render_scrollable_dialog(
    f: &mut Frame,
    dialog_area: Rect,
    title: String,
    color: Color,
    body: &str,
    instructions: &[InstructionShortcut],
    scroll: &mut ScrollState,
) {
    f.render_widget(Clear, dialog_area);
    f.render_widget(common::create_dialog_block(title, color), dialog_area);

    let content_area = Rect::new(
        dialog_area.x + 1,
        dialog_area.y + 1,
        dialog_area.width.saturating_sub(2),
        dialog_area.height.saturating_sub(3),
    );
    let instructions_area = Rect::new(
        dialog_area.x + 1,
        dialog_area.y + dialog_area.height.saturating_sub(2),
        dialog_area.width.saturating_sub(2),
        1,
    );

    let lines: Vec<&str> = body.lines().collect();
    let total_lines = lines.len();
    let visible_height = content_area.height as usize;
    let offset = scroll.clamp(total_lines, visible_height);

    let visible_text = lines
        .iter()
        .skip(offset)
        .take(visible_height)
        .copied()
        .collect::<Vec<_>>()
        .join("\n");

    let body_paragraph = Paragraph::new(visible_text)
        .style(Style::default().fg(Color::White))
        .wrap(Wrap { trim: false });
    f.render_widget(body_paragraph, content_area);
    f.render_widget(common::create_instructions_paragraph(instructions), instructions_area);

    if total_lines > visible_height {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .track_symbol(Some("│"))
            .thumb_symbol("▐")
            .style(Style::default().fg(Color::Gray))
            .thumb_style(Style::default().fg(Color::White));

        f.render_stateful_widget(scrollbar, content_area, &mut scroll.scrollbar);
    }
}

pub fn render_error_dialog(f: &mut Frame, area: Rect, message: &str) {
    let dialog_area = LayoutManager::centered_rect_lines(60, 7, area);
    f.render_widget(Clear, dialog_area);
    f.render_widget(common::create_dialog_block(" ⚠ Error ".to_string(), Color::Red), dialog_area);

    let message_area = Rect::new(
        dialog_area.x + 2,
        dialog_area.y + 1,
        dialog_area.width.saturating_sub(4),
        dialog_area.height.saturating_sub(3),
    );
    let instructions_area = Rect::new(
        dialog_area.x + 1,
        dialog_area.y + dialog_area.height.saturating_sub(2),
        dialog_area.width.saturating_sub(2),
        1,
    );

    let message_paragraph = Paragraph::new(message)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    let instructions = Paragraph::new("Press any key to continue")
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);

    f.render_widget(message_paragraph, message_area);
    f.render_widget(instructions, instructions_area);
}

pub fn render_help_dialog(f: &mut Frame, area: Rect, scroll: &mut ScrollState) {
    let dialog_area = LayoutManager::centered_rect(70, 80, area);
    render_scrollable_dialog(
        f,
        dialog_area,
        format!(" {} ", DIALOG_TITLE_HELP),
        Color::Cyan,
        HELP_TEXT,
        &[shortcuts::JK_SCROLL, shortcuts::SEPARATOR, shortcuts::ESC_CLOSE],
        scroll,
    );
}

pub fn render_logs_dialog(f: &mut Frame, area: Rect, logs: &[String], scroll: &mut ScrollState) {
    let dialog_area = LayoutManager::centered_rect(80, 80, area);
    let body = if logs.is_empty() {
        "No log entries yet".to_string()
    } else {
        logs.join("\n")
    };
    render_scrollable_dialog(
        f,
        dialog_area,
        format!(" {} ", DIALOG_TITLE_LOGS),
        Color::Cyan,
        &body,
        &[shortcuts::JK_SCROLL, shortcuts::SEPARATOR, shortcuts::ESC_CLOSE],
        scroll,
    );
}
