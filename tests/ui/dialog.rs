use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use memocal::ui::components::DialogComponent;
use memocal::ui::core::{Action, Component, DialogType};

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
}

fn press(dialog: &mut DialogComponent, code: KeyCode) -> Action {
    dialog.handle_key_events(KeyEvent::new(code, KeyModifiers::NONE))
}

fn open_memo(dialog: &mut DialogComponent, text: &str) {
    dialog.update(Action::ShowDialog(DialogType::MemoEdit {
        date: date(),
        text: text.to_string(),
    }));
}

#[test]
fn test_memo_dialog_prefills_text() {
    let mut dialog = DialogComponent::new();
    open_memo(&mut dialog, "existing");

    assert!(dialog.is_visible());
    assert_eq!(dialog.input_buffer, "existing");
    assert_eq!(dialog.cursor_position, 8);
}

#[test]
fn test_enter_submits_trimmed_text() {
    let mut dialog = DialogComponent::new();
    open_memo(&mut dialog, "");

    for c in "  gym  ".chars() {
        press(&mut dialog, KeyCode::Char(c));
    }
    let action = press(&mut dialog, KeyCode::Enter);

    assert_eq!(
        action,
        Action::SaveMemo {
            date: date(),
            text: "gym".to_string()
        }
    );
    assert!(!dialog.is_visible());
}

#[test]
fn test_escape_cancels_without_saving() {
    let mut dialog = DialogComponent::new();
    open_memo(&mut dialog, "keep me");
    press(&mut dialog, KeyCode::Char('!'));

    assert_eq!(press(&mut dialog, KeyCode::Esc), Action::None);
    assert!(!dialog.is_visible());
    assert!(dialog.input_buffer.is_empty());
}

#[test]
fn test_editing_keys_handle_multibyte_text() {
    let mut dialog = DialogComponent::new();
    open_memo(&mut dialog, "café");

    press(&mut dialog, KeyCode::Backspace);
    assert_eq!(dialog.input_buffer, "caf");

    press(&mut dialog, KeyCode::Home);
    press(&mut dialog, KeyCode::Char('é'));
    assert_eq!(dialog.input_buffer, "écaf");

    press(&mut dialog, KeyCode::Delete);
    assert_eq!(dialog.input_buffer, "éaf");
}

#[test]
fn test_error_dialog_closes_on_any_key() {
    let mut dialog = DialogComponent::new();
    dialog.update(Action::ShowDialog(DialogType::Error("bad year".to_string())));
    assert!(dialog.is_visible());

    press(&mut dialog, KeyCode::Char('z'));
    assert!(!dialog.is_visible());
}

#[test]
fn test_unrelated_actions_pass_through() {
    let mut dialog = DialogComponent::new();
    assert_eq!(dialog.update(Action::NextMonth), Action::NextMonth);
}
