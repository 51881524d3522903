use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use memocal::calendar::ViewState;
use memocal::ui::components::{SelectorComponent, SelectorField};
use memocal::ui::core::{Action, Component};

fn selector() -> SelectorComponent {
    SelectorComponent::new(ViewState::new(2024, 2).unwrap())
}

fn press(selector: &mut SelectorComponent, code: KeyCode) -> Action {
    selector.handle_key_events(KeyEvent::new(code, KeyModifiers::NONE))
}

#[test]
fn test_shows_committed_view() {
    let s = selector();
    assert_eq!(s.month_input(), "February");
    assert_eq!(s.year_input(), "2024");
    assert!(!s.is_active());
}

#[test]
fn test_tab_cycles_fields() {
    let mut s = selector();
    press(&mut s, KeyCode::Tab);
    assert_eq!(s.active_field(), Some(SelectorField::Month));
    press(&mut s, KeyCode::Tab);
    assert_eq!(s.active_field(), Some(SelectorField::Year));
    press(&mut s, KeyCode::Tab);
    assert_eq!(s.active_field(), Some(SelectorField::Month));
}

#[test]
fn test_month_cycle_wraps() {
    let mut s = SelectorComponent::new(ViewState::new(2024, 12).unwrap());
    s.activate(SelectorField::Month);

    press(&mut s, KeyCode::Down);
    assert_eq!(s.month_input(), "January");
    press(&mut s, KeyCode::Up);
    assert_eq!(s.month_input(), "December");
}

#[test]
fn test_enter_emits_raw_selection() {
    let mut s = selector();
    s.activate(SelectorField::Year);
    press(&mut s, KeyCode::Backspace);
    press(&mut s, KeyCode::Char('5'));

    let action = press(&mut s, KeyCode::Enter);
    assert_eq!(
        action,
        Action::ApplySelection {
            year: "2025".to_string(),
            month: "February".to_string()
        }
    );
    assert!(!s.is_active());
}

#[test]
fn test_escape_restores_committed_values() {
    let mut s = selector();
    s.activate(SelectorField::Month);
    for _ in 0.."February".len() {
        press(&mut s, KeyCode::Backspace);
    }
    press(&mut s, KeyCode::Char('x'));

    assert_eq!(press(&mut s, KeyCode::Esc), Action::None);
    assert_eq!(s.month_input(), "February");
    assert!(!s.is_active());
}

#[test]
fn test_revert_after_rejected_input() {
    let mut s = selector();
    s.activate(SelectorField::Year);
    press(&mut s, KeyCode::Char('!'));
    press(&mut s, KeyCode::Enter);

    s.revert();
    assert_eq!(s.year_input(), "2024");
}

#[test]
fn test_set_view_updates_display() {
    let mut s = selector();
    s.set_view(ViewState::new(1999, 7).unwrap());
    assert_eq!(s.month_input(), "July");
    assert_eq!(s.year_input(), "1999");
}

#[test]
fn test_year_input_is_capped_at_four_digits() {
    let mut s = selector();
    s.activate(SelectorField::Year);
    for _ in 0..4 {
        press(&mut s, KeyCode::Backspace);
    }
    for c in "123456".chars() {
        press(&mut s, KeyCode::Char(c));
    }
    assert_eq!(s.year_input(), "1234");
}

#[test]
fn test_deactivate_drops_pending_edit() {
    let mut s = selector();
    s.activate(SelectorField::Month);
    press(&mut s, KeyCode::Char('x'));

    s.deactivate();
    assert!(!s.is_active());
    assert_eq!(s.month_input(), "February");
}
