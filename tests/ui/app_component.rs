use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use memocal::calendar::ViewState;
use memocal::config::UiConfig;
use memocal::logger::Logger;
use memocal::storage::{LocalStorage, MemoStore};
use memocal::ui::core::{Action, Component, DialogType, EventType};
use memocal::ui::AppComponent;
use memocal::utils::color;
use ratatui::{backend::TestBackend, Terminal};

/// In-memory store that counts every call
#[derive(Default)]
struct CountingStore {
    memos: Mutex<HashMap<NaiveDate, String>>,
    gets: AtomicUsize,
    saves: AtomicUsize,
    month_loads: AtomicUsize,
    fail_saves: bool,
}

impl CountingStore {
    fn calls(&self) -> (usize, usize, usize) {
        (
            self.gets.load(Ordering::SeqCst),
            self.saves.load(Ordering::SeqCst),
            self.month_loads.load(Ordering::SeqCst),
        )
    }
}

#[async_trait]
impl MemoStore for CountingStore {
    async fn get(&self, date: NaiveDate) -> anyhow::Result<String> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        Ok(self.memos.lock().unwrap().get(&date).cloned().unwrap_or_default())
    }

    async fn save(&self, date: NaiveDate, text: &str) -> anyhow::Result<()> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        if self.fail_saves {
            anyhow::bail!("disk full");
        }
        self.memos.lock().unwrap().insert(date, text.to_string());
        Ok(())
    }

    async fn memos_for_month(&self, view: ViewState) -> anyhow::Result<HashMap<u32, String>> {
        self.month_loads.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .memos
            .lock()
            .unwrap()
            .iter()
            .filter(|(date, text)| view.contains(**date) && !text.is_empty())
            .map(|(date, text)| (date.day(), text.clone()))
            .collect())
    }
}

fn key(code: KeyCode) -> EventType {
    EventType::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn click(column: u16, row: u16) -> EventType {
    EventType::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

async fn type_text(app: &mut AppComponent, text: &str) {
    for c in text.chars() {
        app.handle_event(key(KeyCode::Char(c))).await.unwrap();
    }
}

async fn app_with(store: Arc<dyn MemoStore>, year: i32, month: u32) -> AppComponent {
    let mut app = AppComponent::new(
        store,
        Logger::new(),
        &UiConfig::default(),
        ViewState::new(year, month).unwrap(),
    )
    .unwrap();
    app.load_month().await.unwrap();
    app
}

#[tokio::test]
async fn test_click_day_save_memo_and_mark_cell() {
    let storage = Arc::new(LocalStorage::in_memory().await.unwrap());
    let mut app = app_with(storage.clone(), 2024, 2).await;
    let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();

    terminal.draw(|f| app.render(f, f.area())).unwrap();
    let area = app.grid().cell_area(29).expect("day 29 is rendered");

    app.handle_event(click(area.x, area.y)).await.unwrap();
    match &app.dialog().dialog_type {
        Some(DialogType::MemoEdit { date, text }) => {
            assert_eq!(*date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
            assert!(text.is_empty());
        }
        other => panic!("expected memo dialog, got {:?}", other),
    }

    type_text(&mut app, "checkup").await;
    app.handle_event(key(KeyCode::Enter)).await.unwrap();
    assert!(!app.is_dialog_visible());

    terminal.draw(|f| app.render(f, f.area())).unwrap();
    let cell = &terminal.backend().buffer()[(area.x, area.y)];
    assert_eq!(cell.bg, color::memo_marker_color(&UiConfig::default().memo_color));

    let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
    assert_eq!(storage.get(date).await.unwrap(), "checkup");
    assert!(app.grid().has_memo(29));
}

#[tokio::test]
async fn test_reopening_memo_prefills_text() {
    let store = Arc::new(CountingStore::default());
    let date = NaiveDate::from_ymd_opt(2024, 2, 10).unwrap();
    store.memos.lock().unwrap().insert(date, "haircut".to_string());
    let mut app = app_with(store.clone(), 2024, 2).await;

    let follow_up = app.handle_app_action(Action::OpenMemo(date)).await;
    assert_eq!(
        follow_up,
        Action::ShowDialog(DialogType::MemoEdit {
            date,
            text: "haircut".to_string()
        })
    );
    assert_eq!(store.calls().0, 1);
}

#[tokio::test]
async fn test_cancel_memo_edit_writes_nothing() {
    let store = Arc::new(CountingStore::default());
    let mut app = app_with(store.clone(), 2024, 2).await;

    app.handle_event(key(KeyCode::Enter)).await.unwrap();
    assert!(app.is_dialog_visible());
    type_text(&mut app, "never saved").await;
    app.handle_event(key(KeyCode::Esc)).await.unwrap();

    assert!(!app.is_dialog_visible());
    assert_eq!(store.calls().1, 0);
    assert!(store.memos.lock().unwrap().is_empty());
    assert!(!app.should_quit());
}

#[tokio::test]
async fn test_clearing_memo_removes_marker() {
    let store = Arc::new(CountingStore::default());
    let date = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
    store.memos.lock().unwrap().insert(date, "old".to_string());
    let mut app = app_with(store.clone(), 2024, 2).await;
    assert!(app.grid().has_memo(1));

    app.handle_event(key(KeyCode::Home)).await.unwrap();
    app.handle_event(key(KeyCode::Enter)).await.unwrap();
    app.handle_event(EventType::Key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL)))
        .await
        .unwrap();
    app.handle_event(key(KeyCode::Enter)).await.unwrap();

    assert!(!app.grid().has_memo(1));
    assert_eq!(store.memos.lock().unwrap().get(&date).map(String::as_str), Some(""));
}

#[tokio::test]
async fn test_invalid_year_reverts_without_memo_io() {
    let store = Arc::new(CountingStore::default());
    let mut app = app_with(store.clone(), 2024, 2).await;
    let before = store.calls();

    // Focus the year field and replace its text
    app.handle_event(key(KeyCode::Tab)).await.unwrap();
    app.handle_event(key(KeyCode::Tab)).await.unwrap();
    for _ in 0..4 {
        app.handle_event(key(KeyCode::Backspace)).await.unwrap();
    }
    type_text(&mut app, "20x4").await;
    app.handle_event(key(KeyCode::Enter)).await.unwrap();

    assert_eq!(app.view(), ViewState::new(2024, 2).unwrap());
    assert_eq!(app.selector().year_input(), "2024");
    assert_eq!(app.selector().month_input(), "February");
    assert!(matches!(app.dialog().dialog_type, Some(DialogType::Error(_))));
    assert_eq!(store.calls(), before);

    // Any key dismisses the error and the calendar is still usable
    app.handle_event(key(KeyCode::Char('x'))).await.unwrap();
    assert!(!app.is_dialog_visible());
    app.handle_event(key(KeyCode::Char('n'))).await.unwrap();
    assert_eq!(app.view(), ViewState::new(2024, 3).unwrap());
}

#[tokio::test]
async fn test_out_of_range_year_is_rejected() {
    let store = Arc::new(CountingStore::default());
    let mut app = app_with(store.clone(), 2024, 2).await;

    app.handle_event(key(KeyCode::Tab)).await.unwrap();
    app.handle_event(key(KeyCode::Tab)).await.unwrap();
    for _ in 0..4 {
        app.handle_event(key(KeyCode::Backspace)).await.unwrap();
    }
    type_text(&mut app, "1899").await;
    app.handle_event(key(KeyCode::Enter)).await.unwrap();

    assert_eq!(app.view(), ViewState::new(2024, 2).unwrap());
    assert!(app.state().error_message.is_some());
}

#[tokio::test]
async fn test_valid_selection_changes_view() {
    let store = Arc::new(CountingStore::default());
    let mut app = app_with(store.clone(), 2024, 2).await;

    app.handle_event(key(KeyCode::Tab)).await.unwrap();
    app.handle_event(key(KeyCode::Down)).await.unwrap();
    app.handle_event(key(KeyCode::Tab)).await.unwrap();
    app.handle_event(key(KeyCode::Up)).await.unwrap();
    app.handle_event(key(KeyCode::Enter)).await.unwrap();

    assert_eq!(app.view(), ViewState::new(2023, 3).unwrap());
    assert_eq!(app.grid().grid().view(), app.view());
    assert!(!app.selector().is_active());
    assert!(!app.is_dialog_visible());
}

#[tokio::test]
async fn test_navigation_keys() {
    let store = Arc::new(CountingStore::default());
    let mut app = app_with(store, 2023, 12).await;

    app.handle_event(key(KeyCode::Char('n'))).await.unwrap();
    assert_eq!(app.view(), ViewState::new(2024, 1).unwrap());

    app.handle_event(key(KeyCode::Char('p'))).await.unwrap();
    app.handle_event(key(KeyCode::Char('p'))).await.unwrap();
    assert_eq!(app.view(), ViewState::new(2023, 11).unwrap());

    app.handle_event(key(KeyCode::Char('N'))).await.unwrap();
    assert_eq!(app.view(), ViewState::new(2024, 11).unwrap());
    assert_eq!(app.selector().year_input(), "2024");
}

#[tokio::test]
async fn test_prev_next_labels_are_clickable() {
    let store = Arc::new(CountingStore::default());
    let mut app = app_with(store, 2024, 1).await;
    let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
    terminal.draw(|f| app.render(f, f.area())).unwrap();

    // Find the "< Prev" label on the selector row
    let buffer = terminal.backend().buffer().clone();
    let prev_x = (0..80)
        .find(|&x| buffer[(x, 1)].symbol() == "<")
        .expect("prev label rendered");

    app.handle_event(click(prev_x, 1)).await.unwrap();
    assert_eq!(app.view(), ViewState::new(2023, 12).unwrap());
}

#[tokio::test]
async fn test_failed_save_shows_error_and_keeps_running() {
    let store = Arc::new(CountingStore {
        fail_saves: true,
        ..Default::default()
    });
    let mut app = app_with(store.clone(), 2024, 2).await;

    app.handle_event(key(KeyCode::Enter)).await.unwrap();
    type_text(&mut app, "lost").await;
    app.handle_event(key(KeyCode::Enter)).await.unwrap();

    match &app.dialog().dialog_type {
        Some(DialogType::Error(message)) => assert!(message.contains("disk full")),
        other => panic!("expected error dialog, got {:?}", other),
    }
    assert!(!app.should_quit());
    assert_eq!(app.view(), ViewState::new(2024, 2).unwrap());
}

#[tokio::test]
async fn test_quit_keys() {
    let store = Arc::new(CountingStore::default());
    let mut app = app_with(store, 2024, 2).await;
    app.handle_event(key(KeyCode::Char('q'))).await.unwrap();
    assert!(app.should_quit());
}

#[tokio::test]
async fn test_help_dialog_renders() {
    let store = Arc::new(CountingStore::default());
    let mut app = app_with(store, 2024, 2).await;
    let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();

    app.handle_event(key(KeyCode::Char('?'))).await.unwrap();
    assert!(matches!(app.dialog().dialog_type, Some(DialogType::Help)));
    terminal.draw(|f| app.render(f, f.area())).unwrap();

    app.handle_event(key(KeyCode::Esc)).await.unwrap();
    assert!(!app.is_dialog_visible());
    assert!(!app.should_quit());
}

#[tokio::test]
async fn test_clicking_a_day_leaves_the_selector() {
    let store = Arc::new(CountingStore::default());
    let mut app = app_with(store, 2024, 2).await;
    let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();

    app.handle_event(key(KeyCode::Tab)).await.unwrap();
    app.handle_event(key(KeyCode::Char('x'))).await.unwrap();
    assert!(app.selector().is_active());

    terminal.draw(|f| app.render(f, f.area())).unwrap();
    let area = app.grid().cell_area(10).expect("day 10 is rendered");
    app.handle_event(click(area.x, area.y)).await.unwrap();

    assert!(app.is_dialog_visible());
    assert!(!app.selector().is_active());
    assert_eq!(app.selector().month_input(), "February");

    // After the prompt, keys reach the calendar again
    app.handle_event(key(KeyCode::Esc)).await.unwrap();
    app.handle_event(key(KeyCode::Char('n'))).await.unwrap();
    assert_eq!(app.view(), ViewState::new(2024, 3).unwrap());
}
