use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};

use crate::calendar::{MonthGrid, ViewState};
use crate::config::UiConfig;
use crate::constants::{
    ERROR_MEMO_LOAD_FAILED, ERROR_MEMO_SAVE_FAILED, ERROR_MONTH_LOAD_FAILED, SUCCESS_MEMO_CLEARED, SUCCESS_MEMO_SAVED,
};
use crate::logger::Logger;
use crate::storage::MemoStore;
use crate::ui::components::{
    CalendarGridComponent, DialogComponent, SelectorComponent, StatusBar, StatusInfo,
};
use crate::ui::core::{
    actions::{Action, DialogType},
    event_handler::EventType,
    Component,
};
use crate::ui::layout::LayoutManager;
use crate::utils::{color, datetime};

/// Application state separate from UI concerns
#[derive(Debug, Clone)]
pub struct AppState {
    /// Month currently shown; only changes after validation and a successful load
    pub view: ViewState,
    pub info_message: Option<String>,
    pub error_message: Option<String>,
}

impl AppState {
    pub fn new(view: ViewState) -> Self {
        Self {
            view,
            info_message: None,
            error_message: None,
        }
    }

    /// Clear any transient messages
    pub fn clear_messages(&mut self) {
        self.error_message = None;
        self.info_message = None;
    }
}

pub struct AppComponent {
    // Component composition
    selector: SelectorComponent,
    grid: CalendarGridComponent,
    dialog: DialogComponent,

    // Application state
    state: AppState,

    // Services
    store: Arc<dyn MemoStore>,
    logger: Logger,

    // Simple UI state
    mouse_enabled: bool,
    should_quit: bool,
}

impl AppComponent {
    pub fn new(store: Arc<dyn MemoStore>, logger: Logger, ui: &UiConfig, view: ViewState) -> anyhow::Result<Self> {
        let today = datetime::today();
        let mut grid = CalendarGridComponent::new(MonthGrid::new(view)?, color::memo_marker_color(&ui.memo_color));
        grid.set_today(ui.highlight_today.then_some(today));
        grid.set_show_preview(ui.show_memo_preview);
        if view.contains(today) {
            grid.set_cursor_day(today.day());
        }

        Ok(Self {
            selector: SelectorComponent::new(view),
            grid,
            dialog: DialogComponent::new(),
            state: AppState::new(view),
            store,
            logger,
            mouse_enabled: ui.mouse_enabled,
            should_quit: false,
        })
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn view(&self) -> ViewState {
        self.state.view
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn grid(&self) -> &CalendarGridComponent {
        &self.grid
    }

    pub fn selector(&self) -> &SelectorComponent {
        &self.selector
    }

    pub fn dialog(&self) -> &DialogComponent {
        &self.dialog
    }

    pub fn is_dialog_visible(&self) -> bool {
        self.dialog.is_visible()
    }

    /// Load the grid and memos of the current view
    pub async fn load_month(&mut self) -> anyhow::Result<()> {
        let view = self.state.view;
        self.apply_view(view).await
    }

    /// Fetch everything for `view` first, then switch to it
    async fn apply_view(&mut self, view: ViewState) -> anyhow::Result<()> {
        let grid = MonthGrid::new(view)?;
        let memos = self.store.memos_for_month(view).await?;
        self.logger
            .log(format!("Calendar: showing {} ({} memo(s))", view, memos.len()));

        self.state.view = view;
        self.selector.set_view(view);
        self.grid.update_data(grid, memos);
        Ok(())
    }

    async fn navigate(&mut self, view: ViewState) -> Action {
        match self.apply_view(view).await {
            Ok(()) => Action::None,
            Err(e) => self.fail(ERROR_MONTH_LOAD_FAILED, &e),
        }
    }

    /// Record a failed action and surface it; the session carries on
    fn fail(&mut self, context: &str, error: &anyhow::Error) -> Action {
        let message = format!("{}: {:#}", context, error);
        log::error!("{}", message);
        self.logger.log(message.clone());
        self.state.error_message = Some(message.clone());
        Action::ShowDialog(DialogType::Error(message))
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.logger.log("Global key: quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.logger.log("Global key: Ctrl+C - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('n') | KeyCode::PageDown => Action::NextMonth,
            KeyCode::Char('p') | KeyCode::PageUp => Action::PreviousMonth,
            KeyCode::Char('N') => Action::NextYear,
            KeyCode::Char('P') => Action::PreviousYear,
            KeyCode::Char('t') => Action::GoToToday,
            KeyCode::Char('?') | KeyCode::F(1) => Action::ShowDialog(DialogType::Help),
            KeyCode::Char('G') => {
                self.dialog.set_logs(self.logger.get_logs());
                Action::ShowDialog(DialogType::Logs)
            }
            _ => Action::None,
        }
    }

    /// Handle app-level actions that require business logic
    pub async fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::Quit => {
                self.should_quit = true;
                Action::None
            }
            Action::NextMonth => self.navigate(self.state.view.next_month()).await,
            Action::PreviousMonth => self.navigate(self.state.view.previous_month()).await,
            Action::NextYear => self.navigate(self.state.view.next_year()).await,
            Action::PreviousYear => self.navigate(self.state.view.previous_year()).await,
            Action::GoToToday => {
                let today = datetime::today();
                let follow_up = self.navigate(ViewState::containing(today)).await;
                if self.state.view.contains(today) {
                    self.grid.set_cursor_day(today.day());
                }
                follow_up
            }
            Action::ApplySelection { year, month } => match ViewState::from_selection(&year, &month) {
                Ok(view) => {
                    self.logger.log(format!("Selector: applying {}", view));
                    self.navigate(view).await
                }
                Err(e) => {
                    self.logger
                        .log(format!("Selector: rejected year '{}' month '{}': {}", year, month, e));
                    self.selector.revert();
                    self.state.error_message = Some(e.to_string());
                    Action::ShowDialog(DialogType::Error(e.to_string()))
                }
            },
            Action::OpenMemo(date) => self.open_memo(date).await,
            Action::SaveMemo { date, text } => self.save_memo(date, text).await,
            _ => Action::None,
        }
    }

    async fn open_memo(&mut self, date: NaiveDate) -> Action {
        match self.store.get(date).await {
            Ok(text) => {
                self.logger.log(format!("Memo: editing {}", date));
                Action::ShowDialog(DialogType::MemoEdit { date, text })
            }
            Err(e) => self.fail(ERROR_MEMO_LOAD_FAILED, &e),
        }
    }

    async fn save_memo(&mut self, date: NaiveDate, text: String) -> Action {
        if let Err(e) = self.store.save(date, &text).await {
            return self.fail(ERROR_MEMO_SAVE_FAILED, &e);
        }

        self.logger.log(format!("Memo: saved {} ({} chars)", date, text.chars().count()));
        self.state.info_message = Some(if text.is_empty() {
            format!("{} for {}", SUCCESS_MEMO_CLEARED, date)
        } else {
            format!("{} for {}", SUCCESS_MEMO_SAVED, date)
        });

        // Re-render from the store
        match self.load_month().await {
            Ok(()) => Action::None,
            Err(e) => self.fail(ERROR_MONTH_LOAD_FAILED, &e),
        }
    }

    /// Route an event to the component that owns it
    fn route_event(&mut self, event_type: EventType) -> Action {
        match event_type {
            EventType::Mouse(mouse) => {
                if !self.mouse_enabled || self.dialog.is_visible() {
                    return Action::None;
                }
                let selector_action = self.selector.handle_mouse_events(mouse);
                if !matches!(selector_action, Action::None) {
                    return selector_action;
                }

                let grid_action = self.grid.handle_mouse_events(mouse);
                if !matches!(grid_action, Action::None) && self.selector.is_active() {
                    // The click moved focus to the grid
                    self.selector.deactivate();
                }
                grid_action
            }
            EventType::Key(key) => {
                self.state.clear_messages();

                if self.dialog.is_visible() {
                    // Dialog has priority when visible
                    self.dialog.handle_key_events(key)
                } else if self.selector.is_active() {
                    self.selector.handle_key_events(key)
                } else {
                    let selector_action = self.selector.handle_key_events(key);
                    if self.selector.is_active() || !matches!(selector_action, Action::None) {
                        return selector_action;
                    }

                    let grid_action = self.grid.handle_key_events(key);
                    if !matches!(grid_action, Action::None) {
                        grid_action
                    } else {
                        self.handle_global_key(key)
                    }
                }
            }
            EventType::Resize(_, _) | EventType::Tick | EventType::Other => Action::None,
        }
    }

    /// Process an event through the component hierarchy
    pub async fn handle_event(&mut self, event_type: EventType) -> anyhow::Result<()> {
        let mut action = self.route_event(event_type);

        // Follow-up actions (e.g. an error dialog) go round again
        while action != Action::None {
            action = self.dialog.update(action);
            action = self.handle_app_action(action).await;
        }

        Ok(())
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        // This shouldn't be called directly - use handle_event instead
        self.handle_global_key(key)
    }

    fn update(&mut self, action: Action) -> Action {
        self.dialog.update(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let [selector_area, grid_area, status_area] = LayoutManager::main_layout(rect);

        self.selector.render(f, selector_area);
        self.grid.render(f, grid_area);

        let status = StatusInfo {
            message: self
                .state
                .error_message
                .as_deref()
                .or(self.state.info_message.as_deref()),
            is_error: self.state.error_message.is_some(),
            selector_active: self.selector.is_active(),
            memo_count: self.grid.memos().len(),
        };
        StatusBar::render(f, status_area, &status);

        // Render dialog on top if visible
        if self.dialog.is_visible() {
            self.dialog.render(f, rect);
        }
    }
}
