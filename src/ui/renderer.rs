use std::io;
use std::sync::Arc;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use tokio::time::Duration;

use crate::calendar::ViewState;
use crate::clock::ClockHandle;
use crate::config::Config;
use crate::logger::Logger;
use crate::storage::{LocalStorage, MemoStore};
use crate::ui::app_component::AppComponent;
use crate::ui::components::ClockComponent;
use crate::ui::core::{Action, Component, EventHandler, EventType};
use crate::utils::datetime;

type CrosstermTerminal = Terminal<CrosstermBackend<io::Stdout>>;

fn setup_terminal(mouse: bool) -> anyhow::Result<CrosstermTerminal> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if mouse {
        execute!(stdout, EnableMouseCapture)?;
    }
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(terminal: &mut CrosstermTerminal) -> anyhow::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Run the calendar until the user quits
pub async fn run_app(config: Config, logger: Logger) -> anyhow::Result<()> {
    // Open storage before touching the terminal so errors print normally
    let storage = Arc::new(LocalStorage::open(&config.storage.database_path).await?);
    logger.log(format!(
        "Storage: {} memo(s) in {}",
        storage.memo_count().await?,
        config.storage.database_path.display()
    ));

    let store: Arc<dyn MemoStore> = storage.clone();
    let mut app = AppComponent::new(store, logger.clone(), &config.ui, ViewState::containing(datetime::today()))?;
    app.load_month().await?;

    let mut terminal = setup_terminal(config.ui.mouse_enabled)?;
    let mut event_handler = EventHandler::new();

    let result = run_app_loop(&mut terminal, &mut app, &mut event_handler).await;

    // Restore terminal
    restore_terminal(&mut terminal)?;

    drop(app);
    if let Ok(storage) = Arc::try_unwrap(storage) {
        storage.close().await?;
    }
    logger.log("Application closed".to_string());

    result
}

async fn run_app_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppComponent,
    event_handler: &mut EventHandler,
) -> anyhow::Result<()> {
    let mut needs_render = true;

    loop {
        if needs_render {
            terminal.draw(|f| app.render(f, f.area()))?;
            needs_render = false;
        }

        let event = event_handler.next_event().await?;
        match event {
            EventType::Key(_) | EventType::Mouse(_) | EventType::Resize(_, _) => {
                app.handle_event(event).await?;
                needs_render = true;
            }
            EventType::Tick | EventType::Other => {}
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// Run the standalone clock until the user quits
pub async fn run_clock(config: Config) -> anyhow::Result<()> {
    let mut terminal = setup_terminal(false)?;

    let result = run_clock_loop(&mut terminal, &config).await;

    restore_terminal(&mut terminal)?;
    result
}

async fn run_clock_loop<B: Backend>(terminal: &mut Terminal<B>, config: &Config) -> anyhow::Result<()> {
    let mut clock = ClockComponent::new(config.clock.format.clone());
    let (ticker, mut ticks) = ClockHandle::spawn(Duration::from_millis(config.clock.tick_interval_ms));
    let mut event_handler = EventHandler::new();

    let result = loop {
        tokio::select! {
            Some(time) = ticks.recv() => {
                clock.set_time(time);
                terminal.draw(|f| clock.render(f, f.area()))?;
            }
            event = event_handler.next_event() => match event? {
                EventType::Key(key) => {
                    if clock.handle_key_events(key) == Action::Quit {
                        break Ok(());
                    }
                }
                EventType::Resize(_, _) => {
                    terminal.draw(|f| clock.render(f, f.area()))?;
                }
                _ => {}
            },
        }
    };

    // Nothing may touch the label once the window is gone
    ticker.cancel();
    result
}
