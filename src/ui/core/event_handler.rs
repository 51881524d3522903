use crossterm::event::{poll, Event, KeyEvent, KeyEventKind, MouseEvent};
use tokio::time::{Duration, Instant};

pub struct EventHandler {
    tick_rate: Duration,
    last_tick: Instant,
}

impl EventHandler {
    pub fn new() -> Self {
        Self {
            tick_rate: Duration::from_millis(100),
            last_tick: Instant::now(),
        }
    }

    pub async fn next_event(&mut self) -> anyhow::Result<EventType> {
        // Check for terminal events without blocking first
        if poll(Duration::from_millis(0))? {
            return Ok(Self::translate(crossterm::event::read()?));
        }

        // If no immediate event, wait out the rest of the tick
        let remaining = self.tick_rate.saturating_sub(self.last_tick.elapsed());
        tokio::time::sleep(remaining).await;
        self.last_tick = Instant::now();
        Ok(EventType::Tick)
    }

    /// Map a raw terminal event; key releases and repeats are dropped
    pub fn translate(event: Event) -> EventType {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => EventType::Key(key),
            Event::Mouse(mouse) => EventType::Mouse(mouse),
            Event::Resize(w, h) => EventType::Resize(w, h),
            _ => EventType::Other,
        }
    }
}

#[derive(Debug, Clone)]
pub enum EventType {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    Tick,
    Other,
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}
