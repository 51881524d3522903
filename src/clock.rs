//! Digital clock: time formatting and the refresh ticker.
//!
//! The ticker is a `tokio` interval running in its own task. It only sends
//! the current time over a channel; the UI loop owns the label. Dropping
//! the [`ClockHandle`] (or calling [`ClockHandle::cancel`]) stops it.

use std::fmt::{self, Write};

use chrono::{Local, NaiveTime};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval, Duration, MissedTickBehavior};

/// Format a time of day, e.g. `"%H:%M:%S"` -> `"09:05:07"`
///
/// Fails when the format asks for fields a bare time lacks (dates, offsets).
pub fn try_format_time(time: NaiveTime, format: &str) -> Result<String, fmt::Error> {
    let mut label = String::new();
    write!(&mut label, "{}", time.format(format))?;
    Ok(label)
}

/// Like [`try_format_time`], empty on an unusable format
pub fn format_time(time: NaiveTime, format: &str) -> String {
    try_format_time(time, format).unwrap_or_default()
}

/// Current local wall-clock time
pub fn now() -> NaiveTime {
    Local::now().time()
}

/// Cancel handle of a running ticker.
#[derive(Debug)]
pub struct ClockHandle {
    handle: JoinHandle<()>,
}

impl ClockHandle {
    /// Start a ticker that sends the current time every `period`.
    ///
    /// The first tick fires immediately so the label is filled at once.
    /// The ticker also stops on its own when the receiver is dropped.
    pub fn spawn(period: Duration) -> (Self, mpsc::UnboundedReceiver<NaiveTime>) {
        let (tx, rx) = mpsc::unbounded_channel();

        let handle = tokio::spawn(async move {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                if tx.send(now()).is_err() {
                    break;
                }
            }
        });

        (Self { handle }, rx)
    }

    /// Stop the ticker
    pub fn cancel(&self) {
        self.handle.abort();
    }
}

impl Drop for ClockHandle {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
