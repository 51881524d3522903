//! Application logging.
//!
//! Two sinks: a `fern` dispatch that writes `log` records to a file in the
//! data directory (only when enabled in the config, the terminal belongs to
//! the UI), and an in-memory buffer shown by the logs dialog.

use anyhow::{Context, Result};
use chrono::Local;
use once_cell::sync::OnceCell;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::config::LoggingConfig;
use crate::constants::MAX_LOG_ENTRIES;

static FILE_LOGGING: OnceCell<PathBuf> = OnceCell::new();

/// Shared logger that can be used across the application
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<Vec<String>>>,
    enabled: bool,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(Vec::new())),
            enabled: false,
        }
    }

    /// Build a logger and, if enabled, route `log` records to the log file
    pub fn from_config(config: &LoggingConfig) -> Result<Self> {
        if config.enabled {
            init_file_logging(config.level_filter()?)?;
        }

        Ok(Self {
            logs: Arc::new(Mutex::new(Vec::new())),
            enabled: config.enabled,
        })
    }

    /// Whether file logging was requested
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Add a log entry
    pub fn log(&self, message: String) {
        log::info!("{}", message);

        let timestamp = Local::now().format("%H:%M:%S%.3f").to_string();
        let formatted_message = format!("[{}] {}", timestamp, message);

        if let Ok(mut logs) = self.logs.lock() {
            logs.push(formatted_message);
            if logs.len() > MAX_LOG_ENTRIES {
                let excess = logs.len() - MAX_LOG_ENTRIES;
                logs.drain(..excess);
            }
        }
    }

    /// Get all logs sorted by date (newest first)
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            let mut sorted_logs = logs.clone();
            sorted_logs.reverse();
            sorted_logs
        } else {
            Vec::new()
        }
    }

    /// Path of the log file in the platform data directory
    pub fn get_log_file_path() -> Result<PathBuf> {
        dirs::data_local_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
            .map(|dir| dir.join("memocal").join("memocal.log"))
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Install the global file logger once per process.
fn init_file_logging(level: log::LevelFilter) -> Result<()> {
    FILE_LOGGING.get_or_try_init(|| -> Result<PathBuf> {
        let path = Logger::get_log_file_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }

        fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "{} [{}] {}: {}",
                    Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                    record.level(),
                    record.target(),
                    message
                ))
            })
            .level(level)
            .level_for("sqlx", log::LevelFilter::Warn)
            .level_for("sea_orm", log::LevelFilter::Warn)
            .chain(
                fern::log_file(&path)
                    .with_context(|| format!("Failed to open log file: {}", path.display()))?,
            )
            .apply()
            .context("Failed to install logger")?;

        Ok(path)
    })?;

    Ok(())
}
