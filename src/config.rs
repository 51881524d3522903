//! Configuration management for memocal
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    CLOCK_TICK_MAX_MS, CLOCK_TICK_MIN_MS, CONFIG_GENERATED, DEFAULT_CLOCK_FORMAT, DEFAULT_CLOCK_TICK_MS,
    DEFAULT_DATABASE_FILE,
};
use crate::clock;
use crate::utils::{color, datetime};
use anyhow::{Context, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub storage: StorageConfig,
    pub clock: ClockConfig,
    pub logging: LoggingConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Enable mouse support (click a day to edit its memo)
    pub mouse_enabled: bool,
    /// Highlight today's date in the grid
    pub highlight_today: bool,
    /// Background color of days that have a memo
    /// Options: red, orange, yellow, green, mint, teal, blue, violet, magenta, gray, or "#rrggbb"
    pub memo_color: String,
    /// Show the first line of a memo inside its day cell when there is room
    pub show_memo_preview: bool,
}

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// SQLite database file, relative paths resolve against the working directory
    pub database_path: PathBuf,
}

/// Clock configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    /// strftime format of the displayed time
    pub format: String,
    /// Refresh period in milliseconds
    pub tick_interval_ms: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Write logs to a file in the data directory
    pub enabled: bool,
    /// Log level: error, warn, info, debug, trace
    pub level: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            mouse_enabled: true,
            highlight_today: true,
            memo_color: "yellow".to_string(),
            show_memo_preview: true,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from(DEFAULT_DATABASE_FILE),
        }
    }
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_CLOCK_FORMAT.to_string(),
            tick_interval_ms: DEFAULT_CLOCK_TICK_MS,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Parsed log level
    pub fn level_filter(&self) -> Result<log::LevelFilter> {
        log::LevelFilter::from_str(&self.level).map_err(|_| anyhow::anyhow!("Invalid logging level '{}'", self.level))
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("memocal.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("memocal").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if color::parse_color(&self.ui.memo_color).is_none() {
            anyhow::bail!("Invalid memo_color '{}'", self.ui.memo_color);
        }

        if self.storage.database_path.as_os_str().is_empty() {
            anyhow::bail!("database_path cannot be empty");
        }

        if !(CLOCK_TICK_MIN_MS..=CLOCK_TICK_MAX_MS).contains(&self.clock.tick_interval_ms) {
            anyhow::bail!(
                "tick_interval_ms must be between {} and {}, got {}",
                CLOCK_TICK_MIN_MS,
                CLOCK_TICK_MAX_MS,
                self.clock.tick_interval_ms
            );
        }

        if self.clock.format.is_empty()
            || StrftimeItems::new(&self.clock.format).any(|item| matches!(item, Item::Error))
            || clock::try_format_time(NaiveTime::MIN, &self.clock.format).is_err()
        {
            anyhow::bail!("Invalid clock format '{}'", self.clock.format);
        }

        self.logging.level_filter()?;

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# memocal Configuration File\n# Generated on {}\n\n",
            datetime::format_ymd(datetime::today())
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("memocal"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
