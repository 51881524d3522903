//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// Selectable year range
/// First year offered by the selector
pub const YEAR_MIN: i32 = 1900;
/// Last year offered by the selector
pub const YEAR_MAX: i32 = 2100;

// Storage
/// Default database file, relative to the working directory
pub const DEFAULT_DATABASE_FILE: &str = "memocal.db";
/// Date key format used in the memos table
pub const MEMO_DATE_FORMAT: &str = "%Y-%m-%d";

// Clock
pub const DEFAULT_CLOCK_FORMAT: &str = "%H:%M:%S";
pub const DEFAULT_CLOCK_TICK_MS: u64 = 1000;
pub const CLOCK_TICK_MIN_MS: u64 = 100;
pub const CLOCK_TICK_MAX_MS: u64 = 60_000;

// Success Messages
pub const SUCCESS_MEMO_SAVED: &str = "✅ Memo saved";
pub const SUCCESS_MEMO_CLEARED: &str = "✅ Memo cleared";

// Error Messages
pub const ERROR_MEMO_SAVE_FAILED: &str = "❌ Failed to save memo";
pub const ERROR_MEMO_LOAD_FAILED: &str = "❌ Failed to load memo";
pub const ERROR_MONTH_LOAD_FAILED: &str = "❌ Failed to load memos for month";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const DIALOG_TITLE_LOGS: &str = "🔍 Logs - Press 'Esc', 'G' or 'q' to close";
pub const DIALOG_TITLE_HELP: &str = "❓ Help - Press 'Esc' or '?' to close";
pub const STATUS_HINTS: &str = "←↑↓→: day • Enter: memo • n/p: month • N/P: year • t: today • Tab: select • ?: help • q: quit";
pub const STATUS_HINTS_SELECTOR: &str = "↑↓: cycle • type to edit • Tab: next field • Enter: apply • Esc: cancel";

// Log buffer
/// Maximum number of in-memory log lines kept for the logs dialog
pub const MAX_LOG_ENTRIES: usize = 500;

// UI Layout Constants
/// Height of the month/year selector bar including borders
pub const SELECTOR_HEIGHT: u16 = 3;
/// Height of the status bar
pub const STATUS_BAR_HEIGHT: u16 = 1;
/// Maximum memo length accepted by the edit dialog
pub const MEMO_MAX_CHARS: usize = 500;
