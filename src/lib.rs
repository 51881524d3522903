//! memocal - a terminal month calendar with per-day memos
//!
//! This library provides a month-view calendar that lets you browse months
//! and years and attach a free-text memo to any day. Memos are kept in a
//! local SQLite database. A small digital clock lives alongside it as a
//! separate binary.
//!
//! # Modules
//!
//! * [`calendar`] - View state, month/year selection and grid computation
//! * [`clock`] - Clock formatting and the once-per-second ticker
//! * [`config`] - Application configuration management
//! * [`storage`] - Local database and memo persistence
//! * [`ui`] - Terminal user interface components
//! * [`utils`] - Date and color helpers

/// Month/year view state, selector parsing and the month grid
pub mod calendar;

/// Wall-clock formatting and ticker task
pub mod clock;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// SeaORM entity models for database tables
pub mod entities;

/// Domain error types
pub mod error;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Repository layer for database operations
pub mod repositories;

/// Local storage layer for memos
pub mod storage;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for date handling and other helpers
pub mod utils;

pub use entities::memo;
