//! Local storage module for memo persistence
//!
//! This module provides database operations using SeaORM over a single
//! SQLite table:
//! - [`db`] opens the database and creates the table on startup
//! - [`memos`] reads and writes memos keyed by date
//!
//! The UI talks to storage through the [`MemoStore`] trait.

pub mod db;
pub mod memos;

use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

use crate::calendar::ViewState;

pub use db::LocalStorage;

/// Per-day memo persistence as seen by the calendar.
#[async_trait]
pub trait MemoStore: Send + Sync {
    /// Memo text for `date`; empty when none was ever saved.
    async fn get(&self, date: NaiveDate) -> Result<String>;

    /// Create or overwrite the memo for `date`.
    async fn save(&self, date: NaiveDate, text: &str) -> Result<()>;

    /// Non-empty memos of a month keyed by day of month.
    async fn memos_for_month(&self, view: ViewState) -> Result<HashMap<u32, String>>;
}

#[async_trait]
impl MemoStore for LocalStorage {
    async fn get(&self, date: NaiveDate) -> Result<String> {
        self.get_memo(date).await
    }

    async fn save(&self, date: NaiveDate, text: &str) -> Result<()> {
        self.save_memo(date, text).await
    }

    async fn memos_for_month(&self, view: ViewState) -> Result<HashMap<u32, String>> {
        self.get_month_memos(view).await
    }
}
