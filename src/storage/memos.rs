use std::collections::HashMap;

use anyhow::Result;
use chrono::{Datelike, NaiveDate};

use super::LocalStorage;
use crate::calendar::ViewState;
use crate::repositories::MemoRepository;
use crate::utils::datetime::{self, format_ymd};

impl LocalStorage {
    /// Get the memo text for a date, empty if there is none
    pub async fn get_memo(&self, date: NaiveDate) -> Result<String> {
        let row = MemoRepository::get_by_date(&self.conn, &format_ymd(date)).await?;
        Ok(row.and_then(|m| m.memo).unwrap_or_default())
    }

    /// Store a memo, overwriting any previous text for the same date
    pub async fn save_memo(&self, date: NaiveDate, text: &str) -> Result<()> {
        MemoRepository::upsert(&self.conn, &format_ymd(date), text).await?;
        log::info!("Storage: saved memo for {} ({} chars)", date, text.chars().count());
        Ok(())
    }

    /// Get the non-empty memos of a month keyed by day of month
    pub async fn get_month_memos(&self, view: ViewState) -> Result<HashMap<u32, String>> {
        let (Some(first), Some(last)) = (
            datetime::first_of_month(view.year(), view.month()),
            datetime::last_of_month(view.year(), view.month()),
        ) else {
            return Ok(HashMap::new());
        };

        let rows = MemoRepository::get_in_range(&self.conn, &format_ymd(first), &format_ymd(last)).await?;

        let memos = rows
            .into_iter()
            .filter_map(|row| {
                let day = datetime::parse_date(&row.date).ok()?.day();
                let text = row.text()?.to_string();
                Some((day, text))
            })
            .collect();

        Ok(memos)
    }

    /// Total number of memo rows
    pub async fn memo_count(&self) -> Result<u64> {
        MemoRepository::count(&self.conn).await
    }
}
