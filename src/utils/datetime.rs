//! Date and time utility functions
//!
//! Helpers for the `YYYY-MM-DD` memo keys and the month arithmetic the
//! calendar grid is built on. All calendar math is delegated to `chrono`
//! (proleptic Gregorian).

use chrono::{Datelike, Local, NaiveDate};

use crate::constants::MEMO_DATE_FORMAT;

/// Parse a date string in YYYY-MM-DD format to NaiveDate
pub fn parse_date(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date_str.trim(), MEMO_DATE_FORMAT)
}

/// Format a NaiveDate to YYYY-MM-DD string
pub fn format_ymd(d: NaiveDate) -> String {
    d.format(MEMO_DATE_FORMAT).to_string()
}

/// Current local date
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// First day of the given month, if the month exists.
pub fn first_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
}

/// Last day of the given month, if the month exists.
pub fn last_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    if !(1..=12).contains(&month) {
        return None;
    }
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    first_of_month(next_year, next_month)?.pred_opt()
}

/// Number of days in the given month.
///
/// Returns `None` when `month` is not 1-12 or the year is beyond chrono's range.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    last_of_month(year, month).map(|d| d.day())
}

/// Column of the first day of the month in a Sunday-first week (0 = Sunday).
pub fn first_weekday_offset(year: i32, month: u32) -> Option<u32> {
    first_of_month(year, month).map(|d| d.weekday().num_days_from_sunday())
}
