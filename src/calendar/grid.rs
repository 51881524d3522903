//! Sunday-first month grid.

use chrono::NaiveDate;

use super::ViewState;
use crate::error::CalendarError;
use crate::utils::datetime;

/// Column headers, Sunday first.
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// One row of the grid. `None` marks a cell outside the month.
pub type Week = [Option<u32>; 7];

/// Day layout of one month, weeks as rows.
///
/// Pure data computed from a [`ViewState`]; at most six rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    view: ViewState,
    weeks: Vec<Week>,
    days_in_month: u32,
    offset: u32,
}

impl MonthGrid {
    pub fn new(view: ViewState) -> Result<Self, CalendarError> {
        let invalid = || CalendarError::InvalidDate {
            year: view.year(),
            month: view.month(),
            day: 1,
        };
        let days_in_month = datetime::days_in_month(view.year(), view.month()).ok_or_else(invalid)?;
        let offset = datetime::first_weekday_offset(view.year(), view.month()).ok_or_else(invalid)?;

        let mut weeks = Vec::with_capacity(6);
        let mut week: Week = [None; 7];
        let mut col = offset as usize;

        for day in 1..=days_in_month {
            week[col] = Some(day);
            col += 1;
            if col == 7 {
                weeks.push(week);
                week = [None; 7];
                col = 0;
            }
        }
        if col > 0 {
            weeks.push(week);
        }

        Ok(Self {
            view,
            weeks,
            days_in_month,
            offset,
        })
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    pub fn weeks(&self) -> &[Week] {
        &self.weeks
    }

    pub fn row_count(&self) -> usize {
        self.weeks.len()
    }

    pub fn days_in_month(&self) -> u32 {
        self.days_in_month
    }

    /// `(row, column)` of a day, column 0 being Sunday.
    pub fn position_of(&self, day: u32) -> Option<(usize, usize)> {
        if day == 0 || day > self.days_in_month {
            return None;
        }
        let index = (self.offset + day - 1) as usize;
        Some((index / 7, index % 7))
    }

    pub fn day_at(&self, row: usize, col: usize) -> Option<u32> {
        self.weeks.get(row).and_then(|w| w.get(col).copied().flatten())
    }

    pub fn date_of(&self, day: u32) -> Option<NaiveDate> {
        self.view.date(day)
    }

    /// Every in-month day in order, with its date.
    pub fn days(&self) -> impl Iterator<Item = (u32, NaiveDate)> + '_ {
        (1..=self.days_in_month).filter_map(move |d| self.view.date(d).map(|date| (d, date)))
    }
}
