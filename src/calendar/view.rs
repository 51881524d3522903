//! The `(year, month)` pair the calendar is showing, and the ways it changes.

use std::fmt;

use chrono::{Datelike, NaiveDate};

use crate::constants::{YEAR_MAX, YEAR_MIN};
use crate::error::CalendarError;

/// Full month names, January first.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Name of a month (1-12). Out-of-range values yield an empty string.
pub fn month_name(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|i| MONTH_NAMES.get(i as usize))
        .copied()
        .unwrap_or("")
}

/// Parse month input: a full name, a three-letter abbreviation or a number.
pub fn parse_month(input: &str) -> Result<u32, CalendarError> {
    let trimmed = input.trim();

    if let Ok(n) = trimmed.parse::<u32>() {
        return if (1..=12).contains(&n) {
            Ok(n)
        } else {
            Err(CalendarError::InvalidMonth(trimmed.to_string()))
        };
    }

    let lower = trimmed.to_lowercase();
    MONTH_NAMES
        .iter()
        .position(|name| {
            let name = name.to_lowercase();
            name == lower || (lower.len() == 3 && name.starts_with(&lower))
        })
        .map(|i| i as u32 + 1)
        .ok_or_else(|| CalendarError::InvalidMonth(trimmed.to_string()))
}

/// Parse year input and check it against the selectable range.
pub fn parse_year(input: &str) -> Result<i32, CalendarError> {
    let trimmed = input.trim();
    let year = trimmed
        .parse::<i32>()
        .map_err(|_| CalendarError::InvalidYear(trimmed.to_string()))?;

    if (YEAR_MIN..=YEAR_MAX).contains(&year) {
        Ok(year)
    } else {
        Err(CalendarError::year_out_of_range(year))
    }
}

/// Currently displayed month.
///
/// Always holds a valid month within the selectable years; the only ways to
/// obtain one go through validation or saturating navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewState {
    year: i32,
    month: u32,
}

impl ViewState {
    pub fn new(year: i32, month: u32) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth(month.to_string()));
        }
        if !(YEAR_MIN..=YEAR_MAX).contains(&year) {
            return Err(CalendarError::year_out_of_range(year));
        }
        Ok(Self { year, month })
    }

    /// Month containing `date`, clamped into the selectable range.
    pub fn containing(date: NaiveDate) -> Self {
        if date.year() < YEAR_MIN {
            Self { year: YEAR_MIN, month: 1 }
        } else if date.year() > YEAR_MAX {
            Self { year: YEAR_MAX, month: 12 }
        } else {
            Self {
                year: date.year(),
                month: date.month(),
            }
        }
    }

    /// Validate raw selector input. Nothing changes on error.
    pub fn from_selection(year_input: &str, month_input: &str) -> Result<Self, CalendarError> {
        let month = parse_month(month_input)?;
        let year = parse_year(year_input)?;
        Self::new(year, month)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn month_name(&self) -> &'static str {
        month_name(self.month)
    }

    /// Following month, December wrapping to January of the next year.
    /// Stays put at the last selectable month.
    #[must_use]
    pub fn next_month(self) -> Self {
        match self.month {
            12 if self.year >= YEAR_MAX => self,
            12 => Self {
                year: self.year + 1,
                month: 1,
            },
            m => Self { month: m + 1, ..self },
        }
    }

    /// Preceding month, January wrapping to December of the previous year.
    /// Stays put at the first selectable month.
    #[must_use]
    pub fn previous_month(self) -> Self {
        match self.month {
            1 if self.year <= YEAR_MIN => self,
            1 => Self {
                year: self.year - 1,
                month: 12,
            },
            m => Self { month: m - 1, ..self },
        }
    }

    #[must_use]
    pub fn next_year(self) -> Self {
        Self {
            year: (self.year + 1).min(YEAR_MAX),
            ..self
        }
    }

    #[must_use]
    pub fn previous_year(self) -> Self {
        Self {
            year: (self.year - 1).max(YEAR_MIN),
            ..self
        }
    }

    /// Date of `day` within this month, if that day exists.
    pub fn date(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl fmt::Display for ViewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month_name(), self.year)
    }
}
