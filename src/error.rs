//! Error types for calendar input and date handling.

use thiserror::Error;

use crate::constants::{YEAR_MAX, YEAR_MIN};

/// Errors raised while validating selector input or building dates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    #[error("Year must be a whole number, got '{0}'")]
    InvalidYear(String),

    #[error("Year {year} is outside the supported range {min}-{max}")]
    YearOutOfRange { year: i32, min: i32, max: i32 },

    #[error("Unknown month '{0}'")]
    InvalidMonth(String),

    #[error("Invalid date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
}

impl CalendarError {
    /// Build a range error against the selector's supported years.
    pub fn year_out_of_range(year: i32) -> Self {
        Self::YearOutOfRange {
            year,
            min: YEAR_MIN,
            max: YEAR_MAX,
        }
    }
}
