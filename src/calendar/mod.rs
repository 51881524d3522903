//! Calendar model: which month is shown and how its days are laid out.
//!
//! [`ViewState`] is the only mutable piece of calendar state and it changes
//! solely through navigation ([`ViewState::next_month`] and friends) or a
//! validated direct selection ([`ViewState::from_selection`]). The grid is a
//! pure function of it.

pub mod grid;
pub mod view;

pub use grid::{MonthGrid, Week, WEEKDAY_LABELS};
pub use view::{month_name, parse_month, parse_year, ViewState, MONTH_NAMES};
