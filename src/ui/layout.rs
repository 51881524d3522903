//! Layout management and calculations

use ratatui::layout::{Constraint, Flex, Layout, Rect};

use crate::constants::{SELECTOR_HEIGHT, STATUS_BAR_HEIGHT};

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Split the screen into selector bar, calendar grid and status bar
    #[must_use]
    pub fn main_layout(area: Rect) -> [Rect; 3] {
        Layout::vertical([
            Constraint::Length(SELECTOR_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .areas(area)
    }

    /// Rows of the grid: one header line, then equal-height week rows
    #[must_use]
    pub fn grid_rows(area: Rect, weeks: usize) -> Vec<Rect> {
        let weeks = weeks.max(1) as u32;
        let mut constraints = vec![Constraint::Length(1)];
        constraints.extend((0..weeks).map(|_| Constraint::Ratio(1, weeks)));

        Layout::vertical(constraints).split(area).to_vec()
    }

    /// Seven equal columns, Sunday first
    #[must_use]
    pub fn grid_columns(row: Rect) -> [Rect; 7] {
        Layout::horizontal([Constraint::Ratio(1, 7); 7]).areas(row)
    }

    /// Popup area of `percent_x` by `percent_y` centered in `r`
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let [row] = Layout::vertical([Constraint::Percentage(percent_y)])
            .flex(Flex::Center)
            .areas(r);
        let [area] = Layout::horizontal([Constraint::Percentage(percent_x)])
            .flex(Flex::Center)
            .areas(row);
        area
    }

    /// Like [`Self::centered_rect`] with a fixed height in lines
    #[must_use]
    pub fn centered_rect_lines(percent_x: u16, height_lines: u16, r: Rect) -> Rect {
        let [row] = Layout::vertical([Constraint::Length(height_lines)])
            .flex(Flex::Center)
            .areas(r);
        let [area] = Layout::horizontal([Constraint::Percentage(percent_x)])
            .flex(Flex::Center)
            .areas(row);
        area
    }

    /// Whether a terminal cell lies inside `area`
    #[must_use]
    pub fn contains(area: Rect, column: u16, row: u16) -> bool {
        column >= area.x
            && row >= area.y
            && column < area.x.saturating_add(area.width)
            && row < area.y.saturating_add(area.height)
    }
}
