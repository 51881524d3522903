//! Reusable UI components

// Component architecture
pub mod calendar_grid_component;
pub mod clock_component;
pub mod dialog_component;
pub mod dialogs;
pub mod selector_component;
pub mod status_bar;

// Component exports
pub use calendar_grid_component::CalendarGridComponent;
pub use clock_component::ClockComponent;
pub use dialog_component::DialogComponent;
pub use selector_component::{SelectorComponent, SelectorField};
pub use status_bar::{StatusBar, StatusInfo};
