//! Dialog rendering helpers

pub mod common;
pub mod memo_dialog;
pub mod scroll_behavior;
pub mod system_dialogs;
