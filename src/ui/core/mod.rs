//! Core UI functionality for memocal.
//!
//! # Module Components
//!
//! - [`actions`] - Action definitions and UI state transitions
//! - [`component`] - Base component trait and rendering abstractions
//! - [`event_handler`] - Terminal event polling
//!
//! Components translate input into [`Action`]s; the app component routes
//! every action through its children and then applies what is left (store
//! access, navigation) itself.

// Core UI modules
pub mod actions;
pub mod component;
pub mod event_handler;

// Re-export core types for easier access from other modules
pub use actions::{Action, DialogType};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
