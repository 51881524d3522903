//! Utility modules for memocal.
//!
//! - [`datetime`] - Memo date keys and month arithmetic
//! - [`color`] - Config color names to terminal colors

pub mod color;
pub mod datetime;
