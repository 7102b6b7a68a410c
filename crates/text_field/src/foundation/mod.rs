//! Foundation module - Core utilities and types
//!
//! - Math types (screen-space vectors, colors)
//! - Frame clock
//! - Logging utilities

pub mod math;
pub mod time;
pub mod logging;
