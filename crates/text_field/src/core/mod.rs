//! # Core Module
//!
//! Configuration shared by the widget's subsystems.

pub mod config;

pub use config::{Config, ConfigError, CursorConfig, TextFieldConfig};
