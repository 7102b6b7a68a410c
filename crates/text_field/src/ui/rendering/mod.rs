//! UI rendering module
//!
//! Backend-agnostic draw command recording

pub mod commands;

pub use commands::{CommandRecorder, DrawCommand};
