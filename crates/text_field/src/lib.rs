//! # Text Field
//!
//! A single-line text entry widget for frame-driven, real-time rendered
//! applications.
//!
//! ## Features
//!
//! - **Per-frame keyboard polling**: one snapshot in, at most one edit out
//! - **Key repeat**: immediate first character, repeats while held
//! - **Maximum length**: over-length keystrokes are silently dropped
//! - **Blinking cursor**: drawn just past the last character
//! - **Backend agnostic**: draws through a host-supplied [`ui::DrawSurface`]
//!
//! ## Frame loop
//!
//! ```rust,no_run
//! use text_field::prelude::*;
//!
//! # fn poll_keyboard() -> KeyboardState { KeyboardState::new() }
//! # fn main() -> Result<(), TextFieldError> {
//! text_field::foundation::logging::init();
//!
//! let mut field = TextField::builder(TextFieldConfig::load_from_file("field.toml")?)
//!     .with_background(TextureHandle(1), Vec2::new(256.0, 40.0))
//!     .with_font(FontHandle(1))
//!     .with_text_measure(MonospaceMetrics::new(12.0, 20.0))
//!     .build()?;
//!
//! let mut clock = FrameClock::new();
//! let mut batch = CommandRecorder::new();
//! loop {
//!     clock.tick();
//!     field.update(&poll_keyboard(), clock.total_seconds());
//!
//!     batch.clear();
//!     field.draw(&mut batch, clock.total_seconds());
//!     // submit batch.commands() to the renderer
//! }
//! # }
//! ```

pub mod core;
pub mod config;
pub mod error;
pub mod foundation;
pub mod input;
pub mod events;
pub mod ui;

pub use error::TextFieldError;

/// Common imports for widget users
pub mod prelude {
    pub use crate::{
        TextFieldError,
        config::{Config, ConfigError},
        core::config::{TextFieldConfig, CursorConfig},
        events::{TextChangedEvent, TextChangedHandler, SubscriptionId},
        foundation::{
            math::{Vec2, Color},
            time::FrameClock,
        },
        input::{KeyCode, KeyboardState, KeyAction, KeyMap},
        ui::{
            TextField, TextFieldBuilder, InputBuffer, FieldRenderer, Cursor, CursorState,
            DrawSurface, TextMeasure, MonospaceMetrics, TextureHandle, FontHandle,
            CommandRecorder, DrawCommand,
        },
    };
}
