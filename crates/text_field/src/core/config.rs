//! # Text Field Configuration
//!
//! Serializable construction parameters for a [`TextField`](crate::ui::TextField).
//! Everything that can live in a file lives here; runtime capabilities
//! (background texture, font, text measurement) are supplied in code when
//! the widget is built.
//!
//! ```toml
//! starting_text = "TEST"
//! max_length = 15
//! border = 10.0
//! position = [272.0, 220.0]
//!
//! [foreground]
//! r = 236
//! g = 240
//! b = 241
//! a = 255
//! ```

use serde::{Deserialize, Serialize};

use crate::error::TextFieldError;
use crate::foundation::math::{Color, Vec2};
use crate::ui::widgets::field_renderer::{DEFAULT_BORDER, DEFAULT_FOREGROUND};
use crate::ui::widgets::input_buffer::DEFAULT_MAX_LENGTH;

// Re-export from the config module for convenience
pub use crate::config::{Config, ConfigError};

/// Cursor appearance
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CursorConfig {
    /// Fixed cursor color; `None` follows the field's foreground color
    pub color: Option<Color>,
}

/// # Text Field Configuration
///
/// Defaults: empty starting text, 15 characters, 10 units of border and a
/// light gray (236, 240, 241) foreground.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextFieldConfig {
    /// Text the field starts with
    pub starting_text: String,
    /// Maximum number of characters the buffer accepts
    pub max_length: usize,
    /// Interior left padding between the background edge and the text
    pub border: f32,
    /// Whether the field draws at all
    pub visible: bool,
    /// Ordering hint for hosts drawing several drawables
    pub draw_order: i32,
    /// Top-left anchor of the background, in screen pixels
    pub position: Vec2,
    /// Text tint
    pub foreground: Color,
    /// Cursor appearance
    pub cursor: CursorConfig,
}

impl TextFieldConfig {
    /// Create a configuration with defaults
    pub fn new() -> Self {
        Self {
            starting_text: String::new(),
            max_length: DEFAULT_MAX_LENGTH,
            border: DEFAULT_BORDER,
            visible: true,
            draw_order: 0,
            position: Vec2::zeros(),
            foreground: DEFAULT_FOREGROUND,
            cursor: CursorConfig::default(),
        }
    }

    /// Set the starting text
    pub fn with_starting_text(mut self, text: impl Into<String>) -> Self {
        self.starting_text = text.into();
        self
    }

    /// Set the maximum length
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    /// Set the top-left anchor
    pub fn with_position(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    /// Set the border padding
    pub fn with_border(mut self, border: f32) -> Self {
        self.border = border;
        self
    }

    /// Set the foreground color
    pub fn with_foreground(mut self, color: Color) -> Self {
        self.foreground = color;
        self
    }

    /// Give the cursor its own color instead of following the foreground
    pub fn with_cursor_color(mut self, color: Color) -> Self {
        self.cursor.color = Some(color);
        self
    }

    /// Set the draw order hint
    pub fn with_draw_order(mut self, draw_order: i32) -> Self {
        self.draw_order = draw_order;
        self
    }

    /// Show or hide the field
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), TextFieldError> {
        if self.max_length == 0 {
            return Err(TextFieldError::InvalidMaxLength);
        }

        let length = self.starting_text.chars().count();
        if length > self.max_length {
            return Err(TextFieldError::StartingTextTooLong {
                length,
                max_length: self.max_length,
            });
        }

        if !self.border.is_finite() || self.border < 0.0 {
            return Err(TextFieldError::InvalidBorder(self.border));
        }

        Ok(())
    }
}

impl Default for TextFieldConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Config for TextFieldConfig {}
