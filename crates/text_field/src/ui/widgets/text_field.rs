//! Text field widget
//!
//! [`TextField`] owns an [`InputBuffer`] and the [`FieldRenderer`] that
//! draws it, so the two stay bound one-to-one for the widget's lifetime.
//!
//! ```
//! use text_field::prelude::*;
//!
//! let config = TextFieldConfig::new()
//!     .with_starting_text("TEST")
//!     .with_position(Vec2::new(272.0, 220.0));
//! let mut field = TextField::builder(config)
//!     .with_background(TextureHandle(1), Vec2::new(256.0, 40.0))
//!     .with_font(FontHandle(1))
//!     .with_text_measure(MonospaceMetrics::new(12.0, 20.0))
//!     .build()?;
//!
//! let mut batch = CommandRecorder::new();
//! field.update(&KeyboardState::new().with_key(KeyCode::D1), 0.0);
//! field.draw(&mut batch, 0.0);
//!
//! assert_eq!(field.text(), "TEST1");
//! # Ok::<(), TextFieldError>(())
//! ```

use crate::core::config::TextFieldConfig;
use crate::error::TextFieldError;
use crate::events::{SubscriptionId, TextChangedHandler};
use crate::foundation::math::Vec2;
use crate::input::KeyboardState;
use crate::ui::backend::{DrawSurface, FontHandle, TextMeasure, TextureHandle};

use super::field_renderer::{FieldRenderer, FieldRendererBuilder};
use super::input_buffer::InputBuffer;

/// A text entry box: buffer, key repeat, layout and blinking cursor
#[derive(Debug)]
pub struct TextField {
    buffer: InputBuffer,
    renderer: FieldRenderer,
}

impl TextField {
    /// Start building a field from a configuration
    pub fn builder(config: TextFieldConfig) -> TextFieldBuilder {
        TextFieldBuilder::new(config)
    }

    /// Process one frame of keyboard input, then re-layout if the text changed
    pub fn update(&mut self, keys: &KeyboardState, now: f64) {
        self.buffer.update(keys, now);
        self.renderer.sync(&self.buffer);
    }

    /// Draw the field
    pub fn draw(&mut self, surface: &mut dyn DrawSurface, now: f64) {
        self.renderer.draw(&self.buffer, surface, now);
    }

    /// Replace the text programmatically
    pub fn set_text(&mut self, text: impl Into<String>, now: f64) -> Result<(), TextFieldError> {
        self.buffer.set_text(text, now)?;
        self.renderer.sync(&self.buffer);
        Ok(())
    }

    /// Empty the field
    pub fn clear(&mut self, now: f64) {
        self.buffer.clear(now);
        self.renderer.sync(&self.buffer);
    }

    /// Register a handler for text changes
    pub fn subscribe(&mut self, handler: impl TextChangedHandler + 'static) -> SubscriptionId {
        self.buffer.subscribe(handler)
    }

    /// Remove a previously registered handler
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.buffer.unsubscribe(id)
    }

    /// Current text
    pub fn text(&self) -> &str {
        self.buffer.text()
    }

    /// The text buffer
    pub fn buffer(&self) -> &InputBuffer {
        &self.buffer
    }

    /// The text buffer, for enabling/disabling input
    pub fn buffer_mut(&mut self) -> &mut InputBuffer {
        &mut self.buffer
    }

    /// The renderer
    pub fn renderer(&self) -> &FieldRenderer {
        &self.renderer
    }

    /// The renderer, for appearance changes
    pub fn renderer_mut(&mut self) -> &mut FieldRenderer {
        &mut self.renderer
    }
}

/// Builder for [`TextField`]
pub struct TextFieldBuilder {
    config: TextFieldConfig,
    renderer: FieldRendererBuilder,
}

impl TextFieldBuilder {
    /// Create a builder from a configuration
    pub fn new(config: TextFieldConfig) -> Self {
        let renderer = FieldRendererBuilder::new().with_config(&config);
        Self { config, renderer }
    }

    /// Set the background texture and its size in pixels
    pub fn with_background(mut self, texture: TextureHandle, extent: Vec2) -> Self {
        self.renderer = self.renderer.with_background(texture, extent);
        self
    }

    /// Set the font
    pub fn with_font(mut self, font: FontHandle) -> Self {
        self.renderer = self.renderer.with_font(font);
        self
    }

    /// Set the text measurement capability
    pub fn with_text_measure(mut self, measure: impl TextMeasure + 'static) -> Self {
        self.renderer = self.renderer.with_text_measure(measure);
        self
    }

    /// Validate the configuration and build the field
    pub fn build(self) -> Result<TextField, TextFieldError> {
        self.config.validate()?;
        let buffer = InputBuffer::from_config(&self.config)?;
        let renderer = self.renderer.build(&buffer)?;
        Ok(TextField { buffer, renderer })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyCode;
    use crate::ui::backend::MonospaceMetrics;
    use crate::ui::rendering::{CommandRecorder, DrawCommand};

    fn field(config: TextFieldConfig) -> TextField {
        TextField::builder(config)
            .with_background(TextureHandle(1), Vec2::new(200.0, 30.0))
            .with_font(FontHandle(2))
            .with_text_measure(MonospaceMetrics::new(10.0, 16.0))
            .build()
            .unwrap()
    }

    #[test]
    fn test_update_keeps_renderer_in_step() {
        let mut field = field(TextFieldConfig::new().with_starting_text("ab"));
        assert_eq!(field.renderer().cursor_offset(), 30.0);

        field.update(&KeyboardState::new().with_key(KeyCode::C), 0.0);
        assert_eq!(field.text(), "abc");
        assert_eq!(field.renderer().cursor_offset(), 40.0);
    }

    #[test]
    fn test_set_text_relayouts() {
        let mut field = field(TextFieldConfig::new().with_max_length(5));
        field.set_text("hello", 0.0).unwrap();
        assert_eq!(field.renderer().cursor_offset(), 60.0);

        assert!(field.set_text("toolong", 0.0).is_err());
        assert_eq!(field.text(), "hello");

        field.clear(0.0);
        assert_eq!(field.renderer().cursor_offset(), 10.0);
    }

    #[test]
    fn test_config_appearance_reaches_renderer() {
        let config = TextFieldConfig::new()
            .with_position(Vec2::new(5.0, 5.0))
            .with_border(2.0)
            .with_draw_order(3)
            .with_cursor_color(crate::foundation::math::Color::BLACK);
        let mut field = field(config);
        let mut recorder = CommandRecorder::new();

        field.draw(&mut recorder, 0.0);

        assert_eq!(field.renderer().draw_order(), 3);
        assert_eq!(field.renderer().text_offset(), Vec2::new(7.0, 12.0));
        match &recorder.commands()[2] {
            DrawCommand::Line { color, .. } => assert_eq!(*color, crate::foundation::math::Color::BLACK),
            other => panic!("expected cursor line, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_config_fails_build() {
        let result = TextField::builder(TextFieldConfig::new().with_starting_text("x".repeat(16)))
            .with_background(TextureHandle(1), Vec2::new(200.0, 30.0))
            .with_font(FontHandle(2))
            .with_text_measure(MonospaceMetrics::new(10.0, 16.0))
            .build();

        assert!(matches!(result, Err(TextFieldError::StartingTextTooLong { length: 16, max_length: 15 })));
    }
}
