//! Text field presentation
//!
//! [`FieldRenderer`] draws one [`InputBuffer`]: the background image, the
//! text vertically centred inside it after a left border, and a blinking
//! [`Cursor`] just past the last character. Offsets are recomputed from
//! the measured text whenever the buffer's revision moves.

use std::fmt;

use crate::core::config::TextFieldConfig;
use crate::error::TextFieldError;
use crate::foundation::math::{Color, Vec2};
use crate::ui::backend::{DrawSurface, FontHandle, TextMeasure, TextureHandle};

use super::core::UIElement;
use super::cursor::Cursor;
use super::input_buffer::{BufferId, InputBuffer};

/// Default interior left padding
pub const DEFAULT_BORDER: f32 = 10.0;

/// Default text color, a light gray
pub const DEFAULT_FOREGROUND: Color = Color::rgba(236, 240, 241, 255);

/// Draws a text field bound to one [`InputBuffer`]
pub struct FieldRenderer {
    element: UIElement,
    background: TextureHandle,
    font: FontHandle,
    measure: Box<dyn TextMeasure>,
    border: f32,
    foreground: Color,
    cursor_color: Option<Color>,
    text_size: Vec2,
    text_offset: Vec2,
    cursor: Cursor,
    buffer_id: BufferId,
    seen_revision: u64,
}

impl FieldRenderer {
    /// Start building a renderer
    pub fn builder() -> FieldRendererBuilder {
        FieldRendererBuilder::new()
    }

    /// React to buffer changes since the last call
    ///
    /// Returns true if the text changed and offsets were recomputed. A
    /// buffer other than the one the renderer was built for is laid out
    /// from scratch and becomes the bound buffer.
    pub fn sync(&mut self, buffer: &InputBuffer) -> bool {
        if buffer.id() != self.buffer_id {
            log::warn!("Renderer bound to {:?} was given {:?}; rebinding", self.buffer_id, buffer.id());
            self.buffer_id = buffer.id();
        } else if buffer.revision() == self.seen_revision {
            return false;
        }

        self.seen_revision = buffer.revision();
        self.update_buffer_position(buffer.text());
        true
    }

    fn update_buffer_position(&mut self, text: &str) {
        self.text_size = self.measure.measure(self.font, text);
        self.layout();
    }

    fn layout(&mut self) {
        self.text_offset = Vec2::new(
            self.border + self.element.position.x,
            self.element.centered_top(self.text_size.y),
        );
        self.cursor.set_offset(self.border + self.text_size.x);
    }

    /// Draw background, text and cursor
    ///
    /// Must run inside the host's batch scope, once per frame, after the
    /// buffer's update.
    pub fn draw(&mut self, buffer: &InputBuffer, surface: &mut dyn DrawSurface, now: f64) {
        self.sync(buffer);

        if !self.element.visible {
            return;
        }

        surface.draw_image(self.background, self.element.position, Color::WHITE);
        surface.draw_text(self.font, buffer.text(), self.text_offset, self.foreground);
        self.cursor.draw(surface, now);
    }

    /// Where the text is drawn
    pub fn text_offset(&self) -> Vec2 {
        self.text_offset
    }

    /// Cursor distance from the field's left edge
    pub fn cursor_offset(&self) -> f32 {
        self.cursor.offset()
    }

    /// The blinking cursor
    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    /// Placement of the field
    pub fn element(&self) -> &UIElement {
        &self.element
    }

    /// Interior left padding
    pub fn border(&self) -> f32 {
        self.border
    }

    /// Set the interior left padding and re-layout immediately
    ///
    /// A negative or non-finite border is rejected and the layout kept.
    pub fn set_border(&mut self, border: f32) -> Result<(), TextFieldError> {
        check_border(border)?;
        self.border = border;
        self.layout();
        Ok(())
    }

    /// Text color
    pub fn foreground(&self) -> Color {
        self.foreground
    }

    /// Set the text color; a cursor without its own color follows it
    pub fn set_foreground(&mut self, color: Color) {
        self.foreground = color;
        if self.cursor_color.is_none() {
            self.cursor.set_color(color);
        }
    }

    /// Give the cursor its own color, or `None` to follow the foreground
    pub fn set_cursor_color(&mut self, color: Option<Color>) {
        self.cursor_color = color;
        self.cursor.set_color(color.unwrap_or(self.foreground));
    }

    /// Whether the field is drawn
    pub fn is_visible(&self) -> bool {
        self.element.visible
    }

    /// Show or hide the field
    pub fn set_visible(&mut self, visible: bool) {
        self.element.visible = visible;
    }

    /// Draw ordering hint
    pub fn draw_order(&self) -> i32 {
        self.element.draw_order
    }

    /// Set the draw ordering hint
    pub fn set_draw_order(&mut self, draw_order: i32) {
        self.element.draw_order = draw_order;
    }
}

impl fmt::Debug for FieldRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldRenderer")
            .field("element", &self.element)
            .field("background", &self.background)
            .field("font", &self.font)
            .field("border", &self.border)
            .field("foreground", &self.foreground)
            .field("text_offset", &self.text_offset)
            .field("cursor", &self.cursor)
            .field("buffer_id", &self.buffer_id)
            .field("seen_revision", &self.seen_revision)
            .finish_non_exhaustive()
    }
}

/// Builder for [`FieldRenderer`]
///
/// Background, font and text measurement are required; building without
/// any of them fails with a configuration error.
pub struct FieldRendererBuilder {
    background: Option<(TextureHandle, Vec2)>,
    font: Option<FontHandle>,
    measure: Option<Box<dyn TextMeasure>>,
    position: Vec2,
    border: f32,
    foreground: Color,
    cursor_color: Option<Color>,
    visible: bool,
    draw_order: i32,
}

impl Default for FieldRendererBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldRendererBuilder {
    /// Create a builder with default appearance and no capabilities
    pub fn new() -> Self {
        Self {
            background: None,
            font: None,
            measure: None,
            position: Vec2::zeros(),
            border: DEFAULT_BORDER,
            foreground: DEFAULT_FOREGROUND,
            cursor_color: None,
            visible: true,
            draw_order: 0,
        }
    }

    /// Set the background texture and its size in pixels
    pub fn with_background(mut self, texture: TextureHandle, extent: Vec2) -> Self {
        self.background = Some((texture, extent));
        self
    }

    /// Set the font
    pub fn with_font(mut self, font: FontHandle) -> Self {
        self.font = Some(font);
        self
    }

    /// Set the text measurement capability
    pub fn with_text_measure(mut self, measure: impl TextMeasure + 'static) -> Self {
        self.measure = Some(Box::new(measure));
        self
    }

    /// Set the top-left anchor
    pub fn with_position(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    /// Set the interior left padding
    pub fn with_border(mut self, border: f32) -> Self {
        self.border = border;
        self
    }

    /// Set the text color
    pub fn with_foreground(mut self, color: Color) -> Self {
        self.foreground = color;
        self
    }

    /// Give the cursor its own color
    pub fn with_cursor_color(mut self, color: Color) -> Self {
        self.cursor_color = Some(color);
        self
    }

    /// Show or hide the field
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Set the draw ordering hint
    pub fn with_draw_order(mut self, draw_order: i32) -> Self {
        self.draw_order = draw_order;
        self
    }

    /// Apply the appearance settings of a configuration
    pub fn with_config(mut self, config: &TextFieldConfig) -> Self {
        self.position = config.position;
        self.border = config.border;
        self.foreground = config.foreground;
        self.cursor_color = config.cursor.color;
        self.visible = config.visible;
        self.draw_order = config.draw_order;
        self
    }

    /// Build a renderer bound to `buffer` and lay out its current text
    pub fn build(self, buffer: &InputBuffer) -> Result<FieldRenderer, TextFieldError> {
        let (background, extent) = self.background.ok_or(TextFieldError::MissingBackground)?;
        let font = self.font.ok_or(TextFieldError::MissingFont)?;
        let measure = self.measure.ok_or(TextFieldError::MissingTextMeasure)?;

        let valid_extent = extent.x.is_finite() && extent.y.is_finite() && extent.x > 0.0 && extent.y > 0.0;
        if !valid_extent {
            return Err(TextFieldError::InvalidExtent {
                width: extent.x,
                height: extent.y,
            });
        }

        check_border(self.border)?;

        let element = UIElement {
            position: self.position,
            size: extent,
            visible: self.visible,
            draw_order: self.draw_order,
        };
        let cursor = Cursor::new(&element, self.cursor_color.unwrap_or(self.foreground));

        let mut renderer = FieldRenderer {
            element,
            background,
            font,
            measure,
            border: self.border,
            foreground: self.foreground,
            cursor_color: self.cursor_color,
            text_size: Vec2::zeros(),
            text_offset: Vec2::zeros(),
            cursor,
            buffer_id: buffer.id(),
            seen_revision: buffer.revision(),
        };
        renderer.update_buffer_position(buffer.text());

        log::info!(
            "Created text field renderer at {:?}, size {:?}",
            (renderer.element.position.x, renderer.element.position.y),
            (extent.x, extent.y)
        );
        Ok(renderer)
    }
}

fn check_border(border: f32) -> Result<(), TextFieldError> {
    if border.is_finite() && border >= 0.0 {
        Ok(())
    } else {
        Err(TextFieldError::InvalidBorder(border))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{KeyCode, KeyboardState};
    use crate::ui::backend::MonospaceMetrics;
    use crate::ui::rendering::{CommandRecorder, DrawCommand};

    const BACKGROUND: TextureHandle = TextureHandle(7);
    const FONT: FontHandle = FontHandle(3);

    fn builder() -> FieldRendererBuilder {
        FieldRenderer::builder()
            .with_background(BACKGROUND, Vec2::new(300.0, 40.0))
            .with_font(FONT)
            .with_text_measure(MonospaceMetrics::new(12.0, 20.0))
            .with_position(Vec2::new(50.0, 100.0))
    }

    #[test]
    fn test_initial_layout() {
        let buffer = InputBuffer::with_text("TEST").unwrap();
        let renderer = builder().build(&buffer).unwrap();

        assert_eq!(renderer.text_offset(), Vec2::new(60.0, 110.0));
        assert_eq!(renderer.cursor_offset(), 58.0);
        assert_eq!(renderer.foreground(), DEFAULT_FOREGROUND);
        assert_eq!(renderer.cursor().color(), DEFAULT_FOREGROUND);
    }

    #[test]
    fn test_cursor_offset_grows_by_appended_width() {
        let mut buffer = InputBuffer::with_text("A").unwrap();
        let mut renderer = builder().build(&buffer).unwrap();
        let before = renderer.cursor_offset();

        buffer.update(&KeyboardState::new().with_key(KeyCode::B).with_shift(true), 0.0);
        assert_eq!(buffer.text(), "AB");
        assert!(renderer.sync(&buffer));
        assert!(!renderer.sync(&buffer));

        let width_of_b = MonospaceMetrics::new(12.0, 20.0).measure(FONT, "B").x;
        assert_eq!(renderer.cursor_offset() - before, width_of_b);
    }

    #[test]
    fn test_draw_order_of_calls() {
        let buffer = InputBuffer::with_text("hi").unwrap();
        let mut renderer = builder().build(&buffer).unwrap();
        let mut recorder = CommandRecorder::new();

        renderer.draw(&buffer, &mut recorder, 0.0);

        let commands = recorder.commands();
        assert_eq!(commands.len(), 3);
        assert_eq!(
            commands[0],
            DrawCommand::Image {
                texture: BACKGROUND,
                position: Vec2::new(50.0, 100.0),
                tint: Color::WHITE,
            }
        );
        assert_eq!(
            commands[1],
            DrawCommand::Text {
                font: FONT,
                text: "hi".to_string(),
                position: Vec2::new(60.0, 110.0),
                color: DEFAULT_FOREGROUND,
            }
        );
        assert!(matches!(commands[2], DrawCommand::Line { .. }));
    }

    #[test]
    fn test_hidden_field_draws_nothing() {
        let buffer = InputBuffer::new();
        let mut renderer = builder().with_visible(false).build(&buffer).unwrap();
        let mut recorder = CommandRecorder::new();

        renderer.draw(&buffer, &mut recorder, 0.0);
        assert!(recorder.commands().is_empty());

        renderer.set_visible(true);
        renderer.draw(&buffer, &mut recorder, 0.0);
        assert_eq!(recorder.commands().len(), 3);
    }

    #[test]
    fn test_set_border_relayouts() {
        let buffer = InputBuffer::with_text("abc").unwrap();
        let mut renderer = builder().build(&buffer).unwrap();

        renderer.set_border(4.0).unwrap();
        assert_eq!(renderer.text_offset().x, 54.0);
        assert_eq!(renderer.cursor_offset(), 40.0);
    }

    #[test]
    fn test_set_border_rejects_invalid_padding() {
        let buffer = InputBuffer::with_text("abc").unwrap();
        let mut renderer = builder().build(&buffer).unwrap();

        assert!(matches!(renderer.set_border(-1.0), Err(TextFieldError::InvalidBorder(_))));
        assert!(matches!(renderer.set_border(f32::NAN), Err(TextFieldError::InvalidBorder(_))));
        assert_eq!(renderer.border(), DEFAULT_BORDER);
        assert_eq!(renderer.cursor_offset(), 46.0);
    }

    #[test]
    fn test_other_buffer_is_laid_out_before_drawing() {
        let bound = InputBuffer::with_text("A").unwrap();
        let other = InputBuffer::with_text("LONGTEXT").unwrap();
        let mut renderer = builder().build(&bound).unwrap();
        let mut recorder = CommandRecorder::new();
        assert_eq!(bound.revision(), other.revision());

        renderer.draw(&other, &mut recorder, 0.0);

        assert_eq!(renderer.cursor_offset(), 10.0 + 8.0 * 12.0);
        match &recorder.commands()[2] {
            DrawCommand::Line { start, .. } => assert_eq!(start.x, 50.0 + 106.0 + 2.0),
            command => panic!("expected cursor line, got {command:?}"),
        }

        // Once rebound, an unchanged buffer needs no further layout
        assert!(!renderer.sync(&other));
    }

    #[test]
    fn test_cursor_color_follows_foreground_unless_overridden() {
        let buffer = InputBuffer::new();
        let mut renderer = builder().build(&buffer).unwrap();

        renderer.set_foreground(Color::rgb(10, 20, 30));
        assert_eq!(renderer.cursor().color(), Color::rgb(10, 20, 30));

        renderer.set_cursor_color(Some(Color::BLACK));
        renderer.set_foreground(Color::WHITE);
        assert_eq!(renderer.cursor().color(), Color::BLACK);

        renderer.set_cursor_color(None);
        assert_eq!(renderer.cursor().color(), Color::WHITE);
    }

    #[test]
    fn test_missing_capabilities_fail_fast() {
        let buffer = InputBuffer::new();

        let no_background = FieldRenderer::builder()
            .with_font(FONT)
            .with_text_measure(MonospaceMetrics::new(1.0, 1.0))
            .build(&buffer);
        assert!(matches!(no_background, Err(TextFieldError::MissingBackground)));

        let no_font = FieldRenderer::builder()
            .with_background(BACKGROUND, Vec2::new(10.0, 10.0))
            .with_text_measure(MonospaceMetrics::new(1.0, 1.0))
            .build(&buffer);
        assert!(matches!(no_font, Err(TextFieldError::MissingFont)));

        let no_measure = FieldRenderer::builder()
            .with_background(BACKGROUND, Vec2::new(10.0, 10.0))
            .with_font(FONT)
            .build(&buffer);
        assert!(matches!(no_measure, Err(TextFieldError::MissingTextMeasure)));
    }

    #[test]
    fn test_invalid_extent_and_border() {
        let buffer = InputBuffer::new();

        let flat = builder().with_background(BACKGROUND, Vec2::new(100.0, 0.0)).build(&buffer);
        assert!(matches!(flat, Err(TextFieldError::InvalidExtent { .. })));

        let negative = builder().with_border(-2.0).build(&buffer);
        assert!(matches!(negative, Err(TextFieldError::InvalidBorder(_))));
    }
}
