//! Blinking text cursor

use crate::foundation::math::{to_radians, Color, Vec2};
use crate::ui::backend::DrawSurface;

use super::core::UIElement;

/// Seconds between cursor visibility toggles
pub const CURSOR_BLINK_PERIOD: f64 = 0.8;

/// Cursor line thickness in pixels
pub const CURSOR_THICKNESS: f32 = 2.0;

/// Cursor blink state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorState {
    /// Line is drawn
    Visible,
    /// Line is not drawn
    Hidden,
}

impl CursorState {
    fn toggled(self) -> Self {
        match self {
            Self::Visible => Self::Hidden,
            Self::Hidden => Self::Visible,
        }
    }
}

/// Vertical line drawn after the last character, blinking on a timer
///
/// The line is half as tall as the field background and centred in it.
#[derive(Debug, Clone)]
pub struct Cursor {
    base_position: Vec2,
    length: f32,
    angle: f32,
    offset: f32,
    color: Color,
    state: CursorState,
    last_toggle_time: f64,
}

impl Cursor {
    /// Create a visible cursor for a field occupying `container`
    pub fn new(container: &UIElement, color: Color) -> Self {
        let length = container.size.y / 2.0;
        Self {
            base_position: Vec2::new(container.position.x, container.centered_top(length)),
            length,
            angle: to_radians(90.0),
            offset: 0.0,
            color,
            state: CursorState::Visible,
            last_toggle_time: 0.0,
        }
    }

    /// Advance the blink timer and draw the line if visible
    pub fn draw(&mut self, surface: &mut dyn DrawSurface, now: f64) {
        if now - self.last_toggle_time > CURSOR_BLINK_PERIOD {
            self.last_toggle_time = now;
            self.state = self.state.toggled();
        }

        if self.state == CursorState::Visible {
            surface.draw_line(self.line_start(), self.length, self.angle, self.color, CURSOR_THICKNESS);
        }
    }

    /// Where the line starts: after the text, one thickness clear of it
    pub fn line_start(&self) -> Vec2 {
        self.base_position + Vec2::new(self.offset + CURSOR_THICKNESS, 0.0)
    }

    /// Top of the line with zero offset
    pub fn base_position(&self) -> Vec2 {
        self.base_position
    }

    /// Horizontal distance from the field's left edge
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Set the horizontal distance from the field's left edge
    pub fn set_offset(&mut self, offset: f32) {
        self.offset = offset;
    }

    /// Line color
    pub fn color(&self) -> Color {
        self.color
    }

    /// Set the line color
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Line length in pixels
    pub fn length(&self) -> f32 {
        self.length
    }

    /// Current blink state
    pub fn state(&self) -> CursorState {
        self.state
    }

    /// Whether the line is currently drawn
    pub fn is_visible(&self) -> bool {
        self.state == CursorState::Visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::rendering::{CommandRecorder, DrawCommand};
    use approx::assert_relative_eq;

    fn cursor() -> Cursor {
        let container = UIElement::new(Vec2::new(100.0, 50.0), Vec2::new(240.0, 40.0));
        Cursor::new(&container, Color::BLACK)
    }

    #[test]
    fn test_geometry() {
        let mut cursor = cursor();
        assert_eq!(cursor.length(), 20.0);
        assert_eq!(cursor.base_position(), Vec2::new(100.0, 60.0));

        cursor.set_offset(58.0);
        assert_eq!(cursor.line_start(), Vec2::new(160.0, 60.0));
    }

    #[test]
    fn test_draws_vertical_line_while_visible() {
        let mut cursor = cursor();
        let mut recorder = CommandRecorder::new();
        cursor.draw(&mut recorder, 0.1);

        match recorder.commands() {
            [DrawCommand::Line { start, length, angle, color, thickness }] => {
                assert_eq!(*start, Vec2::new(102.0, 60.0));
                assert_eq!(*length, 20.0);
                assert_relative_eq!(*angle, std::f32::consts::FRAC_PI_2, epsilon = 1e-6);
                assert_eq!(*color, Color::BLACK);
                assert_eq!(*thickness, CURSOR_THICKNESS);
            }
            other => panic!("expected one line, got {other:?}"),
        }
    }

    #[test]
    fn test_blinks_once_per_period() {
        let mut cursor = cursor();
        let mut recorder = CommandRecorder::new();
        assert!(cursor.is_visible());

        cursor.draw(&mut recorder, 0.5);
        assert!(cursor.is_visible());

        cursor.draw(&mut recorder, 0.81);
        assert_eq!(cursor.state(), CursorState::Hidden);

        cursor.draw(&mut recorder, 1.2);
        assert_eq!(cursor.state(), CursorState::Hidden);

        cursor.draw(&mut recorder, 1.62);
        assert_eq!(cursor.state(), CursorState::Visible);

        // Drawn at 0.5 and 1.62 only
        assert_eq!(recorder.commands().len(), 2);
    }
}
