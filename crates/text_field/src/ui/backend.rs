//! UI Render Backend Traits
//!
//! Defines the interface between the widget and the host's renderer.
//! Keeps the widget independent of any graphics API: the host implements
//! [`DrawSurface`] over its sprite batch and [`TextMeasure`] over its fonts.

use crate::foundation::math::{Color, Vec2};

/// Handle to a texture owned by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u64);

/// Handle to a font owned by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontHandle(pub u64);

/// Backend-agnostic draw interface
///
/// Calls are issued inside a begin/end batch scope the host manages.
pub trait DrawSurface {
    /// Draw a texture at its natural size with its top-left at `position`
    fn draw_image(&mut self, texture: TextureHandle, position: Vec2, tint: Color);

    /// Draw a string with its top-left at `position`
    fn draw_text(&mut self, font: FontHandle, text: &str, position: Vec2, color: Color);

    /// Draw a line starting at `start`, rotated `angle` radians clockwise
    /// from the +x axis (screen space, y down)
    fn draw_line(&mut self, start: Vec2, length: f32, angle: f32, color: Color, thickness: f32);
}

/// Text measurement interface
pub trait TextMeasure {
    /// Rendered size of `text` in `font`: (width, height)
    fn measure(&self, font: FontHandle, text: &str) -> Vec2;
}

/// Fixed-advance text metrics
///
/// Every character is `advance` wide and lines are `line_height` tall,
/// whatever the font. Suits bitmap fonts and headless hosts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMetrics {
    /// Horizontal advance per character
    pub advance: f32,
    /// Height of a line of text
    pub line_height: f32,
}

impl MonospaceMetrics {
    /// Create metrics for the given advance and line height
    pub const fn new(advance: f32, line_height: f32) -> Self {
        Self { advance, line_height }
    }
}

impl TextMeasure for MonospaceMetrics {
    #[allow(clippy::cast_precision_loss)]
    fn measure(&self, _font: FontHandle, text: &str) -> Vec2 {
        Vec2::new(text.chars().count() as f32 * self.advance, self.line_height)
    }
}

impl<T: TextMeasure + ?Sized> TextMeasure for Box<T> {
    fn measure(&self, font: FontHandle, text: &str) -> Vec2 {
        (**self).measure(font, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monospace_measure() {
        let metrics = MonospaceMetrics::new(12.0, 20.0);
        assert_eq!(metrics.measure(FontHandle(0), "TEST"), Vec2::new(48.0, 20.0));
        assert_eq!(metrics.measure(FontHandle(0), ""), Vec2::new(0.0, 20.0));
    }
}
