//! Core UI widget primitives
//!
//! Shared placement data for drawable widgets.

use crate::foundation::math::Vec2;

/// Base element properties
#[derive(Debug, Clone, PartialEq)]
pub struct UIElement {
    /// Top-left corner in screen space (pixels)
    pub position: Vec2,

    /// Size in pixels (width, height)
    pub size: Vec2,

    /// Whether this element is drawn
    pub visible: bool,

    /// Draw ordering hint for hosts (higher = drawn later)
    pub draw_order: i32,
}

impl Default for UIElement {
    fn default() -> Self {
        Self {
            position: Vec2::zeros(),
            size: Vec2::new(100.0, 50.0),
            visible: true,
            draw_order: 0,
        }
    }
}

impl UIElement {
    /// Create a visible element at `position` with the given size
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self {
            position,
            size,
            ..Default::default()
        }
    }

    /// Top edge for content `content_height` tall, centred vertically
    pub fn centered_top(&self, content_height: f32) -> f32 {
        self.position.y + (self.size.y / 2.0 - content_height / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_top() {
        let element = UIElement::new(Vec2::new(10.0, 20.0), Vec2::new(200.0, 40.0));
        assert_eq!(element.centered_top(20.0), 30.0);
        assert_eq!(element.centered_top(40.0), 20.0);
        assert_eq!(element.centered_top(0.0), 40.0);
    }
}
