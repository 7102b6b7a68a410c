//! Math utilities and types
//!
//! Screen-space vectors and colors used by the widget and its draw surface.

use serde::{Deserialize, Serialize};

pub use nalgebra::Vector2;

/// 2D vector type (screen space, pixels, y grows downward)
pub type Vec2 = Vector2<f32>;

/// Convert degrees to radians
pub fn to_radians(degrees: f32) -> f32 {
    degrees.to_radians()
}

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha channel
    pub a: u8,
}

impl Color {
    /// Opaque white, the neutral tint for textured draws
    pub const WHITE: Self = Self::rgba(255, 255, 255, 255);

    /// Opaque black
    pub const BLACK: Self = Self::rgba(0, 0, 0, 255);

    /// Create a color from all four channels
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_right_angle_in_radians() {
        assert_relative_eq!(to_radians(90.0), std::f32::consts::FRAC_PI_2, epsilon = 1e-6);
    }
}
