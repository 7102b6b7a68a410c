//! UI draw commands
//!
//! [`CommandRecorder`] is a [`DrawSurface`] that records instead of drawing,
//! for hosts that collect a frame's UI and submit it to their renderer in
//! one batch later.

use crate::foundation::math::{Color, Vec2};
use crate::ui::backend::{DrawSurface, FontHandle, TextureHandle};

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Textured rectangle
    Image {
        /// Texture to draw
        texture: TextureHandle,
        /// Top-left corner
        position: Vec2,
        /// Tint color
        tint: Color,
    },
    /// Text run
    Text {
        /// Font to draw with
        font: FontHandle,
        /// Text content
        text: String,
        /// Top-left corner
        position: Vec2,
        /// Text color
        color: Color,
    },
    /// Line segment
    Line {
        /// Start point
        start: Vec2,
        /// Length in pixels
        length: f32,
        /// Rotation in radians
        angle: f32,
        /// Line color
        color: Color,
        /// Line thickness in pixels
        thickness: f32,
    },
}

/// Draw surface that records commands for later submission
#[derive(Debug, Clone, Default)]
pub struct CommandRecorder {
    commands: Vec<DrawCommand>,
}

impl CommandRecorder {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands recorded since the last clear
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded commands, leaving the recorder empty
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Clear recorded commands
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Replay recorded commands onto another surface
    pub fn replay(&self, surface: &mut dyn DrawSurface) {
        for command in &self.commands {
            match command {
                DrawCommand::Image { texture, position, tint } => {
                    surface.draw_image(*texture, *position, *tint);
                }
                DrawCommand::Text { font, text, position, color } => {
                    surface.draw_text(*font, text, *position, *color);
                }
                DrawCommand::Line { start, length, angle, color, thickness } => {
                    surface.draw_line(*start, *length, *angle, *color, *thickness);
                }
            }
        }
    }
}

impl DrawSurface for CommandRecorder {
    fn draw_image(&mut self, texture: TextureHandle, position: Vec2, tint: Color) {
        self.commands.push(DrawCommand::Image { texture, position, tint });
    }

    fn draw_text(&mut self, font: FontHandle, text: &str, position: Vec2, color: Color) {
        self.commands.push(DrawCommand::Text {
            font,
            text: text.to_owned(),
            position,
            color,
        });
    }

    fn draw_line(&mut self, start: Vec2, length: f32, angle: f32, color: Color, thickness: f32) {
        self.commands.push(DrawCommand::Line {
            start,
            length,
            angle,
            color,
            thickness,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replay_preserves_order() {
        let mut recorder = CommandRecorder::new();
        recorder.draw_image(TextureHandle(1), Vec2::new(0.0, 0.0), Color::WHITE);
        recorder.draw_text(FontHandle(2), "hi", Vec2::new(10.0, 5.0), Color::BLACK);
        recorder.draw_line(Vec2::new(1.0, 1.0), 4.0, 0.0, Color::BLACK, 2.0);

        let mut copy = CommandRecorder::new();
        recorder.replay(&mut copy);

        assert_eq!(copy.commands(), recorder.commands());
        assert_eq!(recorder.take().len(), 3);
        assert!(recorder.commands().is_empty());
    }
}
