//! UI System Module
//!
//! Keeps widget logic separate from the host's renderer.
//!
//! Architecture:
//! - widgets/: the text field, its buffer, renderer and cursor
//! - backend: traits the host implements (draw surface, text measurement)
//! - rendering/: draw command recording for batching hosts

pub mod backend;
pub mod widgets;
pub mod rendering;

pub use backend::{DrawSurface, TextMeasure, MonospaceMetrics, TextureHandle, FontHandle};

// Re-export widgets
pub use widgets::{
    UIElement, BufferId, InputBuffer, Cursor, CursorState, FieldRenderer, FieldRendererBuilder,
    TextField, TextFieldBuilder,
};

// Re-export rendering types
pub use rendering::{CommandRecorder, DrawCommand};
