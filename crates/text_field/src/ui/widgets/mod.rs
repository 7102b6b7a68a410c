//! UI widgets module
//!
//! The text field and the pieces it is made of.

pub mod core;
pub mod input_buffer;
pub mod cursor;
pub mod field_renderer;
pub mod text_field;

// Re-export core types
pub use self::core::UIElement;

// Re-export widget types
pub use input_buffer::{BufferId, InputBuffer, DEFAULT_MAX_LENGTH, KEY_REPEAT_THRESHOLD};
pub use cursor::{Cursor, CursorState, CURSOR_BLINK_PERIOD, CURSOR_THICKNESS};
pub use field_renderer::{FieldRenderer, FieldRendererBuilder, DEFAULT_BORDER, DEFAULT_FOREGROUND};
pub use text_field::{TextField, TextFieldBuilder};
