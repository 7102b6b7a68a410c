//! Text field errors
//!
//! Only construction and explicit programmatic edits can fail. Per-frame
//! keyboard handling never returns an error: unmapped keys, over-length
//! input and backspace on an empty buffer are ordinary no-ops.

use thiserror::Error;

use crate::config::ConfigError;

/// Text field errors
#[derive(Error, Debug)]
pub enum TextFieldError {
    /// No background texture was supplied
    #[error("Text field requires a background texture")]
    MissingBackground,

    /// No font was supplied
    #[error("Text field requires a font")]
    MissingFont,

    /// No text measurement capability was supplied
    #[error("Text field requires a text measurement capability")]
    MissingTextMeasure,

    /// Background extent is not a positive, finite size
    #[error("Invalid background extent: {width}x{height}")]
    InvalidExtent {
        /// Requested width
        width: f32,
        /// Requested height
        height: f32,
    },

    /// Maximum length must be at least one character
    #[error("Maximum length must be positive")]
    InvalidMaxLength,

    /// Border padding must be finite and non-negative
    #[error("Invalid border padding: {0}")]
    InvalidBorder(f32),

    /// Starting text does not fit the maximum length
    #[error("Starting text has {length} characters, maximum is {max_length}")]
    StartingTextTooLong {
        /// Starting text length in characters
        length: usize,
        /// Configured maximum
        max_length: usize,
    },

    /// Programmatic text does not fit the maximum length
    #[error("Text has {length} characters, maximum is {max_length}")]
    TextTooLong {
        /// Rejected text length in characters
        length: usize,
        /// Configured maximum
        max_length: usize,
    },

    /// Configuration file error
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}
