//! Error types for the theme system.

/// Result type alias for theme operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the theme system.
///
/// Theme lookup itself is total (unrecognized names resolve to the dark
/// variant) and font path construction is a pure join, so neither returns
/// an error. The fallible surface is limited to parsing.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Color parsing error.
    #[error("Invalid color '{value}': {message}")]
    InvalidColor { value: String, message: String },

    /// Unknown font style name.
    #[error("Unknown font style '{name}' (expected Regular, Bold, Italic, or BoldItalic)")]
    UnknownFontStyle { name: String },
}

impl Error {
    /// Create a color parsing error.
    pub fn invalid_color(value: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidColor {
            value: value.into(),
            message: message.into(),
        }
    }

    /// Create an unknown font style error.
    pub fn unknown_font_style(name: impl Into<String>) -> Self {
        Self::UnknownFontStyle { name: name.into() }
    }
}
