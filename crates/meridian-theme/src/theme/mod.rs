//! Theme system with the built-in light and dark variants.

mod fonts;
mod palette;
mod provider;
mod variant;

pub use fonts::{FontStyle, FONT_FAMILY};
pub use palette::ColorSet;
pub use provider::ThemeProvider;
pub use variant::ThemeVariant;

/// Standard text size in logical pixels, identical across themes.
pub const TEXT_SIZE: u32 = 14;

/// Standard gap between elements and around interface borders, in logical
/// pixels, identical across themes.
pub const PADDING: u32 = 4;
