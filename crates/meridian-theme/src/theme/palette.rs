//! Built-in color sets.

use crate::color::Color;

/// The four-color record defining one theme's palette.
///
/// Exactly two built-in sets exist, [`ColorSet::light`] and
/// [`ColorSet::dark`]; both are compile-time constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSet {
    /// Main background color.
    pub background: Color,
    /// Standard button color.
    pub button: Color,
    /// Standard text color.
    pub text: Color,
    /// Color used to highlight primary features and focused widgets.
    pub primary: Color,
}

impl ColorSet {
    /// The light theme palette.
    pub const fn light() -> Self {
        Self {
            background: Color::new(0xFF, 0xFF, 0xFF, 0xFF),
            button: Color::new(0xEE, 0xEE, 0xEE, 0xFF),
            text: Color::new(0x00, 0x00, 0x00, 0xDD),
            primary: Color::new(0x9F, 0xA8, 0xDA, 0xFF),
        }
    }

    /// The dark theme palette.
    pub const fn dark() -> Self {
        Self {
            background: Color::new(0x42, 0x42, 0x42, 0xFF),
            button: Color::new(0x21, 0x21, 0x21, 0xFF),
            text: Color::new(0xFF, 0xFF, 0xFF, 0xFF),
            primary: Color::new(0x1A, 0x23, 0x7E, 0xFF),
        }
    }
}

impl Default for ColorSet {
    /// Dark is the fallback variant for unrecognized theme names, so it is
    /// also the default set.
    fn default() -> Self {
        Self::dark()
    }
}
