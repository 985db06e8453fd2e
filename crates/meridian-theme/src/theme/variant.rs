//! Theme variant selection and name resolution.

use std::fmt;

use super::ColorSet;

/// One of the built-in theme variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeVariant {
    Light,
    #[default]
    Dark,
}

impl ThemeVariant {
    /// Resolve a free-text theme name to a variant.
    ///
    /// Implements the unknown-theme-defaults-to-dark policy: only "light"
    /// and "dark" are recognized, and every other name (including the empty
    /// string) resolves to [`ThemeVariant::Dark`]. The function is total;
    /// callers that need to distinguish an explicit "dark" from a fallback
    /// should use [`ThemeVariant::recognize`].
    pub fn from_name(name: &str) -> Self {
        Self::recognize(name).unwrap_or(Self::Dark)
    }

    /// Resolve a theme name, reporting unrecognized names as `None`.
    pub fn recognize(name: &str) -> Option<Self> {
        match name {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// The built-in color set for this variant.
    pub const fn colors(self) -> ColorSet {
        match self {
            Self::Light => ColorSet::light(),
            Self::Dark => ColorSet::dark(),
        }
    }

    /// The canonical name of this variant.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
