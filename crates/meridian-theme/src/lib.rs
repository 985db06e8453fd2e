//! Theme-driven visual constants for the Meridian UI toolkit.
//!
//! This crate supplies the rendering layer with a consistent set of colors,
//! a standard text size and padding, and the paths of the shipped font
//! assets, all keyed on a runtime-selected theme name. It provides:
//!
//! - **Built-in themes**: light and dark [`ColorSet`]s defined as
//!   compile-time constants
//! - **Name resolution**: a closed [`ThemeVariant`] enum with an explicit
//!   unknown-theme-defaults-to-dark policy
//! - **Settings seam**: the [`Settings`] trait with environment-variable,
//!   OS-appearance, and fixed implementations
//! - **Cached lookup**: [`ThemeProvider`] refreshes its color cache
//!   whenever the observed theme name changes
//!
//! # Example
//!
//! ```
//! use meridian_theme::prelude::*;
//!
//! let provider = ThemeProvider::new(FixedSettings::new("light"), "assets/font");
//!
//! assert_eq!(provider.background_color(), Color::new(255, 255, 255, 255));
//! assert_eq!(provider.text_size(), 14);
//! assert!(provider.text_font().ends_with("NotoSans-Regular.ttf"));
//! ```
//!
//! The crate instruments itself with the `tracing` crate; install a
//! subscriber in the host application to see theme reload events.
//!
//! [`ColorSet`]: theme::ColorSet
//! [`ThemeVariant`]: theme::ThemeVariant
//! [`Settings`]: settings::Settings
//! [`ThemeProvider`]: theme::ThemeProvider

pub mod color;
pub mod settings;
pub mod theme;

mod error;

pub use error::{Error, Result};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::color::Color;
    pub use crate::settings::{EnvSettings, FixedSettings, Settings, SystemSettings};
    pub use crate::theme::{
        ColorSet, FontStyle, ThemeProvider, ThemeVariant, FONT_FAMILY, PADDING, TEXT_SIZE,
    };
}
