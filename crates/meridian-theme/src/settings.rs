//! The settings collaborator that supplies the active theme name.
//!
//! [`ThemeProvider`](crate::theme::ThemeProvider) only consumes the name
//! returned by [`Settings::theme`]; whether the name comes from an
//! environment variable, the OS appearance preference, or a fixed value is
//! the collaborator's business.

use std::env;

/// Source of the user-configured theme name.
///
/// Returned names are free text; the theme system recognizes "light" and
/// "dark" and resolves everything else to the dark variant.
pub trait Settings: Send + Sync {
    /// The currently configured theme name.
    fn theme(&self) -> String;
}

/// Settings that always report a fixed theme name.
///
/// Useful for tests and for hosts that manage theme selection themselves.
#[derive(Debug, Clone)]
pub struct FixedSettings {
    name: String,
}

impl FixedSettings {
    /// Create settings that always report `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Settings for FixedSettings {
    fn theme(&self) -> String {
        self.name.clone()
    }
}

/// Settings backed by an environment variable.
///
/// Reads `MERIDIAN_THEME` by default. An unset or unreadable variable
/// yields the empty string, which resolves to the dark variant downstream.
#[derive(Debug, Clone)]
pub struct EnvSettings {
    var: String,
}

/// Environment variable consulted by [`EnvSettings::default`].
pub const THEME_ENV_VAR: &str = "MERIDIAN_THEME";

impl EnvSettings {
    /// Create settings backed by the `MERIDIAN_THEME` variable.
    pub fn new() -> Self {
        Self::with_var(THEME_ENV_VAR)
    }

    /// Create settings backed by a custom environment variable.
    pub fn with_var(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvSettings {
    fn default() -> Self {
        Self::new()
    }
}

impl Settings for EnvSettings {
    fn theme(&self) -> String {
        env::var(&self.var).unwrap_or_default()
    }
}

/// Settings backed by the operating system's appearance preference.
///
/// Detection goes through the `dark-light` crate:
/// - **Windows**: the `AppsUseLightTheme` registry key
/// - **macOS**: the `AppleInterfaceStyle` user default
/// - **Linux**: the XDG Desktop Portal `color-scheme` setting
///
/// When the preference cannot be determined, the dark name is reported,
/// matching the theme system's fallback variant.
#[derive(Debug, Clone, Default)]
pub struct SystemSettings;

impl SystemSettings {
    /// Create settings that track the OS appearance.
    pub fn new() -> Self {
        Self
    }
}

impl Settings for SystemSettings {
    fn theme(&self) -> String {
        match dark_light::detect() {
            dark_light::Mode::Light => "light".to_string(),
            dark_light::Mode::Dark => "dark".to_string(),
            dark_light::Mode::Default => "dark".to_string(),
        }
    }
}
