//! Theme-dependent value lookup with a single-slot color cache.

use std::path::{Path, PathBuf};

use parking_lot::RwLock;

use crate::color::Color;
use crate::settings::Settings;

use super::{ColorSet, FontStyle, ThemeVariant, PADDING, TEXT_SIZE};

/// Cached color selection, tagged with the theme name that produced it.
#[derive(Debug, Clone)]
struct CachedColors {
    name: String,
    colors: ColorSet,
}

/// Serves theme-dependent values to the toolkit's rendering layer.
///
/// A provider owns its [`Settings`] collaborator and its font asset root,
/// both injected at construction. Each color read observes the current
/// theme name and refills the internal cache when the name has changed
/// since the last read, so callers always see the set matching the current
/// settings. The cache is an optimization only; selection is a pure
/// function of the observed name, so concurrent refills can at worst do
/// redundant work.
///
/// # Example
///
/// ```
/// use meridian_theme::prelude::*;
///
/// let provider = ThemeProvider::new(FixedSettings::new("light"), "assets/font");
/// assert_eq!(provider.background_color(), Color::new(255, 255, 255, 255));
/// ```
pub struct ThemeProvider {
    settings: Box<dyn Settings>,
    font_dir: PathBuf,
    cache: RwLock<Option<CachedColors>>,
}

impl ThemeProvider {
    /// Create a provider with the given settings collaborator and font
    /// asset directory.
    ///
    /// The directory is expected to contain the four
    /// `NotoSans-<style>.ttf` files; it is never checked here, and a
    /// missing file surfaces as the font loader's error.
    pub fn new(settings: impl Settings + 'static, font_dir: impl Into<PathBuf>) -> Self {
        Self {
            settings: Box::new(settings),
            font_dir: font_dir.into(),
            cache: RwLock::new(None),
        }
    }

    /// The colors for the currently configured theme.
    ///
    /// Reads the settings collaborator's theme name and refills the cache
    /// if the name differs from the one that produced the cached set.
    /// Total over all names: "light" and "dark" select their variants and
    /// everything else selects dark.
    pub fn current_colors(&self) -> ColorSet {
        let name = self.settings.theme();

        if let Some(cached) = self.cache.read().as_ref() {
            if cached.name == name {
                return cached.colors;
            }
        }

        self.refill(name)
    }

    /// The theme variant the current settings resolve to.
    pub fn variant(&self) -> ThemeVariant {
        ThemeVariant::from_name(&self.settings.theme())
    }

    fn refill(&self, name: String) -> ColorSet {
        let variant = match ThemeVariant::recognize(&name) {
            Some(variant) => variant,
            None => {
                tracing::warn!("Unrecognized theme name '{}', falling back to dark", name);
                ThemeVariant::Dark
            }
        };
        let colors = variant.colors();

        tracing::debug!("Theme colors reloaded for '{}' ({})", name, variant);

        let mut cache = self.cache.write();
        *cache = Some(CachedColors { name, colors });
        colors
    }

    /// The theme's background color.
    pub fn background_color(&self) -> Color {
        self.current_colors().background
    }

    /// The theme's standard button color.
    pub fn button_color(&self) -> Color {
        self.current_colors().button
    }

    /// The theme's standard text color.
    pub fn text_color(&self) -> Color {
        self.current_colors().text
    }

    /// The color used to highlight primary features.
    pub fn primary_color(&self) -> Color {
        self.current_colors().primary
    }

    /// The color used to highlight a focused widget.
    ///
    /// Aliases [`primary_color`](Self::primary_color) in both built-in
    /// themes.
    pub fn focus_color(&self) -> Color {
        self.current_colors().primary
    }

    /// The standard text size in logical pixels.
    pub fn text_size(&self) -> u32 {
        TEXT_SIZE
    }

    /// The standard gap between elements and around interface borders.
    pub fn padding(&self) -> u32 {
        PADDING
    }

    /// The font asset directory this provider was constructed with.
    pub fn font_dir(&self) -> &Path {
        &self.font_dir
    }

    /// Path of the font file for the given style.
    ///
    /// A pure join against the injected asset root; the file's existence
    /// is not checked.
    pub fn font_path(&self, style: FontStyle) -> PathBuf {
        self.font_dir.join(style.file_name())
    }

    /// Font path for the regular style.
    pub fn text_font(&self) -> PathBuf {
        self.font_path(FontStyle::Regular)
    }

    /// Font path for the bold style.
    pub fn text_bold_font(&self) -> PathBuf {
        self.font_path(FontStyle::Bold)
    }

    /// Font path for the italic style.
    pub fn text_italic_font(&self) -> PathBuf {
        self.font_path(FontStyle::Italic)
    }

    /// Font path for the bold italic style.
    pub fn text_bold_italic_font(&self) -> PathBuf {
        self.font_path(FontStyle::BoldItalic)
    }
}

impl std::fmt::Debug for ThemeProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeProvider")
            .field("font_dir", &self.font_dir)
            .field("cache", &*self.cache.read())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;
    use crate::settings::FixedSettings;

    /// Settings whose reported name can be swapped mid-test.
    struct SwappableSettings {
        name: RwLock<String>,
    }

    impl SwappableSettings {
        fn new(name: &str) -> Arc<Self> {
            Arc::new(Self {
                name: RwLock::new(name.to_string()),
            })
        }

        fn set(&self, name: &str) {
            *self.name.write() = name.to_string();
        }
    }

    impl Settings for Arc<SwappableSettings> {
        fn theme(&self) -> String {
            self.name.read().clone()
        }
    }

    #[test]
    fn colors_match_the_observed_name() {
        let provider = ThemeProvider::new(FixedSettings::new("light"), "font");
        assert_eq!(provider.current_colors(), ColorSet::light());

        let provider = ThemeProvider::new(FixedSettings::new("dark"), "font");
        assert_eq!(provider.current_colors(), ColorSet::dark());
    }

    #[test]
    fn unrecognized_names_yield_dark() {
        for name in ["", "solarized", "LIGHT", "light "] {
            let provider = ThemeProvider::new(FixedSettings::new(name), "font");
            assert_eq!(provider.current_colors(), ColorSet::dark());
        }
    }

    #[test]
    fn repeated_reads_are_idempotent() {
        let provider = ThemeProvider::new(FixedSettings::new("light"), "font");
        let first = provider.current_colors();
        for _ in 0..3 {
            assert_eq!(provider.current_colors(), first);
        }
        let cached_name = provider.cache.read().as_ref().unwrap().name.clone();
        assert_eq!(cached_name, "light");
    }

    #[test]
    fn cache_refills_when_the_name_changes() {
        let settings = SwappableSettings::new("light");
        let provider = ThemeProvider::new(Arc::clone(&settings), "font");

        assert_eq!(provider.current_colors(), ColorSet::light());
        settings.set("dark");
        assert_eq!(provider.current_colors(), ColorSet::dark());
        settings.set("light");
        assert_eq!(provider.current_colors(), ColorSet::light());
    }

    /// Counts tracing events on the current thread. The refill path emits
    /// exactly one event per recognized name, so the count is the number of
    /// refills.
    struct EventCounter(Arc<AtomicUsize>);

    impl tracing::Subscriber for EventCounter {
        fn enabled(&self, _: &tracing::Metadata<'_>) -> bool {
            true
        }

        fn new_span(&self, _: &tracing::span::Attributes<'_>) -> tracing::span::Id {
            tracing::span::Id::from_u64(1)
        }

        fn record(&self, _: &tracing::span::Id, _: &tracing::span::Record<'_>) {}

        fn record_follows_from(&self, _: &tracing::span::Id, _: &tracing::span::Id) {}

        fn event(&self, _: &tracing::Event<'_>) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }

        fn enter(&self, _: &tracing::span::Id) {}

        fn exit(&self, _: &tracing::span::Id) {}
    }

    #[test]
    fn unchanged_name_does_not_refill_the_cache() {
        let refills = Arc::new(AtomicUsize::new(0));
        let counter = EventCounter(Arc::clone(&refills));

        tracing::subscriber::with_default(counter, || {
            let provider = ThemeProvider::new(FixedSettings::new("dark"), "font");

            provider.current_colors();
            assert_eq!(refills.load(Ordering::SeqCst), 1);

            provider.current_colors();
            provider.current_colors();
            assert_eq!(refills.load(Ordering::SeqCst), 1);

            let cached_name = provider.cache.read().as_ref().unwrap().name.clone();
            assert_eq!(cached_name, "dark");
        });
    }

    #[test]
    fn focus_color_aliases_primary() {
        for name in ["light", "dark"] {
            let provider = ThemeProvider::new(FixedSettings::new(name), "font");
            assert_eq!(provider.focus_color(), provider.primary_color());
        }
    }

    #[test]
    fn font_paths_join_the_injected_root() {
        let provider = ThemeProvider::new(FixedSettings::new("dark"), "/opt/meridian/font");
        assert_eq!(
            provider.font_path(FontStyle::Bold),
            PathBuf::from("/opt/meridian/font/NotoSans-Bold.ttf")
        );
        assert_eq!(
            provider.text_italic_font(),
            PathBuf::from("/opt/meridian/font/NotoSans-Italic.ttf")
        );
    }

    #[test]
    fn provider_is_shareable_across_threads() {
        let settings = SwappableSettings::new("light");
        let provider = Arc::new(ThemeProvider::new(Arc::clone(&settings), "font"));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let provider = Arc::clone(&provider);
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        let colors = provider.current_colors();
                        assert!(
                            colors == ColorSet::light() || colors == ColorSet::dark(),
                            "torn color set observed"
                        );
                    }
                })
            })
            .collect();

        settings.set("dark");
        settings.set("light");

        for handle in handles {
            handle.join().unwrap();
        }
    }
}
