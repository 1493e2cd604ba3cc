//! Shared theme state: the mode preference and the current sky colors.

use std::sync::{Arc, RwLock};

use chrono::NaiveTime;
use skyglow_common::{Store, ThemeMode};
use skyglow_host::Host;
use skyglow_sky::{ResolvedTheme, SkyPalette};

use crate::apply::apply_theme;
use crate::clock::{format_hm, Clock, LocalClock};
use crate::preference::{load_theme_mode, save_theme_mode, DEFAULT_STORAGE_KEY};

/// Theme mode and sky colors, observable through [`Store`]s.
///
/// `sky_colors` starts at the night placeholder and only changes when
/// [`SkyTheme::update_sky_colors`] (or the refresher) runs.
pub struct SkyTheme {
    host: Host,
    palette: RwLock<Arc<SkyPalette>>,
    clock: Arc<dyn Clock>,
    theme_mode: Store<ThemeMode>,
    sky_colors: Store<ResolvedTheme>,
    storage_key: String,
    default_mode: ThemeMode,
}

impl SkyTheme {
    pub fn new(host: Host) -> Self {
        Self {
            host,
            palette: RwLock::new(Arc::new(SkyPalette::builtin())),
            clock: Arc::new(LocalClock),
            theme_mode: Store::new(ThemeMode::default()),
            sky_colors: Store::new(ResolvedTheme::default()),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            default_mode: ThemeMode::default(),
        }
    }

    pub fn with_palette(self, palette: SkyPalette) -> Self {
        Self {
            palette: RwLock::new(Arc::new(palette)),
            ..self
        }
    }

    pub fn with_clock(self, clock: Arc<dyn Clock>) -> Self {
        Self { clock, ..self }
    }

    pub fn with_storage_key(self, key: impl Into<String>) -> Self {
        Self {
            storage_key: key.into(),
            ..self
        }
    }

    /// Mode used when nothing valid is stored. Also resets the current mode.
    pub fn with_default_mode(self, mode: ThemeMode) -> Self {
        self.theme_mode.set(mode);
        Self {
            default_mode: mode,
            ..self
        }
    }

    pub fn host(&self) -> &Host {
        &self.host
    }

    pub fn theme_mode(&self) -> &Store<ThemeMode> {
        &self.theme_mode
    }

    pub fn sky_colors(&self) -> &Store<ResolvedTheme> {
        &self.sky_colors
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    pub fn palette(&self) -> Arc<SkyPalette> {
        match self.palette.read() {
            Ok(palette) => palette.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Swap the keyframe table and recompute the sky right away.
    pub fn set_palette(&self, palette: SkyPalette) {
        if let Ok(mut current) = self.palette.write() {
            *current = Arc::new(palette);
        }
        tracing::info!("sky palette replaced");
        self.refresh();
    }

    // =========================================================================
    // SKY
    // =========================================================================

    /// The clock's current time of day.
    pub fn now(&self) -> NaiveTime {
        self.clock.now()
    }

    /// Resolve the sky for the clock's current time without publishing it.
    pub fn resolve_now(&self) -> ResolvedTheme {
        self.palette().resolve(&self.clock.now())
    }

    /// Resolve the sky for now and publish it on [`SkyTheme::sky_colors`].
    pub fn update_sky_colors(&self) -> ResolvedTheme {
        let now = self.clock.now();
        let sky = self.palette().resolve(&now);
        tracing::debug!(
            time = %format_hm(&now),
            solid = %sky.solid_color,
            is_dark = sky.is_dark,
            "sky colors updated"
        );
        self.sky_colors.set(sky.clone());
        sky
    }

    /// Periodic step: update the sky, and re-apply when following it.
    pub fn refresh(&self) {
        let sky = self.update_sky_colors();
        if self.theme_mode.get() == ThemeMode::Sky {
            apply_theme(&self.host, ThemeMode::Sky, sky.is_dark, Some(&sky.solid_color));
        }
    }

    // =========================================================================
    // MODE
    // =========================================================================

    /// Read the persisted mode into [`SkyTheme::theme_mode`].
    pub fn load_mode(&self) -> ThemeMode {
        let mode = load_theme_mode(&self.host, &self.storage_key, self.default_mode);
        self.theme_mode.set(mode);
        mode
    }

    /// Persist the current mode.
    pub fn save_mode(&self) {
        save_theme_mode(&self.host, &self.storage_key, self.theme_mode.get());
    }

    /// Switch mode: publish, persist, and apply.
    pub fn set_mode(&self, mode: ThemeMode) {
        tracing::info!(%mode, "theme mode changed");
        self.theme_mode.set(mode);
        save_theme_mode(&self.host, &self.storage_key, mode);
        self.apply();
    }

    /// Apply the current mode with the last published sky colors.
    pub fn apply(&self) {
        let sky = self.sky_colors.get();
        apply_theme(
            &self.host,
            self.theme_mode.get(),
            sky.is_dark,
            Some(&sky.solid_color),
        );
    }
}

impl std::fmt::Debug for SkyTheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SkyTheme")
            .field("host", &self.host)
            .field("theme_mode", &self.theme_mode.get())
            .field("storage_key", &self.storage_key)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apply::{BACKGROUND_PROPERTY, DARK_CLASS};
    use crate::clock::FixedClock;
    use skyglow_host::{KeyValueStore, MemoryDocument, MemoryStore};
    use skyglow_sky::Keyframe;

    struct Fixture {
        theme: SkyTheme,
        clock: Arc<FixedClock>,
        store: Arc<MemoryStore>,
        doc: Arc<MemoryDocument>,
    }

    fn fixture(hour: u32, minute: u32) -> Fixture {
        let clock = Arc::new(FixedClock::at(hour, minute));
        let store = Arc::new(MemoryStore::new());
        let doc = Arc::new(MemoryDocument::new());
        let host = Host::headless()
            .with_storage(store.clone())
            .with_document(doc.clone());
        let theme = SkyTheme::new(host).with_clock(clock.clone());
        Fixture {
            theme,
            clock,
            store,
            doc,
        }
    }

    #[test]
    fn starts_with_placeholder_and_sky_mode() {
        let f = fixture(12, 0);
        assert_eq!(f.theme.sky_colors().get(), ResolvedTheme::default());
        assert_eq!(f.theme.theme_mode().get(), ThemeMode::Sky);
    }

    #[test]
    fn update_publishes_resolved_sky() {
        let f = fixture(6, 0);
        let mut rx = f.theme.sky_colors().subscribe();

        let sky = f.theme.update_sky_colors();

        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), sky);
        assert_eq!(sky.solid_color, "#c76b6b");
        assert!(sky.is_dark);
    }

    #[test]
    fn resolve_now_does_not_publish() {
        let f = fixture(12, 0);
        let sky = f.theme.resolve_now();
        assert!(!sky.is_dark);
        assert_eq!(f.theme.sky_colors().get(), ResolvedTheme::default());
    }

    #[test]
    fn refresh_applies_only_in_sky_mode() {
        let f = fixture(12, 0);
        f.theme.refresh();
        assert_eq!(
            f.doc.property(BACKGROUND_PROPERTY).as_deref(),
            Some(f.theme.sky_colors().get().solid_color.as_str())
        );

        f.theme.set_mode(ThemeMode::Dark);
        assert_eq!(f.doc.property(BACKGROUND_PROPERTY), None);

        f.clock.set_hm(13, 0);
        f.theme.refresh();
        assert!(f.doc.has_class(DARK_CLASS));
        assert_eq!(f.doc.property(BACKGROUND_PROPERTY), None);
    }

    #[test]
    fn set_mode_persists_and_applies() {
        let f = fixture(0, 0);
        f.theme.set_mode(ThemeMode::Light);

        assert_eq!(f.theme.theme_mode().get(), ThemeMode::Light);
        assert_eq!(f.store.get("theme-mode").as_deref(), Some("light"));
        assert!(!f.doc.has_class(DARK_CLASS));
    }

    #[test]
    fn load_mode_reads_storage() {
        let f = fixture(0, 0);
        f.store.set("theme-mode", "dark").unwrap();
        assert_eq!(f.theme.load_mode(), ThemeMode::Dark);
        assert_eq!(f.theme.theme_mode().get(), ThemeMode::Dark);

        f.store.set("theme-mode", "bogus").unwrap();
        assert_eq!(f.theme.load_mode(), ThemeMode::Sky);
    }

    #[test]
    fn configured_default_and_key() {
        let store = Arc::new(MemoryStore::new());
        let theme = SkyTheme::new(Host::headless().with_storage(store.clone()))
            .with_storage_key("ui-theme")
            .with_default_mode(ThemeMode::System);

        assert_eq!(theme.theme_mode().get(), ThemeMode::System);
        assert_eq!(theme.load_mode(), ThemeMode::System);

        theme.set_mode(ThemeMode::Dark);
        assert_eq!(store.get("ui-theme").as_deref(), Some("dark"));
    }

    #[test]
    fn set_palette_recomputes() {
        let f = fixture(12, 0);
        let palette = SkyPalette::new(vec![
            Keyframe::new(0, &["#000000"], true),
            Keyframe::new(12, &["#ffffff"], false),
        ])
        .unwrap();

        f.theme.set_palette(palette);

        let sky = f.theme.sky_colors().get();
        assert_eq!(sky.solid_color, "#ffffff");
        assert_eq!(f.theme.palette().keyframes().len(), 2);
    }

    #[test]
    fn headless_theme_still_resolves() {
        let theme =
            SkyTheme::new(Host::headless()).with_clock(Arc::new(FixedClock::at(6, 0)));
        theme.set_mode(ThemeMode::Dark);
        theme.refresh();
        assert_eq!(theme.sky_colors().get().solid_color, "#c76b6b");
        assert_eq!(theme.load_mode(), ThemeMode::Sky);
    }
}
