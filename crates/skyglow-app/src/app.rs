//! Wiring from config to a live [`SkyTheme`].

use std::path::PathBuf;
use std::sync::Arc;

use chrono::NaiveTime;
use skyglow_config::SkyglowConfig;
use skyglow_host::{
    ColorFgBgProbe, ColorSchemeProbe, FileStore, FixedColorScheme, Host, ScriptDocument,
    TokioScheduler,
};
use skyglow_sky::SkyPalette;
use skyglow_theme::{Clock, FixedClock, LocalClock, SkyTheme};

/// Everything a command needs.
pub struct App {
    pub config: SkyglowConfig,
    /// Config file the palette path is relative to, and the one `watch` follows.
    pub config_path: Option<PathBuf>,
    pub theme: Arc<SkyTheme>,
    /// Collects the document mutations as a script.
    pub document: Arc<ScriptDocument>,
}

impl App {
    /// Build the host and theme.
    ///
    /// `at` pins the clock; `prefs` overrides the preferences file.
    pub fn build(
        config: SkyglowConfig,
        config_path: Option<PathBuf>,
        prefs: Option<PathBuf>,
        at: Option<NaiveTime>,
    ) -> Self {
        let document = Arc::new(ScriptDocument::new());
        let mut host = Host::headless()
            .with_document(document.clone())
            .with_scheduler(Arc::new(TokioScheduler::new()))
            .with_color_scheme(color_scheme_probe(&config));

        let store = match prefs {
            Some(path) => Ok(FileStore::new(path)),
            None => FileStore::at_default_path(),
        };
        match store {
            Ok(store) => {
                tracing::debug!(path = %store.path().display(), "using preferences file");
                host = host.with_storage(Arc::new(store));
            }
            Err(e) => {
                tracing::warn!("preferences unavailable, mode will not persist: {e}");
            }
        }

        let clock: Arc<dyn Clock> = match at {
            Some(time) => Arc::new(FixedClock::new(time)),
            None => Arc::new(LocalClock),
        };

        let palette = load_palette(&config, config_path.as_deref());

        let theme = SkyTheme::new(host)
            .with_palette(palette)
            .with_clock(clock)
            .with_storage_key(config.theme.storage_key.clone())
            .with_default_mode(config.theme.default_mode);
        theme.load_mode();

        Self {
            config,
            config_path,
            theme: Arc::new(theme),
            document,
        }
    }
}

/// The configured palette, or the built-in one if it cannot be loaded.
pub fn load_palette(config: &SkyglowConfig, config_path: Option<&std::path::Path>) -> SkyPalette {
    skyglow_config::palette_for_config(config, config_path).unwrap_or_else(|e| {
        tracing::warn!(
            palette = %config.sky.palette,
            "failed to load palette, using built-in: {e}"
        );
        SkyPalette::builtin()
    })
}

fn color_scheme_probe(config: &SkyglowConfig) -> Arc<dyn ColorSchemeProbe> {
    match config.system.prefers_dark {
        Some(dark) => Arc::new(FixedColorScheme(dark)),
        None => Arc::new(ColorFgBgProbe::new()),
    }
}
