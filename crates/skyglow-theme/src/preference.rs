//! Theme mode persistence.

use skyglow_common::ThemeMode;
use skyglow_host::Host;

/// Key the preference is stored under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "theme-mode";

/// Read the stored mode, or `default` when storage is unavailable, empty, or
/// holds anything other than one of the four lowercase mode names.
pub fn load_theme_mode(host: &Host, key: &str, default: ThemeMode) -> ThemeMode {
    let Some(storage) = host.storage() else {
        return default;
    };

    match storage.get(key) {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::debug!(key, value = %raw, "ignoring unrecognised stored theme mode");
            default
        }),
        None => default,
    }
}

/// Persist `mode` as its lowercase name. Failures are logged, not returned.
pub fn save_theme_mode(host: &Host, key: &str, mode: ThemeMode) {
    let Some(storage) = host.storage() else {
        return;
    };

    if let Err(e) = storage.set(key, mode.as_str()) {
        tracing::warn!(key, %mode, error = %e, "failed to persist theme mode");
    }
}
