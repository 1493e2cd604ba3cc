//! Persist a [`SkyglowConfig`] as TOML.
//!
//! Only valid configs are written, so a file produced here always loads
//! back cleanly. The file is replaced in one step through a sibling
//! `.toml.tmp`.

use std::path::Path;

use skyglow_common::ConfigError;

use crate::schema::{SkyglowConfig, CONFIG_SCHEMA_VERSION};
use crate::validation::validate;

/// Validate `config` and render it as a TOML document with a short header.
pub fn render_config(config: &SkyglowConfig) -> Result<String, ConfigError> {
    validate(config)?;
    let body = toml::to_string_pretty(config)
        .map_err(|e| ConfigError::ParseError(format!("cannot serialize config: {e}")))?;
    Ok(format!(
        "# Skyglow configuration (schema v{CONFIG_SCHEMA_VERSION})\n\
         # Written by `skyglow config set`; unknown keys are dropped.\n\n{body}"
    ))
}

/// Save to `path`, creating its directory. An invalid config leaves the
/// existing file untouched.
pub fn save_config_to_path(config: &SkyglowConfig, path: &Path) -> Result<(), ConfigError> {
    let document = render_config(config)?;
    let io_err = |what: &str, p: &Path, e: std::io::Error| {
        ConfigError::ParseError(format!("cannot {what} {}: {e}", p.display()))
    };

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(|e| io_err("create", dir, e))?;
    }

    let staged = path.with_extension("toml.tmp");
    std::fs::write(&staged, &document).map_err(|e| io_err("write", &staged, e))?;
    if let Err(e) = std::fs::rename(&staged, path) {
        tracing::warn!(path = %path.display(), "rename failed, writing in place: {e}");
        let _ = std::fs::remove_file(&staged);
        std::fs::write(path, &document).map_err(|e| io_err("write", path, e))?;
    }

    tracing::info!(
        path = %path.display(),
        mode = %config.theme.default_mode,
        palette = %config.sky.palette,
        "config saved"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toml_loader::load_from_path;
    use skyglow_common::ThemeMode;
    use tempfile::TempDir;

    #[test]
    fn saved_config_loads_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = SkyglowConfig::default();
        config.theme.default_mode = ThemeMode::Dark;
        config.sky.palette = "palettes/winter.yaml".into();
        config.sky.refresh_interval_secs = 120;
        config.system.prefers_dark = Some(false);
        save_config_to_path(&config, &path).unwrap();

        assert_eq!(load_from_path(&path).unwrap(), config);
        assert!(!path.with_extension("toml.tmp").exists());
    }

    #[test]
    fn rendered_document_starts_with_header() {
        let text = render_config(&SkyglowConfig::default()).unwrap();
        assert!(text.starts_with("# Skyglow configuration (schema v1)"));
        assert!(text.contains("[sky]"));
        assert!(text.contains("storage_key = \"theme-mode\""));
    }

    #[test]
    fn invalid_config_is_not_written() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[sky]\nrefresh_interval_secs = 60\n").unwrap();

        let mut config = SkyglowConfig::default();
        config.sky.refresh_interval_secs = 0;
        let err = save_config_to_path(&config, &path).unwrap_err();

        assert!(matches!(err, ConfigError::ValidationError(_)));
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "[sky]\nrefresh_interval_secs = 60\n"
        );
    }

    #[test]
    fn creates_missing_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("skyglow").join("nested").join("config.toml");

        save_config_to_path(&SkyglowConfig::default(), &path).unwrap();
        assert!(path.exists());
    }
}
