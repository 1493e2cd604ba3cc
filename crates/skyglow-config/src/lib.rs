//! Skyglow configuration system.
//!
//! TOML configuration with YAML sky palettes, live reload, and validation.
//! All config sections use defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use skyglow_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod palette;
pub mod reload;
pub mod schema;
pub mod toml_loader;
pub mod toml_writer;
pub mod validation;
pub mod watcher;

pub use palette::{load_palette, load_palette_from_path, palette_for_config};
pub use reload::ReloadManager;
pub use schema::{SkyglowConfig, CONFIG_SCHEMA_VERSION};
pub use toml_writer::{render_config, save_config_to_path};
pub use watcher::ConfigWatcher;

use skyglow_common::ConfigError;
use std::path::Path;

/// Load config from the platform default path and validate it.
///
/// Creates a commented default file if none exists.
pub fn load_config() -> Result<SkyglowConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load config from `path`, falling back to the platform default when `None`.
///
/// An explicit path that does not exist is an error; the default path is
/// created on first use.
pub fn load_config_from(path: Option<&Path>) -> Result<SkyglowConfig, ConfigError> {
    match path {
        Some(path) => {
            let config = toml_loader::load_from_path(path)?;
            validation::validate(&config)?;
            Ok(config)
        }
        None => load_config(),
    }
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &SkyglowConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
