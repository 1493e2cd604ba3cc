//! Palette file resolution and loading.

use crate::schema::{SkyglowConfig, DEFAULT_PALETTE};
use crate::toml_loader::config_dir;
use serde::{Deserialize, Serialize};
use skyglow_common::ConfigError;
use skyglow_sky::{Keyframe, SkyPalette};
use std::path::{Path, PathBuf};
use tracing::info;

/// On-disk palette document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaletteFile {
    #[serde(default)]
    pub name: Option<String>,
    pub keyframes: Vec<Keyframe>,
}

fn looks_like_path(name: &str) -> bool {
    name.contains('/')
        || name.contains('\\')
        || name.ends_with(".yaml")
        || name.ends_with(".yml")
}

/// Resolve the filesystem path for a palette.
///
/// Names that look like paths are used directly; relative ones are taken
/// against `base_dir` (usually the config file's directory) when given.
/// Bare names are looked up as `<config dir>/skyglow/palettes/<name>.yaml`.
pub fn resolve_palette_path(name: &str, base_dir: Option<&Path>) -> Result<PathBuf, ConfigError> {
    let path = if looks_like_path(name) {
        let path = PathBuf::from(name);
        match base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path,
        }
    } else {
        config_dir()?.join("palettes").join(format!("{name}.yaml"))
    };

    if path.exists() {
        Ok(path)
    } else {
        Err(ConfigError::FileNotFound(path))
    }
}

/// Load a palette by name. `"default"` is the built-in table.
pub fn load_palette(name: &str, base_dir: Option<&Path>) -> Result<SkyPalette, ConfigError> {
    if name == DEFAULT_PALETTE {
        return Ok(SkyPalette::builtin());
    }

    let path = resolve_palette_path(name, base_dir)?;
    load_palette_from_path(&path)
}

/// Load and validate a palette from a specific YAML file.
pub fn load_palette_from_path(path: &Path) -> Result<SkyPalette, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }
        Err(e) => {
            return Err(ConfigError::ParseError(format!(
                "failed to read palette file {}: {e}",
                path.display()
            )));
        }
    };

    let file: PaletteFile = serde_yaml::from_str(&content).map_err(|e| {
        ConfigError::ParseError(format!(
            "failed to parse palette YAML {}: {e}",
            path.display()
        ))
    })?;

    let palette = SkyPalette::new(file.keyframes).map_err(|errors| {
        ConfigError::ValidationError(format!("{}: {}", path.display(), errors.join("; ")))
    })?;

    info!(
        name = file.name.as_deref().unwrap_or("unnamed"),
        keyframes = palette.keyframes().len(),
        "loaded palette from {}",
        path.display()
    );
    Ok(palette)
}

/// The palette a config selects, with relative paths taken against the
/// directory of `config_path`.
pub fn palette_for_config(
    config: &SkyglowConfig,
    config_path: Option<&Path>,
) -> Result<SkyPalette, ConfigError> {
    let base_dir = config_path.and_then(Path::parent);
    load_palette(&config.sky.palette, base_dir)
}
