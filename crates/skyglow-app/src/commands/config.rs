use std::path::PathBuf;

use skyglow_common::SkyglowError;
use skyglow_config::{config_to_json, palette_for_config, save_config_to_path, toml_loader};

use crate::app::App;
use crate::cli::ConfigAction;

pub(super) fn show(app: &App) -> String {
    config_to_json(&app.config)
}

/// Apply the requested edits to the loaded config and write it back.
///
/// The palette is loaded first so a bad name never reaches disk.
pub(super) fn set(app: &App, edit: &ConfigAction) -> Result<String, SkyglowError> {
    let ConfigAction::Set {
        default_mode,
        palette,
        refresh_interval,
        prefers_dark,
    } = edit
    else {
        return Ok(show(app));
    };

    if default_mode.is_none()
        && palette.is_none()
        && refresh_interval.is_none()
        && prefers_dark.is_none()
    {
        return Err(SkyglowError::Other(
            "nothing to change; pass at least one setting".into(),
        ));
    }

    let mut config = app.config.clone();
    if let Some(mode) = default_mode {
        config.theme.default_mode = *mode;
    }
    if let Some(palette) = palette {
        config.sky.palette = palette.clone();
    }
    if let Some(secs) = refresh_interval {
        config.sky.refresh_interval_secs = *secs;
    }
    if let Some(dark) = prefers_dark {
        config.system.prefers_dark = Some(*dark);
    }

    let path: PathBuf = match &app.config_path {
        Some(path) => path.clone(),
        None => toml_loader::default_config_path()?,
    };
    palette_for_config(&config, Some(path.as_path()))?;
    save_config_to_path(&config, &path)?;

    Ok(format!("config saved to {}", path.display()))
}
