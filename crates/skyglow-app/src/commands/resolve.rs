use chrono::Timelike;
use skyglow_common::SkyglowError;

use crate::app::App;
use crate::render;

pub(super) fn resolve(app: &App, json: bool) -> Result<String, SkyglowError> {
    let sky = app.theme.update_sky_colors();
    if json {
        return serde_json::to_string_pretty(&sky)
            .map_err(|e| SkyglowError::Other(format!("failed to serialize sky: {e}")));
    }

    let now = app.theme.now();
    let resolution = app.theme.palette().resolve_detailed(now.hour(), now.minute());
    Ok(render::resolution_text(&resolution))
}

pub(super) fn css(app: &App, js: bool) -> String {
    let sky = app.theme.update_sky_colors();
    if js {
        render::css_script(&sky)
    } else {
        render::css_root(&sky)
    }
}

pub(super) fn palette(app: &App) -> String {
    render::palette_text(&app.theme.palette())
}
