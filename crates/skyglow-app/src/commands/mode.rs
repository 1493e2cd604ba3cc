use skyglow_common::ThemeMode;
use skyglow_host::Document;

use crate::app::App;
use crate::render::GRADIENT_PROPERTY;

pub(super) fn show(app: &App) -> String {
    app.theme.theme_mode().get().to_string()
}

pub(super) fn set(app: &App, mode: ThemeMode) -> String {
    app.theme.set_mode(mode);
    format!("theme mode set to {mode}")
}

/// Script applying `mode` (or the stored one) with the current sky.
///
/// The preference itself is left unchanged.
pub(super) fn apply(app: &App, mode: Option<ThemeMode>) -> String {
    let mode = mode.unwrap_or_else(|| app.theme.theme_mode().get());
    let sky = app.theme.update_sky_colors();

    app.theme.theme_mode().set(mode);
    app.theme.apply();

    let document = app.document.as_ref();
    if mode == ThemeMode::Sky {
        document.set_property(GRADIENT_PROPERTY, &sky.background);
    } else {
        document.remove_property(GRADIENT_PROPERTY);
    }
    document.take_script()
}
