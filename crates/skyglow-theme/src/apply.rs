//! Theme application to the document root.

use skyglow_common::ThemeMode;
use skyglow_host::{Document, Host};

/// Root class marking dark styling.
pub const DARK_CLASS: &str = "dark";

/// Custom property carrying the sky's solid background override.
pub const BACKGROUND_PROPERTY: &str = "--background";

/// Mirror `mode` onto the document root.
///
/// - `light` / `dark`: fixed class, background override cleared.
/// - `system`: class follows the color-scheme probe (light without one),
///   background override cleared.
/// - `sky`: class follows `sky_is_dark`; the override is set to
///   `sky_solid_color` when given and left alone otherwise.
///
/// Without a document capability nothing happens.
pub fn apply_theme(host: &Host, mode: ThemeMode, sky_is_dark: bool, sky_solid_color: Option<&str>) {
    let Some(document) = host.document() else {
        return;
    };

    match mode {
        ThemeMode::Light => set_fixed(document, false),
        ThemeMode::Dark => set_fixed(document, true),
        ThemeMode::System => {
            let prefers_dark = host.color_scheme().is_some_and(|probe| probe.prefers_dark());
            set_fixed(document, prefers_dark);
        }
        ThemeMode::Sky => {
            document.toggle_class(DARK_CLASS, sky_is_dark);
            if let Some(color) = sky_solid_color {
                document.set_property(BACKGROUND_PROPERTY, color);
            }
        }
    }

    tracing::debug!(%mode, sky_is_dark, "theme applied");
}

fn set_fixed(document: &dyn Document, dark: bool) {
    document.toggle_class(DARK_CLASS, dark);
    document.remove_property(BACKGROUND_PROPERTY);
}
