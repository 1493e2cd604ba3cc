//! Text and CSS renderings of sky state.

use skyglow_host::theme_bridge::{generate_css_injection_js, generate_css_root, CssValueKind};
use skyglow_sky::{Resolution, ResolvedTheme, SkyPalette};
use skyglow_theme::BACKGROUND_PROPERTY;

/// Custom property carrying the full sky gradient.
pub const GRADIENT_PROPERTY: &str = "--sky-gradient";

/// `(name, value, kind)` entries describing a resolved sky.
pub fn css_variables(sky: &ResolvedTheme) -> Vec<(&'static str, &str, CssValueKind)> {
    vec![
        (BACKGROUND_PROPERTY, sky.solid_color.as_str(), CssValueKind::Color),
        (GRADIENT_PROPERTY, sky.background.as_str(), CssValueKind::Gradient),
    ]
}

/// A `:root { ... }` block for a resolved sky.
pub fn css_root(sky: &ResolvedTheme) -> String {
    generate_css_root(&css_variables(sky))
}

/// A script setting the sky variables on `document.documentElement`.
pub fn css_script(sky: &ResolvedTheme) -> String {
    generate_css_injection_js(&css_variables(sky))
}

/// Hour on the continuous timeline, folded back into a day, as `HH:00`.
fn format_hour(hour: f64) -> String {
    format!("{:02}:00", hour.rem_euclid(24.0) as u32)
}

fn format_time(current_time: f64) -> String {
    let minutes = (current_time * 60.0).round() as u32;
    format!("{:02}:{:02}", (minutes / 60) % 24, minutes % 60)
}

fn scheme(is_dark: bool) -> &'static str {
    if is_dark {
        "dark"
    } else {
        "light"
    }
}

/// Human-readable resolution details.
pub fn resolution_text(resolution: &Resolution) -> String {
    let sky = &resolution.theme;
    format!(
        "time        {}\n\
         between     {} -> {} (factor {:.2})\n\
         stops       {}\n\
         background  {}\n\
         solid       {}\n\
         scheme      {}",
        format_time(resolution.current_time),
        format_hour(resolution.prev_hour),
        format_hour(resolution.next_hour),
        resolution.factor,
        resolution.stops.join(" "),
        sky.background,
        sky.solid_color,
        scheme(sky.is_dark),
    )
}

/// One line per keyframe.
pub fn palette_text(palette: &SkyPalette) -> String {
    palette
        .keyframes()
        .iter()
        .map(|kf| {
            format!(
                "{:02}:00  {:<5}  {}",
                kf.hour,
                scheme(kf.is_dark),
                kf.colors.join(" ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Single status line for `watch`.
pub fn update_line(time: &str, sky: &ResolvedTheme) -> String {
    format!("{time}  {}  {}", sky.solid_color, scheme(sky.is_dark))
}
