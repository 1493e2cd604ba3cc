//! OS color-scheme preference.

/// Reports whether the environment prefers a dark color scheme.
pub trait ColorSchemeProbe: Send + Sync {
    fn prefers_dark(&self) -> bool;
}

/// A fixed answer, for configuration overrides and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedColorScheme(pub bool);

impl ColorSchemeProbe for FixedColorScheme {
    fn prefers_dark(&self) -> bool {
        self.0
    }
}

/// Reads the terminal's `COLORFGBG` variable (`"15;0"`, `"0;default;15"`).
///
/// Falls back to light when the variable is unset or unreadable.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorFgBgProbe;

impl ColorFgBgProbe {
    pub fn new() -> Self {
        Self
    }
}

impl ColorSchemeProbe for ColorFgBgProbe {
    fn prefers_dark(&self) -> bool {
        std::env::var("COLORFGBG")
            .ok()
            .and_then(|value| parse_colorfgbg(&value))
            .unwrap_or(false)
    }
}

/// Dark when the background (last field) is one of the dark ANSI colors:
/// 0 through 6, or 8.
pub fn parse_colorfgbg(value: &str) -> Option<bool> {
    let background: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    Some(matches!(background, 0..=6 | 8))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_probe() {
        assert!(FixedColorScheme(true).prefers_dark());
        assert!(!FixedColorScheme(false).prefers_dark());
    }

    #[test]
    fn colorfgbg_dark_backgrounds() {
        assert_eq!(parse_colorfgbg("15;0"), Some(true));
        assert_eq!(parse_colorfgbg("7;default;8"), Some(true));
        assert_eq!(parse_colorfgbg("15;4"), Some(true));
    }

    #[test]
    fn colorfgbg_light_backgrounds() {
        assert_eq!(parse_colorfgbg("0;15"), Some(false));
        assert_eq!(parse_colorfgbg("0;7"), Some(false));
    }

    #[test]
    fn colorfgbg_unreadable() {
        assert_eq!(parse_colorfgbg(""), None);
        assert_eq!(parse_colorfgbg("15;default"), None);
    }
}
