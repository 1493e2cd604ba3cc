//! CSS value sanitization for anything injected into a page.
//!
//! Only allows:
//! - Hex colors: `#rgb`, `#rrggbb`, `#rrggbbaa`
//! - `linear-gradient(<angle>deg, <hex> <n>%, ...)`
//! - Custom property names `--[a-z0-9-]+` and class names `[A-Za-z0-9_-]+`
//!
//! Rejects anything containing: `expression(`, `url(`, `javascript:`,
//! `@import`, `;`, `}`, `{`, `<`, `>`, quotes or backslashes.

use std::sync::LazyLock;

use regex::Regex;

/// Regex for one gradient stop: `#hex <number>%`.
static GRADIENT_STOP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})(?:\s+-?[0-9]+(?:\.[0-9]+)?%)?$")
        .expect("gradient stop regex is valid")
});

/// Regex for the gradient direction: `180deg`.
static ANGLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?[0-9]+(?:\.[0-9]+)?deg$").expect("angle regex is valid"));

static PROPERTY_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^--[a-z0-9][a-z0-9-]*$").expect("property regex is valid"));

static CLASS_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_-]*$").expect("class regex is valid"));

// =============================================================================
// VALIDATION
// =============================================================================

/// Validate a CSS hex color.
pub fn validate_css_color(value: &str) -> Result<(), String> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err("Empty CSS color value".to_string());
    }

    check_injection_patterns(trimmed)?;

    match trimmed.strip_prefix('#') {
        Some(hex) => validate_hex_digits(hex, trimmed),
        None => Err(format!(
            "Invalid CSS color: only hex (#rrggbb) allowed, got '{trimmed}'"
        )),
    }
}

/// Validate a `linear-gradient(...)` built from hex stops.
pub fn validate_css_gradient(value: &str) -> Result<(), String> {
    let trimmed = value.trim();

    check_injection_patterns(trimmed)?;

    let inner = trimmed
        .strip_prefix("linear-gradient(")
        .and_then(|s| s.strip_suffix(')'))
        .ok_or_else(|| format!("Not a linear-gradient(): '{trimmed}'"))?;

    let mut parts = inner.split(',').map(str::trim).peekable();

    if parts.peek().is_some_and(|p| ANGLE_RE.is_match(p)) {
        parts.next();
    }

    let mut stops = 0;
    for part in parts {
        if !GRADIENT_STOP_RE.is_match(part) {
            return Err(format!("Invalid gradient stop '{part}' in '{trimmed}'"));
        }
        stops += 1;
    }

    if stops == 0 {
        return Err(format!("Gradient has no color stops: '{trimmed}'"));
    }

    Ok(())
}

/// Validate a CSS custom property name (`--background`).
pub fn validate_css_property_name(name: &str) -> Result<(), String> {
    if PROPERTY_NAME_RE.is_match(name) {
        Ok(())
    } else {
        Err(format!("Invalid CSS custom property name: '{name}'"))
    }
}

/// Validate a class name for `classList` operations.
pub fn validate_css_class_name(name: &str) -> Result<(), String> {
    if CLASS_NAME_RE.is_match(name) {
        Ok(())
    } else {
        Err(format!("Invalid CSS class name: '{name}'"))
    }
}

// =============================================================================
// HELPERS
// =============================================================================

/// Check for common CSS injection patterns.
fn check_injection_patterns(value: &str) -> Result<(), String> {
    let lower = value.to_lowercase();

    let dangerous = [
        "expression(",
        "url(",
        "javascript:",
        "eval(",
        "@import",
        "@charset",
        "behavior:",
        "-moz-binding",
    ];

    for pattern in &dangerous {
        if lower.contains(pattern) {
            return Err(format!("CSS injection blocked: contains '{pattern}'"));
        }
    }

    // Block characters that could escape the CSS or JS string context
    for ch in [';', '{', '}', '<', '>', '\'', '"', '\\'] {
        if value.contains(ch) {
            return Err(format!("CSS injection blocked: contains '{ch}'"));
        }
    }

    Ok(())
}

fn validate_hex_digits(hex: &str, value: &str) -> Result<(), String> {
    if !matches!(hex.len(), 3 | 6 | 8) {
        return Err(format!(
            "Invalid hex color length: expected 3/6/8 digits, got {} in '{value}'",
            hex.len()
        ));
    }

    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!("Invalid hex color: non-hex character in '{value}'"));
    }

    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // --- Colors ---

    #[test]
    fn valid_hex_colors() {
        assert!(validate_css_color("#fff").is_ok());
        assert!(validate_css_color("#16213e").is_ok());
        assert!(validate_css_color("#87CEEB").is_ok());
        assert!(validate_css_color("#16213e80").is_ok());
    }

    #[test]
    fn invalid_hex_colors() {
        assert!(validate_css_color("#ff").is_err());
        assert!(validate_css_color("#fffff").is_err());
        assert!(validate_css_color("#gggggg").is_err());
        assert!(validate_css_color("").is_err());
    }

    #[test]
    fn rejects_named_and_functional_colors() {
        assert!(validate_css_color("red").is_err());
        assert!(validate_css_color("rgb(0,0,0)").is_err());
    }

    // --- Gradients ---

    #[test]
    fn valid_sky_gradient() {
        assert!(validate_css_gradient(
            "linear-gradient(180deg, #1a1a2e 0%, #16213e 50%, #0f3460 100%)"
        )
        .is_ok());
        assert!(validate_css_gradient(
            "linear-gradient(180deg, #2d2d5a 0%, #6b4984 33.33333333333333%, \
             #c76b6b 66.66666666666666%, #f0a070 100%)"
        )
        .is_ok());
    }

    #[test]
    fn gradient_without_angle_or_positions() {
        assert!(validate_css_gradient("linear-gradient(#000000, #ffffff)").is_ok());
    }

    #[test]
    fn invalid_gradients() {
        assert!(validate_css_gradient("radial-gradient(#000 0%)").is_err());
        assert!(validate_css_gradient("linear-gradient(180deg)").is_err());
        assert!(validate_css_gradient("linear-gradient(180deg, red 0%)").is_err());
        assert!(validate_css_gradient("linear-gradient(180deg, #000 0%").is_err());
    }

    // --- Injection attempts ---

    #[test]
    fn rejects_injection() {
        assert!(validate_css_color("#fff; background: url(evil)").is_err());
        assert!(validate_css_color("expression(alert(1))").is_err());
        assert!(validate_css_gradient(
            "linear-gradient(180deg, #000 0%, url(https://evil.com) 100%)"
        )
        .is_err());
        assert!(validate_css_gradient("linear-gradient(180deg, #000 0%)'; alert(1); '").is_err());
    }

    // --- Names ---

    #[test]
    fn property_names() {
        assert!(validate_css_property_name("--background").is_ok());
        assert!(validate_css_property_name("--sky-gradient").is_ok());
        assert!(validate_css_property_name("background").is_err());
        assert!(validate_css_property_name("--bg'); alert(1); ('").is_err());
    }

    #[test]
    fn class_names() {
        assert!(validate_css_class_name("dark").is_ok());
        assert!(validate_css_class_name("dark-mode").is_ok());
        assert!(validate_css_class_name("").is_err());
        assert!(validate_css_class_name("a b").is_err());
        assert!(validate_css_class_name("x')").is_err());
    }
}
