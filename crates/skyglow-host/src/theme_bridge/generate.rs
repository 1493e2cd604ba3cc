//! CSS and JavaScript generation from theme values.
//!
//! Takes validated (name, value) pairs and generates CSS `:root` blocks and
//! JavaScript snippets that mutate `document.documentElement` in a webview.

use super::sanitize::{
    validate_css_class_name, validate_css_color, validate_css_gradient,
    validate_css_property_name,
};

// =============================================================================
// CSS VARIABLE TYPES
// =============================================================================

/// The type of validation to apply to a CSS value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CssValueKind {
    /// Hex color.
    Color,
    /// `linear-gradient(...)` of hex stops.
    Gradient,
}

impl CssValueKind {
    /// Infer the kind from the value's shape.
    pub fn of(value: &str) -> Self {
        if value.trim_start().starts_with("linear-gradient(") {
            CssValueKind::Gradient
        } else {
            CssValueKind::Color
        }
    }
}

fn validate_variable(name: &str, value: &str, kind: CssValueKind) -> Result<(), String> {
    validate_css_property_name(name)?;
    match kind {
        CssValueKind::Color => validate_css_color(value),
        CssValueKind::Gradient => validate_css_gradient(value),
    }
}

// =============================================================================
// CSS GENERATION
// =============================================================================

/// Generate a CSS `:root { ... }` block from `(name, value, kind)` entries.
///
/// Invalid entries are skipped with a warning log.
pub fn generate_css_root(variables: &[(&str, &str, CssValueKind)]) -> String {
    let mut css = String::from(":root {\n");

    for (name, value, kind) in variables {
        match validate_variable(name, value, *kind) {
            Ok(()) => {
                css.push_str(&format!("  {name}: {value};\n"));
            }
            Err(e) => {
                tracing::warn!(
                    name,
                    value,
                    error = %e,
                    "Theme variable rejected by sanitizer"
                );
            }
        }
    }

    css.push('}');
    css
}

/// Generate a JavaScript snippet that sets CSS variables on the root element.
pub fn generate_css_injection_js(variables: &[(&str, &str, CssValueKind)]) -> String {
    let statements: Vec<String> = variables
        .iter()
        .filter_map(|(name, value, kind)| set_property_js(name, value, *kind))
        .collect();
    wrap_statements(&statements)
}

// =============================================================================
// STATEMENTS
// =============================================================================

/// `root.style.setProperty(name, value)`, or `None` if either part is unsafe.
pub fn set_property_js(name: &str, value: &str, kind: CssValueKind) -> Option<String> {
    match validate_variable(name, value, kind) {
        Ok(()) => Some(format!("root.style.setProperty('{name}', '{}');", value.trim())),
        Err(e) => {
            tracing::warn!(name, value, error = %e, "Property rejected by sanitizer");
            None
        }
    }
}

/// `root.style.removeProperty(name)`, or `None` for an unsafe name.
pub fn remove_property_js(name: &str) -> Option<String> {
    match validate_css_property_name(name) {
        Ok(()) => Some(format!("root.style.removeProperty('{name}');")),
        Err(e) => {
            tracing::warn!(name, error = %e, "Property name rejected by sanitizer");
            None
        }
    }
}

/// `root.classList.add/remove(class)`, or `None` for an unsafe class name.
pub fn class_toggle_js(class: &str, present: bool) -> Option<String> {
    match validate_css_class_name(class) {
        Ok(()) => {
            let op = if present { "add" } else { "remove" };
            Some(format!("root.classList.{op}('{class}');"))
        }
        Err(e) => {
            tracing::warn!(class, error = %e, "Class name rejected by sanitizer");
            None
        }
    }
}

/// Wrap statements in an IIFE binding `root` to `document.documentElement`.
pub fn wrap_statements(statements: &[String]) -> String {
    let mut js = String::from("(function() {\n  var root = document.documentElement;\n");
    for statement in statements {
        js.push_str("  ");
        js.push_str(statement);
        js.push('\n');
    }
    js.push_str("})();");
    js
}

// =============================================================================
// TESTS
// =============================================================================
