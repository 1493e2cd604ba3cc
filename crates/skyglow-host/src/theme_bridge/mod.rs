//! Theme bridge: CSS generation and sanitization for webview theming.
//!
//! Converts theme values into safe CSS and JavaScript for injection into a
//! page. All values are validated to prevent CSS/JS injection.

mod generate;
mod sanitize;

pub use generate::{
    class_toggle_js, generate_css_injection_js, generate_css_root, remove_property_js,
    set_property_js, wrap_statements, CssValueKind,
};
pub use sanitize::{
    validate_css_class_name, validate_css_color, validate_css_gradient,
    validate_css_property_name,
};
