//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Skyglow Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[theme]
# default_mode = "sky"        # light, dark, system, sky
# storage_key = "theme-mode"

[sky]
# palette = "default"         # "default", a name under palettes/, or a path to a YAML file
# refresh_interval_secs = 30  # 1-3600

[system]
# prefers_dark = true         # override OS color-scheme detection

[logging]
# level = "info"              # trace, debug, info, warn, error
"##
    .to_string()
}
