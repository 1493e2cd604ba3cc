//! Theme mode configuration.

use serde::{Deserialize, Serialize};
use skyglow_common::ThemeMode;

/// Preference defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Mode used when nothing valid is stored.
    pub default_mode: ThemeMode,
    /// Storage key the preference is persisted under.
    pub storage_key: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            default_mode: ThemeMode::Sky,
            storage_key: "theme-mode".into(),
        }
    }
}
