//! Sky palette and refresh configuration.

use serde::{Deserialize, Serialize};

/// Palette name meaning the built-in keyframe table.
pub const DEFAULT_PALETTE: &str = "default";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkyConfig {
    /// `"default"`, a palette name under the config directory, or a YAML path.
    pub palette: String,
    /// Seconds between sky recomputations (valid range: 1-3600).
    pub refresh_interval_secs: u32,
}

impl Default for SkyConfig {
    fn default() -> Self {
        Self {
            palette: DEFAULT_PALETTE.into(),
            refresh_interval_secs: 30,
        }
    }
}

impl SkyConfig {
    pub fn refresh_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs(u64::from(self.refresh_interval_secs))
    }
}
