//! Configuration schema types for Skyglow.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod sky;
mod system;
mod theme;

pub use sky::*;
pub use system::*;
pub use theme::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
///
/// Only override what you want to change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct SkyglowConfig {
    pub theme: ThemeConfig,
    pub sky: SkyConfig,
    pub system: SystemConfig,
    pub logging: LoggingConfig,
}
