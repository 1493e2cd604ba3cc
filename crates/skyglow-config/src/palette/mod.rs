//! Sky palette loading.
//!
//! Palettes are YAML files holding a keyframe table:
//!
//! ```yaml
//! name: winter
//! keyframes:
//!   - hour: 0
//!     colors: ["#0a0a1a", "#141430"]
//!     is_dark: true
//!   - hour: 12
//!     colors: ["#b0c4de", "#dfe8f0"]
//! ```
//!
//! The name `"default"` always resolves to the built-in table.

mod loader;


pub use loader::{
    load_palette, load_palette_from_path, palette_for_config, resolve_palette_path, PaletteFile,
};
