//! Time-of-day sky colors.
//!
//! A [`SkyPalette`] is an ordered table of hour-anchored [`Keyframe`]s. For
//! any wall-clock time it finds the two keyframes around it, blends their
//! color stops linearly, and produces a top-to-bottom CSS gradient, a
//! representative solid color and a dark/light flag ([`ResolvedTheme`]).
//!
//! ```
//! use skyglow_sky::SkyPalette;
//!
//! let sky = SkyPalette::builtin().resolve_at(6, 0);
//! assert!(sky.is_dark);
//! assert!(sky.background.starts_with("linear-gradient(180deg, #2d2d5a 0%"));
//! ```

pub mod interpolate;
pub mod keyframe;
pub mod palette;

pub use interpolate::{build_gradient, interpolate_color, interpolate_color_array};
pub use keyframe::{validate_keyframes, Keyframe, BUILTIN_KEYFRAMES};
pub use palette::{blend_factor, Bracket, Resolution, ResolvedTheme, SkyPalette};
