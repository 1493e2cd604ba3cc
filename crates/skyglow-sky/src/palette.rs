//! Keyframe tables and time-of-day resolution.

use chrono::Timelike;
use serde::{Deserialize, Serialize};

use crate::interpolate::{build_gradient, interpolate_color_array};
use crate::keyframe::{validate_keyframes, Keyframe, BUILTIN_KEYFRAMES};

// =============================================================================
// RESOLVED THEME
// =============================================================================

/// Visual state of the sky at one instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedTheme {
    /// CSS `linear-gradient(...)` for the page background.
    pub background: String,
    /// Representative `#rrggbb`, always one of the gradient stops.
    pub solid_color: String,
    pub is_dark: bool,
}

impl Default for ResolvedTheme {
    /// Night placeholder shown before the first resolution.
    fn default() -> Self {
        Self {
            background: "linear-gradient(180deg, #1a1a2e 0%, #16213e 50%, #0f3460 100%)".into(),
            solid_color: "#16213e".into(),
            is_dark: true,
        }
    }
}

/// The two keyframes around an instant, on a continuous hour timeline.
#[derive(Debug, Clone, Copy)]
pub struct Bracket<'a> {
    pub prev: &'a Keyframe,
    pub next: &'a Keyframe,
    /// `prev.hour`, shifted by -24 when the instant sits just after midnight.
    pub prev_hour: f64,
    /// `next.hour`, shifted by +24 when the pair straddles midnight.
    pub next_hour: f64,
}

/// Full output of a resolution, including the intermediate values.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub current_time: f64,
    pub prev_hour: f64,
    pub next_hour: f64,
    pub factor: f64,
    pub stops: Vec<String>,
    pub theme: ResolvedTheme,
}

/// Position of `current_time` between `prev_hour` and `next_hour`, in `[0, 1]`.
pub fn blend_factor(current_time: f64, prev_hour: f64, next_hour: f64) -> f64 {
    let span = next_hour - prev_hour;
    if span == 0.0 {
        return 0.0;
    }
    ((current_time - prev_hour) / span).clamp(0.0, 1.0)
}

// =============================================================================
// PALETTE
// =============================================================================

/// An ordered keyframe table covering a 24-hour cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkyPalette {
    keyframes: Vec<Keyframe>,
}

impl SkyPalette {
    /// The built-in day cycle.
    pub fn builtin() -> Self {
        let keyframes = BUILTIN_KEYFRAMES
            .iter()
            .map(|(hour, colors, is_dark)| Keyframe::new(*hour, colors, *is_dark))
            .collect();
        Self { keyframes }
    }

    /// Build a palette from user-supplied keyframes, rejecting unusable tables.
    ///
    /// Errors list every problem found, one entry each.
    pub fn new(keyframes: Vec<Keyframe>) -> Result<Self, Vec<String>> {
        validate_keyframes(&keyframes)?;
        Ok(Self { keyframes })
    }

    pub fn keyframes(&self) -> &[Keyframe] {
        &self.keyframes
    }

    /// Find the keyframes around `current_time` (hours, `[0, 24)`).
    ///
    /// Returns `None` only for an empty table.
    pub fn bracket(&self, current_time: f64) -> Option<Bracket<'_>> {
        let len = self.keyframes.len();
        let last = len.checked_sub(1)?;
        let hour = current_time.floor();

        let (prev_idx, next_idx) = match self
            .keyframes
            .iter()
            .rposition(|kf| f64::from(kf.hour) <= hour)
        {
            Some(i) => (i, (i + 1) % len),
            // Before the first keyframe: the pair that straddles midnight.
            None => (last, 0),
        };

        let prev = &self.keyframes[prev_idx];
        let next = &self.keyframes[next_idx];
        let mut prev_hour = f64::from(prev.hour);
        let mut next_hour = f64::from(next.hour);

        // Straddling midnight: next is always tomorrow, and prev is
        // yesterday when the time falls before it.
        if next_hour < prev_hour {
            next_hour += 24.0;
            if current_time < prev_hour {
                prev_hour -= 24.0;
            }
        }

        Some(Bracket {
            prev,
            next,
            prev_hour,
            next_hour,
        })
    }

    /// Resolve the sky for any time-of-day value. Seconds are ignored.
    pub fn resolve<T: Timelike>(&self, time: &T) -> ResolvedTheme {
        self.resolve_at(time.hour(), time.minute())
    }

    /// Resolve the sky at `hour:minute`.
    pub fn resolve_at(&self, hour: u32, minute: u32) -> ResolvedTheme {
        self.resolve_detailed(hour, minute).theme
    }

    /// Like [`SkyPalette::resolve_at`], also returning the bracket and stops.
    ///
    /// Out-of-range input wraps (`hour % 24`, `minute % 60`).
    pub fn resolve_detailed(&self, hour: u32, minute: u32) -> Resolution {
        let current_time = f64::from(hour % 24) + f64::from(minute % 60) / 60.0;

        let Some(bracket) = self.bracket(current_time) else {
            let theme = ResolvedTheme::default();
            return Resolution {
                current_time,
                prev_hour: current_time,
                next_hour: current_time,
                factor: 0.0,
                stops: vec![theme.solid_color.clone()],
                theme,
            };
        };

        let factor = blend_factor(current_time, bracket.prev_hour, bracket.next_hour);
        let stops = interpolate_color_array(&bracket.prev.colors, &bracket.next.colors, factor);

        let background = build_gradient(&stops);
        let solid_color = stops.get(stops.len() / 2).cloned().unwrap_or_default();
        // Hard switch at the midpoint between the two keyframes.
        let is_dark = if factor < 0.5 {
            bracket.prev.is_dark
        } else {
            bracket.next.is_dark
        };

        tracing::trace!(
            current_time,
            prev = bracket.prev.hour,
            next = bracket.next.hour,
            factor,
            "resolved sky"
        );

        Resolution {
            current_time,
            prev_hour: bracket.prev_hour,
            next_hour: bracket.next_hour,
            factor,
            stops,
            theme: ResolvedTheme {
                background,
                solid_color,
                is_dark,
            },
        }
    }
}

impl Default for SkyPalette {
    fn default() -> Self {
        Self::builtin()
    }
}
