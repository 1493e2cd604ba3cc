//! Keyframe type, the built-in sky table, and table validation.

use serde::{Deserialize, Serialize};
use skyglow_common::Color;

/// Colors and dark flag anchored to a whole hour of the day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyframe {
    /// Hour of day, `0..=23`.
    pub hour: u8,
    /// Gradient stops from top to bottom, each `#RRGGBB`.
    pub colors: Vec<String>,
    #[serde(default)]
    pub is_dark: bool,
}

impl Keyframe {
    pub fn new(hour: u8, colors: &[&str], is_dark: bool) -> Self {
        Self {
            hour,
            colors: colors.iter().map(|c| (*c).to_string()).collect(),
            is_dark,
        }
    }
}

/// `(hour, stops, is_dark)` for the built-in day cycle.
pub const BUILTIN_KEYFRAMES: &[(u8, &[&str], bool)] = &[
    // Deep night
    (0, &["#0a0a1a", "#0f0f2a", "#141430"], true),
    (3, &["#0d0d20", "#121230", "#181840"], true),
    // Pre-dawn
    (5, &["#1a1a3a", "#2d2d5a", "#3d3d6a"], true),
    // Dawn
    (6, &["#2d2d5a", "#6b4984", "#c76b6b", "#f0a070"], true),
    // Sunrise
    (7, &["#4a4a80", "#d17878", "#f4a460", "#ffd89b"], false),
    (8, &["#87CEEB", "#a8d8ea", "#c8e8f8"], false),
    (9, &["#6bb3d9", "#87CEEB", "#a8d8ea"], false),
    (10, &["#5aa5d0", "#7ac2e5", "#98d4f0"], false),
    // Midday
    (12, &["#4a9bc8", "#6bb3d9", "#87CEEB"], false),
    (14, &["#5aa5d0", "#7ac2e5", "#98d4f0"], false),
    (16, &["#6bb3d9", "#8fc4e8", "#b0d8f0"], false),
    // Golden hour
    (17, &["#87CEEB", "#c9a87c", "#e8b87c"], false),
    // Sunset
    (18, &["#6b7b9a", "#d17878", "#f4a460", "#ffd89b"], false),
    // Dusk
    (19, &["#4a4a80", "#8b5a8b", "#c76b6b", "#d48872"], true),
    (20, &["#2d2d5a", "#4a4a80", "#6b4984"], true),
    (21, &["#1a1a3a", "#2d2d5a", "#3d3d6a"], true),
    (22, &["#121225", "#1a1a35", "#222245"], true),
    (23, &["#0d0d1a", "#121228", "#171735"], true),
];

/// Check a keyframe table, collecting every problem found.
///
/// A usable table has at least two entries, hours in `0..=23` in strictly
/// ascending order, and at least one `#RRGGBB` stop per keyframe.
pub fn validate_keyframes(keyframes: &[Keyframe]) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if keyframes.len() < 2 {
        errors.push(format!(
            "palette needs at least 2 keyframes, got {}",
            keyframes.len()
        ));
    }

    for (i, kf) in keyframes.iter().enumerate() {
        if kf.hour > 23 {
            errors.push(format!(
                "keyframes[{i}].hour = {} is out of range [0, 23]",
                kf.hour
            ));
        }

        if let Some(prev) = i.checked_sub(1).map(|p| &keyframes[p]) {
            if kf.hour == prev.hour {
                errors.push(format!("keyframes[{i}].hour = {} is a duplicate", kf.hour));
            } else if kf.hour < prev.hour {
                errors.push(format!(
                    "keyframes[{i}].hour = {} is not after {}",
                    kf.hour, prev.hour
                ));
            }
        }

        if kf.colors.is_empty() {
            errors.push(format!("keyframes[{i}].colors is empty"));
        }
        for (j, color) in kf.colors.iter().enumerate() {
            if !color.starts_with('#') || Color::from_hex(color).is_none() {
                errors.push(format!(
                    "keyframes[{i}].colors[{j}] = '{color}' is not a #RRGGBB color"
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
