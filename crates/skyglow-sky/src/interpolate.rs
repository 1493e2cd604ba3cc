//! Linear RGB blending of color stops and gradient formatting.

use skyglow_common::Color;

/// Blend two `#RRGGBB` colors channel-wise, returning lowercase `#rrggbb`.
///
/// Malformed input is not validated; an unparseable color blends as black.
pub fn interpolate_color(from: &str, to: &str, factor: f64) -> String {
    let a = Color::from_hex(from).unwrap_or_default();
    let b = Color::from_hex(to).unwrap_or_default();
    a.lerp(&b, factor).to_hex()
}

/// Blend two stop lists of possibly different lengths.
///
/// The result has as many stops as the longer input. The shorter list is
/// stretched by repeating its last stop.
pub fn interpolate_color_array<S: AsRef<str>>(from: &[S], to: &[S], factor: f64) -> Vec<String> {
    let len = from.len().max(to.len());

    (0..len)
        .map(|i| {
            let a = stretched(from, i).or_else(|| stretched(to, i));
            let b = stretched(to, i).or(a);
            match (a, b) {
                (Some(a), Some(b)) => interpolate_color(a, b, factor),
                _ => Color::default().to_hex(),
            }
        })
        .collect()
}

fn stretched<S: AsRef<str>>(stops: &[S], i: usize) -> Option<&str> {
    let last = stops.len().checked_sub(1)?;
    Some(stops[i.min(last)].as_ref())
}

/// `linear-gradient(180deg, ...)` with stops spread evenly from 0% to 100%.
pub fn build_gradient<S: AsRef<str>>(stops: &[S]) -> String {
    let n = stops.len();
    let positioned: Vec<String> = stops
        .iter()
        .enumerate()
        .map(|(i, color)| {
            let percent = if n > 1 {
                (i as f64 / (n - 1) as f64) * 100.0
            } else {
                0.0
            };
            format!("{} {percent}%", color.as_ref())
        })
        .collect();

    format!("linear-gradient(180deg, {})", positioned.join(", "))
}
