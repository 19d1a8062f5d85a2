//! Building the `/points/{lat},{lon}` lookup URL.

use crate::Coordinate;

/// The points endpoint rejects coordinates with more fractional digits.
pub const MAX_PRECISION: usize = 4;

/// `"<base>/<lat>,<lon>"` with both coordinates truncated to
/// [`MAX_PRECISION`] fractional digits.
pub fn points_url(base_url: &str, coordinate: Coordinate) -> String {
    format!(
        "{}/{},{}",
        base_url.trim_end_matches('/'),
        truncate(coordinate.latitude),
        truncate(coordinate.longitude),
    )
}

/// Truncates toward zero, never rounds. Works on the shortest decimal
/// representation so that e.g. `0.3` is not mangled by binary scaling.
fn truncate(value: f64) -> String {
    let repr = value.to_string();

    let Some((whole, fraction)) = repr.split_once('.') else {
        return repr;
    };

    let kept = fraction[..fraction.len().min(MAX_PRECISION)].trim_end_matches('0');
    let out = if kept.is_empty() { whole.to_string() } else { format!("{whole}.{kept}") };

    if out == "-0" { "0".to_string() } else { out }
}
