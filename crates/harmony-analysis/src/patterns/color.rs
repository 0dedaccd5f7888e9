//! Normalized RGB to hex conversion.

use crate::document::Rgb;

/// Converts a normalized color to `#RRGGBB` (uppercase). Each channel is
/// clamped to `[0, 1]` and rounded to the nearest of 256 levels.
pub fn rgb_to_hex(color: &Rgb) -> String {
    format!(
        "#{:02X}{:02X}{:02X}",
        channel(color.r),
        channel(color.g),
        channel(color.b)
    )
}

fn channel(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}
