// SPDX-License-Identifier: LGPL-3.0-only

//! Color parsing and construction helpers.

use vello::peniko::Color;
use super::error::ThemeError;

fn hex_component(hex: &str, range: std::ops::Range<usize>) -> Result<u8, ThemeError> {
    hex.get(range)
        .and_then(|digits| u8::from_str_radix(digits, 16).ok())
        .ok_or_else(|| ThemeError::InvalidColor(hex.to_string()))
}

/// Parse a hex color string with optional alpha channel.
///
/// Supports both RGB and RGBA formats:
/// - `#rrggbb` - 6 characters, opaque (alpha = 255)
/// - `#rrggbbaa` - 8 characters, with alpha channel (0-255)
pub fn parse_hex_color(hex: &str) -> Result<Color, ThemeError> {
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    match hex.len() {
        6 => Ok(Color::from_rgb8(
            hex_component(hex, 0..2)?,
            hex_component(hex, 2..4)?,
            hex_component(hex, 4..6)?,
        )),
        8 => Ok(Color::from_rgba8(
            hex_component(hex, 0..2)?,
            hex_component(hex, 2..4)?,
            hex_component(hex, 4..6)?,
            hex_component(hex, 6..8)?,
        )),
        _ => Err(ThemeError::InvalidColor(format!(
            "Hex color must be 6 or 8 characters: {}",
            hex
        ))),
    }
}

/// Create a color with RGBA components.
pub fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Color {
    Color::from_rgba8(r, g, b, a)
}

/// Create an opaque color with RGB components.
pub fn rgb8(r: u8, g: u8, b: u8) -> Color {
    Color::from_rgb8(r, g, b)
}

/// Create a color from RGB components and a fractional alpha in `0.0..=1.0`.
pub fn rgb_alpha(r: u8, g: u8, b: u8, alpha: f32) -> Color {
    Color::from_rgb8(r, g, b).with_alpha(alpha)
}
