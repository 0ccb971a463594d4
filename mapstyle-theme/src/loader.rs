// SPDX-License-Identifier: LGPL-3.0-only

//! Palette loader for TOML palette files.
//!
//! A palette file overrides individual roles of a built-in palette:
//!
//! ```toml
//! [Colors]
//! primary = "#3B4DFF"
//! blackHintText = "#00000042"
//!
//! [Fonts]
//! medium12 = { size = 12, weight = "medium" }
//! ```
//!
//! Keys that do not name a role are skipped with a warning.

use std::path::Path;
use vello::peniko::Color;

use super::error::{ThemeError, ThemeResult};
use super::font::{Font, FontWeight};
use super::palette::{ColorPalette, FontPalette};
use super::roles::{ColorRole, FontRole};
use super::theme::ThemeVariant;
use super::util::parse_hex_color;

/// A color palette and font palette loaded together.
#[derive(Debug, Clone, Default)]
pub struct Palettes {
    /// Colors by role.
    pub colors: ColorPalette,
    /// Fonts by role.
    pub fonts: FontPalette,
}

impl Palettes {
    /// The built-in palettes for a variant.
    pub fn builtin(variant: ThemeVariant) -> Self {
        let colors = match variant {
            ThemeVariant::Day => ColorPalette::day(),
            ThemeVariant::Night => ColorPalette::night(),
        };
        Self {
            colors,
            fonts: FontPalette::system(),
        }
    }

    /// Overwrite roles with those defined in `other`.
    pub fn merge(&mut self, other: &Palettes) {
        self.colors.merge(&other.colors);
        self.fonts.merge(&other.fonts);
    }
}

/// Loader for TOML palette files.
pub struct PaletteLoader;

impl PaletteLoader {
    /// Load a palette file and layer it over the built-in palettes for `variant`.
    pub fn load_from_file<P: AsRef<Path>>(path: P, variant: ThemeVariant) -> ThemeResult<Palettes> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| ThemeError::ReadError(path.to_path_buf(), e))?;

        Self::load_from_toml(&content, path, variant)
    }

    /// Parse palette TOML and layer it over the built-in palettes for `variant`.
    pub fn load_from_toml<P: AsRef<Path>>(
        content: &str,
        path: P,
        variant: ThemeVariant,
    ) -> ThemeResult<Palettes> {
        let overrides = Self::parse_overrides(content, path)?;
        let mut palettes = Palettes::builtin(variant);
        palettes.merge(&overrides);
        Ok(palettes)
    }

    /// Parse palette TOML into palettes holding only the roles the file defines.
    pub fn parse_overrides<P: AsRef<Path>>(content: &str, path: P) -> ThemeResult<Palettes> {
        let path = path.as_ref();
        let table: toml::Value = toml::from_str(content)
            .map_err(|e| ThemeError::ParseError(path.to_path_buf(), e.to_string()))?;

        let mut palettes = Palettes::default();

        // Parse [Colors] section
        if let Some(colors) = table.get("Colors").and_then(|v| v.as_table()) {
            for (key, value) in colors.iter() {
                let Some(role) = ColorRole::from_str(key) else {
                    log::warn!("Skipping unknown color role '{}' in {:?}", key, path);
                    continue;
                };
                palettes.colors.set(role, Self::parse_color(value)?);
            }
        }

        // Parse [Fonts] section
        if let Some(fonts) = table.get("Fonts").and_then(|v| v.as_table()) {
            for (key, value) in fonts.iter() {
                let Some(role) = FontRole::from_str(key) else {
                    log::warn!("Skipping unknown font role '{}' in {:?}", key, path);
                    continue;
                };
                palettes.fonts.set(role, Self::parse_font(value, path, key)?);
            }
        }

        Ok(palettes)
    }

    fn parse_color(value: &toml::Value) -> ThemeResult<Color> {
        match value.as_str() {
            Some(hex) => parse_hex_color(hex),
            None => Err(ThemeError::InvalidColor(value.to_string())),
        }
    }

    fn parse_font(value: &toml::Value, path: &Path, key: &str) -> ThemeResult<Font> {
        let malformed = |details: &str| {
            ThemeError::ParseError(path.to_path_buf(), format!("font '{}': {}", key, details))
        };
        let table = value
            .as_table()
            .ok_or_else(|| malformed("expected a table with `size` and `weight`"))?;
        let size = match table.get("size") {
            Some(toml::Value::Float(size)) => *size as f32,
            Some(toml::Value::Integer(size)) => *size as f32,
            _ => return Err(malformed("missing numeric `size`")),
        };
        if !size.is_finite() || size <= 0.0 {
            return Err(malformed("`size` must be a positive number"));
        }
        let weight = table
            .get("weight")
            .and_then(|v| v.as_str())
            .ok_or_else(|| malformed("missing `weight`"))?;

        Ok(Font::new(size, FontWeight::parse(weight)?))
    }
}
