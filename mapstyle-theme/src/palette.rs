// SPDX-License-Identifier: LGPL-3.0-only

//! Color and font palettes.
//!
//! Style sheets never hold concrete colors or fonts; they look them up by
//! role in the palettes handed to them at registration time. A lookup of a
//! role the palette does not define is an error, which registration
//! propagates to its caller.

use std::collections::HashMap;
use vello::peniko::Color;

use crate::error::{ThemeError, ThemeResult};
use crate::font::Font;
use crate::roles::{ColorRole, FontRole};

/// Lookup from [ColorRole] to a concrete color.
#[derive(Debug, Clone, Default)]
pub struct ColorPalette {
    colors: HashMap<ColorRole, Color>,
}

impl ColorPalette {
    /// Create an empty palette.
    pub fn new() -> Self {
        Self {
            colors: HashMap::new(),
        }
    }

    /// Create a palette from role/color pairs.
    pub fn from_colors(colors: impl IntoIterator<Item = (ColorRole, Color)>) -> Self {
        Self {
            colors: colors.into_iter().collect(),
        }
    }

    /// Set a color role.
    pub fn set(&mut self, role: ColorRole, color: Color) {
        self.colors.insert(role, color);
    }

    /// Set a color role, returning the palette for chaining.
    pub fn with(mut self, role: ColorRole, color: Color) -> Self {
        self.set(role, color);
        self
    }

    /// Get the color for a role.
    pub fn color(&self, role: ColorRole) -> ThemeResult<Color> {
        self.colors
            .get(&role)
            .copied()
            .ok_or_else(|| ThemeError::MissingColor(role.as_str().to_string()))
    }

    /// Check whether a role is defined.
    pub fn contains(&self, role: ColorRole) -> bool {
        self.colors.contains_key(&role)
    }

    /// Roles this palette does not define, in declaration order.
    pub fn missing_roles(&self) -> Vec<ColorRole> {
        ColorRole::ALL
            .iter()
            .copied()
            .filter(|role| !self.contains(*role))
            .collect()
    }

    /// Overwrite this palette's roles with every role defined in `other`.
    pub fn merge(&mut self, other: &ColorPalette) {
        self.colors.extend(other.colors.iter().map(|(k, v)| (*k, *v)));
    }

    /// Number of defined roles.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether no role is defined.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

/// Lookup from [FontRole] to a concrete font.
#[derive(Debug, Clone, Default)]
pub struct FontPalette {
    fonts: HashMap<FontRole, Font>,
}

impl FontPalette {
    /// Create an empty palette.
    pub fn new() -> Self {
        Self {
            fonts: HashMap::new(),
        }
    }

    /// Create a palette from role/font pairs.
    pub fn from_fonts(fonts: impl IntoIterator<Item = (FontRole, Font)>) -> Self {
        Self {
            fonts: fonts.into_iter().collect(),
        }
    }

    /// Set a font role.
    pub fn set(&mut self, role: FontRole, font: Font) {
        self.fonts.insert(role, font);
    }

    /// Set a font role, returning the palette for chaining.
    pub fn with(mut self, role: FontRole, font: Font) -> Self {
        self.set(role, font);
        self
    }

    /// Get the font for a role.
    pub fn font(&self, role: FontRole) -> ThemeResult<Font> {
        self.fonts
            .get(&role)
            .copied()
            .ok_or_else(|| ThemeError::MissingFont(role.as_str().to_string()))
    }

    /// Check whether a role is defined.
    pub fn contains(&self, role: FontRole) -> bool {
        self.fonts.contains_key(&role)
    }

    /// Roles this palette does not define, in declaration order.
    pub fn missing_roles(&self) -> Vec<FontRole> {
        FontRole::ALL
            .iter()
            .copied()
            .filter(|role| !self.contains(*role))
            .collect()
    }

    /// Overwrite this palette's roles with every role defined in `other`.
    pub fn merge(&mut self, other: &FontPalette) {
        self.fonts.extend(other.fonts.iter().map(|(k, v)| (*k, *v)));
    }

    /// Number of defined roles.
    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    /// Whether no role is defined.
    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }
}
