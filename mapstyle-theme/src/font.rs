// SPDX-License-Identifier: LGPL-3.0-only

//! Concrete font descriptions.

use crate::error::ThemeError;

/// Font weight, from thinnest to boldest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FontWeight {
    /// Light weight.
    Light,
    /// Regular weight.
    Regular,
    /// Medium weight.
    Medium,
    /// Semibold weight.
    Semibold,
    /// Bold weight.
    Bold,
}

impl FontWeight {
    /// Get the lowercase name used in palette files.
    pub fn as_str(&self) -> &'static str {
        match self {
            FontWeight::Light => "light",
            FontWeight::Regular => "regular",
            FontWeight::Medium => "medium",
            FontWeight::Semibold => "semibold",
            FontWeight::Bold => "bold",
        }
    }

    /// Parse a weight name, ignoring case.
    pub fn parse(name: &str) -> Result<Self, ThemeError> {
        match name.to_ascii_lowercase().as_str() {
            "light" => Ok(FontWeight::Light),
            "regular" => Ok(FontWeight::Regular),
            "medium" => Ok(FontWeight::Medium),
            "semibold" => Ok(FontWeight::Semibold),
            "bold" => Ok(FontWeight::Bold),
            _ => Err(ThemeError::InvalidFontWeight(name.to_string())),
        }
    }
}

/// A system font at a given point size and weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Font {
    /// Point size.
    pub size: f32,
    /// Weight.
    pub weight: FontWeight,
}

impl Font {
    /// Create a font description.
    pub const fn new(size: f32, weight: FontWeight) -> Self {
        Self { size, weight }
    }

    /// Regular weight at `size` points.
    pub const fn regular(size: f32) -> Self {
        Self::new(size, FontWeight::Regular)
    }

    /// Medium weight at `size` points.
    pub const fn medium(size: f32) -> Self {
        Self::new(size, FontWeight::Medium)
    }

    /// Semibold weight at `size` points.
    pub const fn semibold(size: f32) -> Self {
        Self::new(size, FontWeight::Semibold)
    }

    /// Bold weight at `size` points.
    pub const fn bold(size: f32) -> Self {
        Self::new(size, FontWeight::Bold)
    }

    /// Light weight at `size` points.
    pub const fn light(size: f32) -> Self {
        Self::new(size, FontWeight::Light)
    }
}
