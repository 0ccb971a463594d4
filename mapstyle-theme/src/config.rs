// SPDX-License-Identifier: LGPL-3.0-only

//! # Theme Configuration
//!
//! Selects the active variant and optional palette files, from environment
//! variables, a TOML configuration file, or code.
//!
//! ## Environment Variables
//!
//! - `MAPSTYLE_THEME`: active variant (`day` or `night`)
//! - `MAPSTYLE_DAY_PALETTE`: palette file layered over the day palette
//! - `MAPSTYLE_NIGHT_PALETTE`: palette file layered over the night palette
//! - `MAPSTYLE_THEME_CONFIG`: path to a configuration file; replaces the above
//!
//! ## Configuration File Format
//!
//! ```toml
//! [theme]
//! variant = "night"
//! day_palette = "./palettes/day.toml"
//! night_palette = "./palettes/night.toml"
//! ```

use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ThemeError, ThemeResult};
use crate::loader::{PaletteLoader, Palettes};
use crate::theme::ThemeVariant;

/// Environment variable selecting the active variant.
pub const THEME_ENV: &str = "MAPSTYLE_THEME";
/// Environment variable naming the day palette file.
pub const DAY_PALETTE_ENV: &str = "MAPSTYLE_DAY_PALETTE";
/// Environment variable naming the night palette file.
pub const NIGHT_PALETTE_ENV: &str = "MAPSTYLE_NIGHT_PALETTE";
/// Environment variable naming a configuration file.
pub const CONFIG_ENV: &str = "MAPSTYLE_THEME_CONFIG";

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    theme: ThemeSection,
}

#[derive(Debug, Default, Deserialize)]
struct ThemeSection {
    variant: Option<String>,
    day_palette: Option<PathBuf>,
    night_palette: Option<PathBuf>,
}

/// Which variant is active and where its palettes come from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThemeConfig {
    /// The active variant.
    pub variant: ThemeVariant,
    /// Palette file layered over the built-in day palette.
    pub day_palette: Option<PathBuf>,
    /// Palette file layered over the built-in night palette.
    pub night_palette: Option<PathBuf>,
}

impl ThemeConfig {
    /// Day variant with built-in palettes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration from environment variables, or the defaults.
    ///
    /// An unreadable `MAPSTYLE_THEME_CONFIG` file is logged and ignored.
    pub fn from_env_or_default() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::new();

        if let Some(variant) = lookup(THEME_ENV) {
            match ThemeVariant::from_str(&variant) {
                Some(variant) => config.variant = variant,
                None => log::warn!("Ignoring unknown {} value '{}'", THEME_ENV, variant),
            }
        }
        if let Some(path) = lookup(DAY_PALETTE_ENV) {
            config.day_palette = Some(PathBuf::from(path));
        }
        if let Some(path) = lookup(NIGHT_PALETTE_ENV) {
            config.night_palette = Some(PathBuf::from(path));
        }

        if let Some(config_path) = lookup(CONFIG_ENV) {
            match Self::from_file(&config_path) {
                Ok(file_config) => config = file_config,
                Err(e) => log::warn!("Ignoring theme config {}: {}", config_path, e),
            }
        }

        config
    }

    /// Load a configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> ThemeResult<Self> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).map_err(|e| ThemeError::ReadError(path.to_path_buf(), e))?;
        Self::from_toml(&content, path)
    }

    /// Parse a configuration from TOML content. `path` is used in errors.
    pub fn from_toml<P: AsRef<Path>>(content: &str, path: P) -> ThemeResult<Self> {
        let path = path.as_ref();
        let file: ConfigFile = toml::from_str(content)
            .map_err(|e| ThemeError::ParseError(path.to_path_buf(), e.to_string()))?;

        let variant = match file.theme.variant {
            Some(name) => ThemeVariant::from_str(&name).ok_or_else(|| {
                ThemeError::ParseError(path.to_path_buf(), format!("unknown variant '{}'", name))
            })?,
            None => ThemeVariant::default(),
        };

        Ok(Self {
            variant,
            day_palette: file.theme.day_palette,
            night_palette: file.theme.night_palette,
        })
    }

    /// Set the active variant.
    pub fn with_variant(mut self, variant: ThemeVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the palette file for a variant.
    pub fn with_palette(mut self, variant: ThemeVariant, path: impl Into<PathBuf>) -> Self {
        let path = Some(path.into());
        match variant {
            ThemeVariant::Day => self.day_palette = path,
            ThemeVariant::Night => self.night_palette = path,
        }
        self
    }

    /// The palette file configured for a variant.
    pub fn palette_path(&self, variant: ThemeVariant) -> Option<&Path> {
        match variant {
            ThemeVariant::Day => self.day_palette.as_deref(),
            ThemeVariant::Night => self.night_palette.as_deref(),
        }
    }

    /// Load the palettes for a variant: the built-ins, plus the configured file if any.
    pub fn load_palettes(&self, variant: ThemeVariant) -> ThemeResult<Palettes> {
        match self.palette_path(variant) {
            Some(path) => PaletteLoader::load_from_file(path, variant),
            None => Ok(Palettes::builtin(variant)),
        }
    }
}
