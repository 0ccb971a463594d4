#![warn(missing_docs)]

//! # mapstyle theme engine
//!
//! Named visual styles for the map and search UI, built from role-based
//! color and font palettes.
//!
//! ## Overview
//!
//! - **[ColorPalette](palette::ColorPalette)** / **[FontPalette](palette::FontPalette)**:
//!   lookups from [ColorRole](roles::ColorRole) / [FontRole](roles::FontRole) to concrete values
//! - **[StyleAttributes](style::StyleAttributes)**: the optional visual properties of one style
//! - **[Theme](theme::Theme)**: the table from style name to attributes and base style
//! - **[StyleSheet](sheet::StyleSheet)**: a declarative group of style definitions
//! - **[PaletteLoader](loader::PaletteLoader)**: TOML palette overrides
//! - **[ThemeConfig](config::ThemeConfig)**: variant and palette selection
//! - **[ThemeManager](manager::ThemeManager)**: one built theme per variant
//!
//! ## Quick Start
//!
//! ```rust
//! use mapstyle_theme::palette::{ColorPalette, FontPalette};
//! use mapstyle_theme::roles::ColorRole;
//! use mapstyle_theme::style::StyleAttributes;
//! use mapstyle_theme::theme::{Theme, ThemeVariant};
//!
//! let colors = ColorPalette::day();
//! let mut theme = Theme::new(ThemeVariant::Day);
//! theme.add(
//!     "Banner",
//!     None,
//!     StyleAttributes {
//!         background_color: Some(colors.color(ColorRole::SearchPromoBackground)?),
//!         ..StyleAttributes::default()
//!     },
//! );
//! assert!(theme.resolve("Banner")?.background_color.is_some());
//! # Ok::<(), mapstyle_theme::error::ThemeError>(())
//! ```

/// Contains the built-in day/night color palettes and the system font palette.
pub mod builtin;
/// Contains the [config::ThemeConfig] struct.
pub mod config;
/// Contains the [error::ThemeError] enum.
pub mod error;
/// Contains the [font::Font] struct.
pub mod font;
/// Contains the [loader::PaletteLoader] for TOML palette files.
pub mod loader;
/// Contains the [manager::ThemeManager] struct.
pub mod manager;
/// Contains color and font palettes.
pub mod palette;
/// Contains the role enums.
pub mod roles;
/// Contains the [sheet::StyleSheet] trait.
pub mod sheet;
/// Contains the [style::StyleAttributes] struct.
pub mod style;
/// Contains the [theme::Theme] registry.
pub mod theme;
/// Contains color helpers.
pub mod util;

pub use error::{ThemeError, ThemeResult};
