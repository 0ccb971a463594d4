#![warn(missing_docs)]

//! Named UI styles for map and search screens.
//!
//! Styles are registered into a [Theme](theme::theme::Theme) from color and
//! font palettes. Each appearance variant gets its own theme.
//!
//! ```rust
//! use mapstyle::prelude::*;
//!
//! let theme = mapstyle::build_theme(ThemeVariant::Day, &Palettes::builtin(ThemeVariant::Day))?;
//! let done = theme.resolve("BookingDatePickerDone")?;
//! assert_eq!(done.font, Some(Font::semibold(16.0)));
//! # Ok::<(), mapstyle::theme::ThemeError>(())
//! ```

pub use nalgebra as math;
pub use vello::peniko as color;

pub use mapstyle_theme as theme;
#[cfg(feature = "sheets")]
pub use mapstyle_sheets as sheets;

#[cfg(feature = "sheets")]
use mapstyle_theme::{
    config::ThemeConfig,
    loader::Palettes,
    manager::{self, ThemeManager},
    theme::{Theme, ThemeVariant},
    ThemeResult,
};

/// Build a validated theme holding every built-in style.
#[cfg(feature = "sheets")]
pub fn build_theme(variant: ThemeVariant, palettes: &Palettes) -> ThemeResult<Theme> {
    manager::build_theme(&sheets::all(), variant, palettes)
}

/// Create a [ThemeManager] with the built-in style sheets, configured from
/// the environment.
#[cfg(feature = "sheets")]
pub fn manager_from_env() -> ThemeResult<ThemeManager> {
    let config = ThemeConfig::from_env_or_default();
    log::debug!("Using {} theme", config.variant.as_str());
    ThemeManager::from_config(sheets::all(), &config)
}

/// A "prelude" for users of the mapstyle crate.
///
/// ```rust
/// use mapstyle::prelude::*;
/// ```
pub mod prelude {
    pub use crate::theme::config::ThemeConfig;
    pub use crate::theme::font::{Font, FontWeight};
    pub use crate::theme::loader::{PaletteLoader, Palettes};
    pub use crate::theme::manager::ThemeManager;
    pub use crate::theme::palette::{ColorPalette, FontPalette};
    pub use crate::theme::roles::{ColorRole, ColoringMode, FontRole};
    pub use crate::theme::sheet::{StyleDefinition, StyleSheet};
    pub use crate::theme::style::StyleAttributes;
    pub use crate::theme::theme::{StyleEntry, Theme, ThemeVariant};
    pub use crate::theme::{ThemeError, ThemeResult};

    #[cfg(feature = "sheets")]
    pub use crate::sheets::{GlobalStyleSheet, SearchStyleSheet};

    // Math
    pub use nalgebra::Vector2;

    // Color
    pub use vello::peniko::Color;
}
