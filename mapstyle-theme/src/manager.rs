// SPDX-License-Identifier: LGPL-3.0-only

//! Building themes from style sheets and switching between variants.

use std::collections::HashMap;
use std::sync::Arc;

use crate::config::ThemeConfig;
use crate::error::ThemeResult;
use crate::loader::Palettes;
use crate::sheet::register_all;
use crate::theme::{Theme, ThemeVariant};

pub use crate::sheet::SharedStyleSheet;

/// Register every sheet in order into a fresh theme for `variant` and
/// validate its base styles.
pub fn build_theme(
    sheets: &[SharedStyleSheet],
    variant: ThemeVariant,
    palettes: &Palettes,
) -> ThemeResult<Theme> {
    let mut theme = Theme::new(variant);
    register_all(&mut theme, sheets, &palettes.colors, &palettes.fonts)?;
    theme.validate()?;
    log::info!(
        "Built {} theme with {} styles from {} sheets",
        variant.as_str(),
        theme.len(),
        sheets.len()
    );
    Ok(theme)
}

/// Holds one finished theme per variant and tracks the active one.
///
/// Each theme is built once, by registering every sheet in order into a
/// fresh [Theme]. Switching variants hands out the already built theme.
pub struct ThemeManager {
    sheets: Vec<SharedStyleSheet>,
    themes: HashMap<ThemeVariant, Arc<Theme>>,
    current: ThemeVariant,
}

impl ThemeManager {
    /// Build both variants from explicit palettes.
    pub fn with_palettes(
        sheets: Vec<SharedStyleSheet>,
        current: ThemeVariant,
        day: &Palettes,
        night: &Palettes,
    ) -> ThemeResult<Self> {
        let mut manager = Self {
            sheets,
            themes: HashMap::new(),
            current,
        };
        manager.rebuild(ThemeVariant::Day, day)?;
        manager.rebuild(ThemeVariant::Night, night)?;
        Ok(manager)
    }

    /// Build both variants from the palettes named in `config`.
    pub fn from_config(sheets: Vec<SharedStyleSheet>, config: &ThemeConfig) -> ThemeResult<Self> {
        let day = config.load_palettes(ThemeVariant::Day)?;
        let night = config.load_palettes(ThemeVariant::Night)?;
        Self::with_palettes(sheets, config.variant, &day, &night)
    }

    /// Register every sheet into a fresh theme for `variant`.
    pub fn build(&self, variant: ThemeVariant, palettes: &Palettes) -> ThemeResult<Theme> {
        build_theme(&self.sheets, variant, palettes)
    }

    /// Rebuild one variant from new palettes, e.g. after a palette file changed.
    ///
    /// On error the previously built theme stays in place.
    pub fn rebuild(&mut self, variant: ThemeVariant, palettes: &Palettes) -> ThemeResult<()> {
        let theme = self.build(variant, palettes)?;
        self.themes.insert(variant, Arc::new(theme));
        Ok(())
    }

    /// Make `variant` the active theme.
    pub fn switch_theme(&mut self, variant: ThemeVariant) {
        if self.current != variant {
            log::debug!("Switching theme {} -> {}", self.current.as_str(), variant.as_str());
        }
        self.current = variant;
    }

    /// The active variant.
    pub fn current_variant(&self) -> ThemeVariant {
        self.current
    }

    /// The active theme.
    pub fn current(&self) -> Arc<Theme> {
        self.theme(self.current)
    }

    /// The theme built for `variant`.
    pub fn theme(&self, variant: ThemeVariant) -> Arc<Theme> {
        // Both variants are inserted by every constructor.
        self.themes
            .get(&variant)
            .cloned()
            .unwrap_or_else(|| Arc::new(Theme::new(variant)))
    }
}
