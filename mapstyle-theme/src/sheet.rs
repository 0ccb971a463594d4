// SPDX-License-Identifier: LGPL-3.0-only

//! Style sheets.
//!
//! A style sheet is a fixed table of [StyleDefinition]s built from the
//! palettes. Registration builds the whole table first and only then adds
//! it to the theme, so a palette lookup failure leaves the theme untouched.

use crate::error::ThemeResult;
use crate::palette::{ColorPalette, FontPalette};
use crate::style::StyleAttributes;
use crate::theme::Theme;

/// A named style as declared by a style sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleDefinition {
    /// Style name, unique within a theme.
    pub name: String,
    /// Style the attributes are layered over.
    pub base: Option<String>,
    /// Declared attributes.
    pub attributes: StyleAttributes,
}

impl StyleDefinition {
    /// Define a style without a base.
    pub fn new(name: impl Into<String>, attributes: StyleAttributes) -> Self {
        Self {
            name: name.into(),
            base: None,
            attributes,
        }
    }

    /// Define a style layered over `base`.
    pub fn based_on(
        name: impl Into<String>,
        base: impl Into<String>,
        attributes: StyleAttributes,
    ) -> Self {
        Self {
            name: name.into(),
            base: Some(base.into()),
            attributes,
        }
    }
}

/// A group of style definitions registered together.
pub trait StyleSheet {
    /// Name used in log output.
    fn name(&self) -> &'static str;

    /// Build this sheet's definitions from the palettes.
    fn definitions(
        &self,
        colors: &ColorPalette,
        fonts: &FontPalette,
    ) -> ThemeResult<Vec<StyleDefinition>>;

    /// Add every definition of this sheet to `theme`.
    fn register(
        &self,
        theme: &mut Theme,
        colors: &ColorPalette,
        fonts: &FontPalette,
    ) -> ThemeResult<()> {
        let definitions = self.definitions(colors, fonts)?;
        log::debug!(
            "Registering {} styles from {} into {} theme",
            definitions.len(),
            self.name(),
            theme.variant().as_str()
        );
        for definition in definitions {
            theme.add_definition(definition);
        }
        Ok(())
    }
}

/// A style sheet that can be shared across threads.
pub type SharedStyleSheet = Box<dyn StyleSheet + Send + Sync>;

/// Register several sheets in order. Later sheets may override earlier ones.
pub fn register_all(
    theme: &mut Theme,
    sheets: &[SharedStyleSheet],
    colors: &ColorPalette,
    fonts: &FontPalette,
) -> ThemeResult<()> {
    for sheet in sheets {
        sheet.register(theme, colors, fonts)?;
    }
    Ok(())
}
