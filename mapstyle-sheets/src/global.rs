// SPDX-License-Identifier: LGPL-3.0-only

//! Base styles shared across screens.

use mapstyle_theme::palette::{ColorPalette, FontPalette};
use mapstyle_theme::roles::ColorRole;
use mapstyle_theme::sheet::{StyleDefinition, StyleSheet};
use mapstyle_theme::style::StyleAttributes;
use mapstyle_theme::ThemeResult;

/// Base styles for table cells and flat buttons.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobalStyleSheet;

impl StyleSheet for GlobalStyleSheet {
    fn name(&self) -> &'static str {
        "GlobalStyleSheet"
    }

    fn definitions(
        &self,
        colors: &ColorPalette,
        _fonts: &FontPalette,
    ) -> ThemeResult<Vec<StyleDefinition>> {
        Ok(vec![
            StyleDefinition::new(
                "TableCell",
                StyleAttributes {
                    background_color: Some(colors.color(ColorRole::White)?),
                    font_color: Some(colors.color(ColorRole::BlackPrimaryText)?),
                    tint_color: Some(colors.color(ColorRole::BlackSecondaryText)?),
                    ..StyleAttributes::default()
                },
            ),
            StyleDefinition::new(
                "FlatNormalTransButton",
                StyleAttributes {
                    font_color: Some(colors.color(ColorRole::LinkBlue)?),
                    background_color: Some(colors.color(ColorRole::Clear)?),
                    font_color_highlighted: Some(colors.color(ColorRole::LinkBlueHighlighted)?),
                    font_color_disabled: Some(colors.color(ColorRole::BlackHintText)?),
                    tint_color: Some(colors.color(ColorRole::LinkBlue)?),
                    ..StyleAttributes::default()
                },
            ),
        ])
    }
}
