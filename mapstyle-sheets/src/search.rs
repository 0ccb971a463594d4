// SPDX-License-Identifier: LGPL-3.0-only

//! Styles for the search screen, the search bar and the booking date picker.

use nalgebra::Vector2;

use mapstyle_theme::palette::{ColorPalette, FontPalette};
use mapstyle_theme::roles::{ColorRole, ColoringMode, FontRole};
use mapstyle_theme::sheet::{StyleDefinition, StyleSheet};
use mapstyle_theme::style::StyleAttributes;
use mapstyle_theme::util::rgb_alpha;
use mapstyle_theme::ThemeResult;

/// Registers the search screen styles.
///
/// `SearchCellAvaliable` is layered over `TableCell` and the booking picker
/// buttons over `FlatNormalTransButton`, both from
/// [GlobalStyleSheet](crate::GlobalStyleSheet).
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchStyleSheet;

impl StyleSheet for SearchStyleSheet {
    fn name(&self) -> &'static str {
        "SearchStyleSheet"
    }

    fn definitions(
        &self,
        colors: &ColorPalette,
        fonts: &FontPalette,
    ) -> ThemeResult<Vec<StyleDefinition>> {
        let color = |role: ColorRole| colors.color(role).map(Some);
        let font = |role: FontRole| fonts.font(role).map(Some);

        Ok(vec![
            StyleDefinition::new(
                "SearchInstallButton",
                StyleAttributes {
                    corner_radius: Some(10.0),
                    clip: Some(true),
                    font: font(FontRole::Medium12)?,
                    font_color: color(ColorRole::BlackSecondaryText)?,
                    background_color: color(ColorRole::SearchPromoBackground)?,
                    ..StyleAttributes::default()
                },
            ),
            StyleDefinition::new(
                "SearchBanner",
                StyleAttributes {
                    background_color: color(ColorRole::SearchPromoBackground)?,
                    ..StyleAttributes::default()
                },
            ),
            StyleDefinition::new(
                "SearchClosedBackground",
                StyleAttributes {
                    corner_radius: Some(4.0),
                    background_color: color(ColorRole::BlackHintText)?,
                    ..StyleAttributes::default()
                },
            ),
            StyleDefinition::new(
                "SearchPopularView",
                StyleAttributes {
                    corner_radius: Some(10.0),
                    background_color: color(ColorRole::LinkBlueHighlighted)?,
                    ..StyleAttributes::default()
                },
            ),
            StyleDefinition::new(
                "SearchSideAvaliableMarker",
                StyleAttributes {
                    background_color: color(ColorRole::RatingGreen)?,
                    ..StyleAttributes::default()
                },
            ),
            StyleDefinition::new(
                "SearchBarView",
                StyleAttributes {
                    background_color: color(ColorRole::Primary)?,
                    shadow_radius: Some(2.0),
                    shadow_color: Some(rgb_alpha(0, 0, 0, 0.26)),
                    shadow_opacity: Some(1.0),
                    shadow_offset: Some(Vector2::new(0.0, 0.0)),
                    ..StyleAttributes::default()
                },
            ),
            StyleDefinition::new(
                "SearchActionBarView",
                StyleAttributes {
                    background_color: color(ColorRole::LinkBlue)?,
                    corner_radius: Some(20.0),
                    shadow_radius: Some(1.0),
                    shadow_color: Some(rgb_alpha(0, 0, 0, 0.24)),
                    shadow_offset: Some(Vector2::new(0.0, 2.0)),
                    shadow_opacity: Some(1.0),
                    ..StyleAttributes::default()
                },
            ),
            StyleDefinition::new(
                "SearchActionBarButton",
                StyleAttributes {
                    background_color: color(ColorRole::Clear)?,
                    font_color: color(ColorRole::WhitePrimaryText)?,
                    font: font(FontRole::Semibold14)?,
                    coloring: Some(ColoringMode::WhiteText),
                    ..StyleAttributes::default()
                },
            ),
            StyleDefinition::new(
                "SearchSearchTextField",
                StyleAttributes {
                    font_color: color(ColorRole::BlackPrimaryText)?,
                    background_color: color(ColorRole::White)?,
                    tint_color: color(ColorRole::BlackSecondaryText)?,
                    corner_radius: Some(8.0),
                    bar_tint_color: color(ColorRole::Primary)?,
                    ..StyleAttributes::default()
                },
            ),
            StyleDefinition::new(
                "SearchSearchTextFieldIcon",
                StyleAttributes {
                    tint_color: color(ColorRole::BlackSecondaryText)?,
                    coloring: Some(ColoringMode::Black),
                    color: color(ColorRole::BlackSecondaryText)?,
                    ..StyleAttributes::default()
                },
            ),
            StyleDefinition::new(
                "SearchDatePickerField",
                StyleAttributes {
                    background_color: color(ColorRole::White)?,
                    corner_radius: Some(4.0),
                    border_color: color(ColorRole::SolidDividers)?,
                    border_width: Some(1.0),
                    ..StyleAttributes::default()
                },
            ),
            StyleDefinition::based_on(
                "SearchCellAvaliable",
                "TableCell",
                StyleAttributes {
                    background_color: color(ColorRole::TransparentGreen)?,
                    ..StyleAttributes::default()
                },
            ),
            StyleDefinition::new(
                "DatePickerView",
                StyleAttributes {
                    background_color: color(ColorRole::White)?,
                    font_color: color(ColorRole::BlackPrimaryText)?,
                    font_color_selected: color(ColorRole::WhitePrimaryText)?,
                    background_color_selected: color(ColorRole::LinkBlue)?,
                    background_color_highlighted: color(ColorRole::LinkBlueHighlighted)?,
                    font_color_disabled: color(ColorRole::BlackSecondaryText)?,
                    ..StyleAttributes::default()
                },
            ),
            StyleDefinition::new(
                "BookingDateField",
                StyleAttributes {
                    background_color: color(ColorRole::White)?,
                    corner_radius: Some(4.0),
                    border_color: color(ColorRole::BlackDividers)?,
                    border_width: Some(1.0),
                    ..StyleAttributes::default()
                },
            ),
            StyleDefinition::based_on(
                "BookingDatePickerCancel",
                "FlatNormalTransButton",
                StyleAttributes {
                    font: font(FontRole::Regular16)?,
                    ..StyleAttributes::default()
                },
            ),
            StyleDefinition::based_on(
                "BookingDatePickerDone",
                "FlatNormalTransButton",
                StyleAttributes {
                    font: font(FontRole::Semibold16)?,
                    ..StyleAttributes::default()
                },
            ),
            StyleDefinition::new(
                "ValueStepperView",
                StyleAttributes {
                    font: font(FontRole::Regular16)?,
                    font_color: color(ColorRole::BlackPrimaryText)?,
                    coloring: Some(ColoringMode::Blue),
                    ..StyleAttributes::default()
                },
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_definition_count() {
        let definitions = SearchStyleSheet
            .definitions(&ColorPalette::day(), &FontPalette::system())
            .unwrap();
        assert_eq!(definitions.len(), 17);
    }

    #[test]
    fn test_missing_font_reported() {
        let result = SearchStyleSheet.definitions(&ColorPalette::day(), &FontPalette::new());
        assert!(matches!(
            result,
            Err(mapstyle_theme::ThemeError::MissingFont(role)) if role == "medium12"
        ));
    }
}
