//! Tests for registering the search style sheet into a theme

use mapstyle_sheets::SearchStyleSheet;
use mapstyle_theme::font::Font;
use mapstyle_theme::loader::{PaletteLoader, Palettes};
use mapstyle_theme::manager::ThemeManager;
use mapstyle_theme::palette::{ColorPalette, FontPalette};
use mapstyle_theme::roles::{ColorRole, ColoringMode, FontRole};
use mapstyle_theme::sheet::{register_all, StyleDefinition, StyleSheet};
use mapstyle_theme::style::StyleAttributes;
use mapstyle_theme::theme::{Theme, ThemeVariant};
use mapstyle_theme::util::{rgb8, rgb_alpha};
use mapstyle_theme::ThemeError;
use nalgebra::Vector2;

const SEARCH_STYLES: [&str; 17] = [
    "SearchInstallButton",
    "SearchBanner",
    "SearchClosedBackground",
    "SearchPopularView",
    "SearchSideAvaliableMarker",
    "SearchBarView",
    "SearchActionBarView",
    "SearchActionBarButton",
    "SearchSearchTextField",
    "SearchSearchTextFieldIcon",
    "SearchDatePickerField",
    "SearchCellAvaliable",
    "DatePickerView",
    "BookingDateField",
    "BookingDatePickerCancel",
    "BookingDatePickerDone",
    "ValueStepperView",
];

fn day_theme() -> Theme {
    let mut theme = Theme::new(ThemeVariant::Day);
    register_all(
        &mut theme,
        &mapstyle_sheets::all(),
        &ColorPalette::day(),
        &FontPalette::system(),
    )
    .unwrap();
    theme
}

fn expected_definitions(colors: &ColorPalette, fonts: &FontPalette) -> Vec<StyleDefinition> {
    let color = |role: ColorRole| Some(colors.color(role).unwrap());
    let font = |role: FontRole| Some(fonts.font(role).unwrap());

    vec![
        StyleDefinition::new(
            "SearchInstallButton",
            StyleAttributes {
                corner_radius: Some(10.0),
                clip: Some(true),
                font: font(FontRole::Medium12),
                font_color: color(ColorRole::BlackSecondaryText),
                background_color: color(ColorRole::SearchPromoBackground),
                ..StyleAttributes::default()
            },
        ),
        StyleDefinition::new(
            "SearchBanner",
            StyleAttributes {
                background_color: color(ColorRole::SearchPromoBackground),
                ..StyleAttributes::default()
            },
        ),
        StyleDefinition::new(
            "SearchClosedBackground",
            StyleAttributes {
                corner_radius: Some(4.0),
                background_color: color(ColorRole::BlackHintText),
                ..StyleAttributes::default()
            },
        ),
        StyleDefinition::new(
            "SearchPopularView",
            StyleAttributes {
                corner_radius: Some(10.0),
                background_color: color(ColorRole::LinkBlueHighlighted),
                ..StyleAttributes::default()
            },
        ),
        StyleDefinition::new(
            "SearchSideAvaliableMarker",
            StyleAttributes {
                background_color: color(ColorRole::RatingGreen),
                ..StyleAttributes::default()
            },
        ),
        StyleDefinition::new(
            "SearchBarView",
            StyleAttributes {
                background_color: color(ColorRole::Primary),
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
                background_color: color(ColorRole::LinkBlue),
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
                background_color: color(ColorRole::Clear),
                font_color: color(ColorRole::WhitePrimaryText),
                font: font(FontRole::Semibold14),
                coloring: Some(ColoringMode::WhiteText),
                ..StyleAttributes::default()
            },
        ),
        StyleDefinition::new(
            "SearchSearchTextField",
            StyleAttributes {
                font_color: color(ColorRole::BlackPrimaryText),
                background_color: color(ColorRole::White),
                tint_color: color(ColorRole::BlackSecondaryText),
                corner_radius: Some(8.0),
                bar_tint_color: color(ColorRole::Primary),
                ..StyleAttributes::default()
            },
        ),
        StyleDefinition::new(
            "SearchSearchTextFieldIcon",
            StyleAttributes {
                tint_color: color(ColorRole::BlackSecondaryText),
                coloring: Some(ColoringMode::Black),
                color: color(ColorRole::BlackSecondaryText),
                ..StyleAttributes::default()
            },
        ),
        StyleDefinition::new(
            "SearchDatePickerField",
            StyleAttributes {
                background_color: color(ColorRole::White),
                corner_radius: Some(4.0),
                border_color: color(ColorRole::SolidDividers),
                border_width: Some(1.0),
                ..StyleAttributes::default()
            },
        ),
        StyleDefinition::based_on(
            "SearchCellAvaliable",
            "TableCell",
            StyleAttributes {
                background_color: color(ColorRole::TransparentGreen),
                ..StyleAttributes::default()
            },
        ),
        StyleDefinition::new(
            "DatePickerView",
            StyleAttributes {
                background_color: color(ColorRole::White),
                font_color: color(ColorRole::BlackPrimaryText),
                font_color_selected: color(ColorRole::WhitePrimaryText),
                background_color_selected: color(ColorRole::LinkBlue),
                background_color_highlighted: color(ColorRole::LinkBlueHighlighted),
                font_color_disabled: color(ColorRole::BlackSecondaryText),
                ..StyleAttributes::default()
            },
        ),
        StyleDefinition::new(
            "BookingDateField",
            StyleAttributes {
                background_color: color(ColorRole::White),
                corner_radius: Some(4.0),
                border_color: color(ColorRole::BlackDividers),
                border_width: Some(1.0),
                ..StyleAttributes::default()
            },
        ),
        StyleDefinition::based_on(
            "BookingDatePickerCancel",
            "FlatNormalTransButton",
            StyleAttributes {
                font: font(FontRole::Regular16),
                ..StyleAttributes::default()
            },
        ),
        StyleDefinition::based_on(
            "BookingDatePickerDone",
            "FlatNormalTransButton",
            StyleAttributes {
                font: font(FontRole::Semibold16),
                ..StyleAttributes::default()
            },
        ),
        StyleDefinition::new(
            "ValueStepperView",
            StyleAttributes {
                font: font(FontRole::Regular16),
                font_color: color(ColorRole::BlackPrimaryText),
                coloring: Some(ColoringMode::Blue),
                ..StyleAttributes::default()
            },
        ),
    ]
}

#[test]
fn test_definitions_match_table_for_both_variants() {
    let fonts = FontPalette::system();
    for colors in [ColorPalette::day(), ColorPalette::night()] {
        let definitions = SearchStyleSheet.definitions(&colors, &fonts).unwrap();
        let expected = expected_definitions(&colors, &fonts);
        for (actual, expected) in definitions.iter().zip(&expected) {
            assert_eq!(actual, expected, "style {}", expected.name);
        }
        assert_eq!(definitions, expected);
    }
}

#[test]
fn test_registered_entries_match_table() {
    let colors = ColorPalette::night();
    let fonts = FontPalette::system();
    let mut theme = Theme::new(ThemeVariant::Night);
    SearchStyleSheet.register(&mut theme, &colors, &fonts).unwrap();

    let expected = expected_definitions(&colors, &fonts);
    assert_eq!(
        theme.names().collect::<Vec<_>>(),
        expected.iter().map(|def| def.name.as_str()).collect::<Vec<_>>()
    );
    for def in &expected {
        let entry = theme.get(&def.name).unwrap();
        assert_eq!(entry.base(), def.base.as_deref(), "base of {}", def.name);
        assert_eq!(entry.attributes(), &def.attributes, "attributes of {}", def.name);
    }
}

#[test]
fn test_registers_every_search_style() {
    let mut theme = Theme::default();
    SearchStyleSheet
        .register(&mut theme, &ColorPalette::day(), &FontPalette::system())
        .unwrap();

    assert_eq!(theme.len(), SEARCH_STYLES.len());
    for name in SEARCH_STYLES {
        assert!(theme.contains(name), "missing style {}", name);
    }
}

#[test]
fn test_base_styles_recorded() {
    let theme = day_theme();
    assert_eq!(theme.base_of("SearchCellAvaliable"), Some("TableCell"));
    assert_eq!(theme.base_of("BookingDatePickerCancel"), Some("FlatNormalTransButton"));
    assert_eq!(theme.base_of("BookingDatePickerDone"), Some("FlatNormalTransButton"));
    assert_eq!(theme.base_of("SearchBarView"), None);
    assert!(theme.validate().is_ok());
}

#[test]
fn test_install_button_example() {
    let overrides = "[Colors]\nprimary = \"#3B4DFF\"\n";
    let palettes =
        PaletteLoader::load_from_toml(overrides, "palette.toml", ThemeVariant::Day).unwrap();

    let mut theme = Theme::default();
    SearchStyleSheet
        .register(&mut theme, &palettes.colors, &palettes.fonts)
        .unwrap();

    let install = theme.get("SearchInstallButton").unwrap().attributes();
    assert_eq!(install.corner_radius, Some(10.0));
    assert_eq!(install.clip, Some(true));
    assert_eq!(install.font, Some(Font::medium(12.0)));
    assert_eq!(
        install.font_color,
        Some(palettes.colors.color(ColorRole::BlackSecondaryText).unwrap())
    );
    assert_eq!(
        install.background_color,
        Some(palettes.colors.color(ColorRole::SearchPromoBackground).unwrap())
    );

    let bar = theme.get("SearchBarView").unwrap().attributes();
    assert_eq!(bar.background_color, Some(rgb8(0x3b, 0x4d, 0xff)));
    assert_eq!(
        theme.get("SearchSearchTextField").unwrap().attributes().bar_tint_color,
        Some(rgb8(0x3b, 0x4d, 0xff))
    );
}

#[test]
fn test_shadow_literals() {
    let theme = day_theme();

    let bar = theme.get("SearchBarView").unwrap().attributes();
    assert_eq!(bar.shadow_radius, Some(2.0));
    assert_eq!(bar.shadow_color, Some(rgb_alpha(0, 0, 0, 0.26)));
    assert_eq!(bar.shadow_opacity, Some(1.0));
    assert_eq!(bar.shadow_offset, Some(Vector2::new(0.0, 0.0)));

    let action = theme.get("SearchActionBarView").unwrap().attributes();
    assert_eq!(action.corner_radius, Some(20.0));
    assert_eq!(action.shadow_radius, Some(1.0));
    assert_eq!(action.shadow_color, Some(rgb_alpha(0, 0, 0, 0.24)));
    assert_eq!(action.shadow_offset, Some(Vector2::new(0.0, 2.0)));
    assert_eq!(action.shadow_opacity, Some(1.0));
}

#[test]
fn test_geometry_literals() {
    let theme = day_theme();
    let attributes = |name: &str| theme.get(name).unwrap().attributes().clone();

    assert_eq!(attributes("SearchClosedBackground").corner_radius, Some(4.0));
    assert_eq!(attributes("SearchPopularView").corner_radius, Some(10.0));
    assert_eq!(attributes("SearchSearchTextField").corner_radius, Some(8.0));

    let date_field = attributes("SearchDatePickerField");
    assert_eq!(date_field.corner_radius, Some(4.0));
    assert_eq!(date_field.border_width, Some(1.0));
    assert_eq!(
        date_field.border_color,
        ColorPalette::day().color(ColorRole::SolidDividers).ok()
    );

    let booking_field = attributes("BookingDateField");
    assert_eq!(booking_field.border_width, Some(1.0));
    assert_eq!(
        booking_field.border_color,
        ColorPalette::day().color(ColorRole::BlackDividers).ok()
    );
}

#[test]
fn test_coloring_modes() {
    let theme = day_theme();
    let coloring = |name: &str| theme.get(name).unwrap().attributes().coloring;

    assert_eq!(coloring("SearchActionBarButton"), Some(ColoringMode::WhiteText));
    assert_eq!(coloring("SearchSearchTextFieldIcon"), Some(ColoringMode::Black));
    assert_eq!(coloring("ValueStepperView"), Some(ColoringMode::Blue));
    assert_eq!(coloring("SearchBanner"), None);
}

#[test]
fn test_text_field_icon_uses_color() {
    let theme = day_theme();
    let icon = theme.get("SearchSearchTextFieldIcon").unwrap().attributes();
    let secondary = ColorPalette::day().color(ColorRole::BlackSecondaryText).ok();
    assert_eq!(icon.color, secondary);
    assert_eq!(icon.tint_color, secondary);
    assert_eq!(icon.font_color, None);
}

#[test]
fn test_date_picker_states() {
    let colors = ColorPalette::day();
    let theme = day_theme();
    let picker = theme.get("DatePickerView").unwrap().attributes();

    assert_eq!(picker.font_color_selected, colors.color(ColorRole::WhitePrimaryText).ok());
    assert_eq!(picker.background_color_selected, colors.color(ColorRole::LinkBlue).ok());
    assert_eq!(
        picker.background_color_highlighted,
        colors.color(ColorRole::LinkBlueHighlighted).ok()
    );
    assert_eq!(
        picker.font_color_disabled,
        colors.color(ColorRole::BlackSecondaryText).ok()
    );
}

#[test]
fn test_resolved_styles_inherit_from_base() {
    let colors = ColorPalette::day();
    let theme = day_theme();

    let done = theme.resolve("BookingDatePickerDone").unwrap();
    assert_eq!(done.font, Some(Font::semibold(16.0)));
    assert_eq!(done.font_color, colors.color(ColorRole::LinkBlue).ok());
    assert_eq!(done.font_color_disabled, colors.color(ColorRole::BlackHintText).ok());

    let cancel = theme.resolve("BookingDatePickerCancel").unwrap();
    assert_eq!(cancel.font, Some(Font::regular(16.0)));
    assert_eq!(cancel.background_color, colors.color(ColorRole::Clear).ok());

    let cell = theme.resolve("SearchCellAvaliable").unwrap();
    assert_eq!(cell.background_color, colors.color(ColorRole::TransparentGreen).ok());
    assert_eq!(cell.font_color, colors.color(ColorRole::BlackPrimaryText).ok());
}

#[test]
fn test_register_twice_is_idempotent() {
    let once = day_theme();

    let mut twice = day_theme();
    SearchStyleSheet
        .register(&mut twice, &ColorPalette::day(), &FontPalette::system())
        .unwrap();

    assert_eq!(twice, once);
}

#[test]
fn test_missing_color_leaves_theme_untouched() {
    let day = ColorPalette::day();
    let colors = ColorPalette::from_colors(
        ColorRole::ALL
            .iter()
            .filter(|role| **role != ColorRole::TransparentGreen)
            .map(|role| (*role, day.color(*role).unwrap())),
    );

    let mut theme = Theme::default();
    let result = SearchStyleSheet.register(&mut theme, &colors, &FontPalette::system());

    assert!(matches!(
        result,
        Err(ThemeError::MissingColor(role)) if role == "transparentGreen"
    ));
    assert!(theme.is_empty());
}

#[test]
fn test_missing_font_leaves_theme_untouched() {
    let fonts = FontPalette::new().with(FontRole::Medium12, Font::medium(12.0));
    let mut theme = day_theme();
    let before = theme.clone();

    let result = SearchStyleSheet.register(&mut theme, &ColorPalette::night(), &fonts);
    assert!(matches!(result, Err(ThemeError::MissingFont(_))));
    assert_eq!(theme, before);
}

#[test]
fn test_manager_builds_both_variants() {
    let day = Palettes::builtin(ThemeVariant::Day);
    let night = Palettes::builtin(ThemeVariant::Night);
    let manager =
        ThemeManager::with_palettes(mapstyle_sheets::all(), ThemeVariant::Night, &day, &night)
            .unwrap();

    let current = manager.current();
    assert_eq!(current.variant(), ThemeVariant::Night);
    assert_eq!(current.len(), SEARCH_STYLES.len() + 2);

    let background = |theme: &Theme| {
        theme
            .get("SearchDatePickerField")
            .unwrap()
            .attributes()
            .background_color
    };
    assert_ne!(
        background(&*current),
        background(&*manager.theme(ThemeVariant::Day))
    );
}

#[test]
fn test_manager_rejects_empty_palettes() {
    let empty = Palettes::default();
    let result =
        ThemeManager::with_palettes(mapstyle_sheets::all(), ThemeVariant::Day, &empty, &empty);
    assert!(matches!(result, Err(ThemeError::MissingColor(_))));
}

#[test]
fn test_search_sheet_alone_fails_validation() {
    let mut theme = Theme::default();
    SearchStyleSheet
        .register(&mut theme, &ColorPalette::day(), &FontPalette::system())
        .unwrap();
    assert!(matches!(
        theme.validate(),
        Err(ThemeError::UnresolvedBase { .. })
    ));
}
