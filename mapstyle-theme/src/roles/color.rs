// SPDX-License-Identifier: LGPL-3.0-only

//! Color roles shared by every style sheet.

/// Color roles for palette colors.
///
/// These name semantic purposes, not concrete values; the same role maps to
/// different colors in the day and night palettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRole {
    // Brand
    Primary,
    PrimaryDark,
    PrimaryLight,

    // Surfaces
    Background,
    White,
    PressBackground,
    SearchPromoBackground,
    Clear,

    // Text on dark surfaces
    WhitePrimaryText,
    WhiteSecondaryText,
    WhiteHintText,

    // Text on light surfaces
    BlackPrimaryText,
    BlackSecondaryText,
    BlackHintText,

    // Separators
    BlackDividers,
    SolidDividers,
    Border,

    // Links
    LinkBlue,
    LinkBlueHighlighted,
    LinkBlueDark,

    // Status
    ButtonRed,
    Red,
    RatingGreen,
    TransparentGreen,
}

crate::impl_role_string_conversion!(ColorRole, {
    Primary => "primary",
    PrimaryDark => "primaryDark",
    PrimaryLight => "primaryLight",
    Background => "background",
    White => "white",
    PressBackground => "pressBackground",
    SearchPromoBackground => "searchPromoBackground",
    Clear => "clear",
    WhitePrimaryText => "whitePrimaryText",
    WhiteSecondaryText => "whiteSecondaryText",
    WhiteHintText => "whiteHintText",
    BlackPrimaryText => "blackPrimaryText",
    BlackSecondaryText => "blackSecondaryText",
    BlackHintText => "blackHintText",
    BlackDividers => "blackDividers",
    SolidDividers => "solidDividers",
    Border => "border",
    LinkBlue => "linkBlue",
    LinkBlueHighlighted => "linkBlueHighlighted",
    LinkBlueDark => "linkBlueDark",
    ButtonRed => "buttonRed",
    Red => "red",
    RatingGreen => "ratingGreen",
    TransparentGreen => "transparentGreen",
});
