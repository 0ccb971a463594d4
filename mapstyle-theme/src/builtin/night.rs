// SPDX-License-Identifier: LGPL-3.0-only

//! Night color palette.

use super::{set_clear, set_color_alpha, set_color_rgb};
use crate::palette::ColorPalette;
use crate::roles::ColorRole;

impl ColorPalette {
    /// The built-in night palette: light text on dark surfaces.
    ///
    /// "White" and "black" roles keep their names and swap their meaning, so
    /// style sheets stay identical across variants.
    pub fn night() -> Self {
        let mut palette = ColorPalette::new();

        // Brand
        set_color_rgb(&mut palette, ColorRole::Primary, 25, 30, 35);
        set_color_rgb(&mut palette, ColorRole::PrimaryDark, 12, 16, 20);
        set_color_rgb(&mut palette, ColorRole::PrimaryLight, 45, 50, 55);

        // Surfaces
        set_color_rgb(&mut palette, ColorRole::Background, 33, 38, 43);
        set_color_rgb(&mut palette, ColorRole::White, 60, 64, 68);
        set_color_rgb(&mut palette, ColorRole::PressBackground, 50, 54, 58);
        set_color_rgb(&mut palette, ColorRole::SearchPromoBackground, 71, 76, 82);
        set_clear(&mut palette, ColorRole::Clear);

        // Text on dark surfaces
        set_color_alpha(&mut palette, ColorRole::WhitePrimaryText, 255, 255, 255, 0.87);
        set_color_alpha(&mut palette, ColorRole::WhiteSecondaryText, 255, 255, 255, 0.7);
        set_color_alpha(&mut palette, ColorRole::WhiteHintText, 255, 255, 255, 0.3);

        // Text on light surfaces
        set_color_alpha(&mut palette, ColorRole::BlackPrimaryText, 255, 255, 255, 0.9);
        set_color_alpha(&mut palette, ColorRole::BlackSecondaryText, 255, 255, 255, 0.7);
        set_color_alpha(&mut palette, ColorRole::BlackHintText, 255, 255, 255, 0.3);

        // Separators
        set_color_alpha(&mut palette, ColorRole::BlackDividers, 255, 255, 255, 0.12);
        set_color_rgb(&mut palette, ColorRole::SolidDividers, 80, 84, 88);
        set_color_alpha(&mut palette, ColorRole::Border, 255, 255, 255, 0.06);

        // Links
        set_color_rgb(&mut palette, ColorRole::LinkBlue, 255, 177, 0);
        set_color_alpha(&mut palette, ColorRole::LinkBlueHighlighted, 255, 177, 0, 0.3);
        set_color_rgb(&mut palette, ColorRole::LinkBlueDark, 200, 138, 0);

        // Status
        set_color_rgb(&mut palette, ColorRole::ButtonRed, 184, 36, 36);
        set_color_rgb(&mut palette, ColorRole::Red, 230, 70, 70);
        set_color_rgb(&mut palette, ColorRole::RatingGreen, 61, 153, 61);
        set_color_alpha(&mut palette, ColorRole::TransparentGreen, 61, 153, 61, 0.2);

        palette
    }
}
