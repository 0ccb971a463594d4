// SPDX-License-Identifier: LGPL-3.0-only

//! Day color palette.

use super::{set_clear, set_color_alpha, set_color_rgb};
use crate::palette::ColorPalette;
use crate::roles::ColorRole;

impl ColorPalette {
    /// The built-in day palette: dark text on light surfaces.
    pub fn day() -> Self {
        let mut palette = ColorPalette::new();

        // Brand
        set_color_rgb(&mut palette, ColorRole::Primary, 30, 150, 240);
        set_color_rgb(&mut palette, ColorRole::PrimaryDark, 24, 128, 212);
        set_color_rgb(&mut palette, ColorRole::PrimaryLight, 69, 181, 255);

        // Surfaces
        set_color_rgb(&mut palette, ColorRole::Background, 238, 238, 238);
        set_color_rgb(&mut palette, ColorRole::White, 255, 255, 255);
        set_color_rgb(&mut palette, ColorRole::PressBackground, 217, 217, 217);
        set_color_rgb(&mut palette, ColorRole::SearchPromoBackground, 209, 242, 230);
        set_clear(&mut palette, ColorRole::Clear);

        // Text on dark surfaces
        set_color_rgb(&mut palette, ColorRole::WhitePrimaryText, 255, 255, 255);
        set_color_alpha(&mut palette, ColorRole::WhiteSecondaryText, 255, 255, 255, 0.54);
        set_color_alpha(&mut palette, ColorRole::WhiteHintText, 255, 255, 255, 0.3);

        // Text on light surfaces
        set_color_alpha(&mut palette, ColorRole::BlackPrimaryText, 0, 0, 0, 0.87);
        set_color_alpha(&mut palette, ColorRole::BlackSecondaryText, 0, 0, 0, 0.54);
        set_color_alpha(&mut palette, ColorRole::BlackHintText, 0, 0, 0, 0.26);

        // Separators
        set_color_alpha(&mut palette, ColorRole::BlackDividers, 0, 0, 0, 0.12);
        set_color_rgb(&mut palette, ColorRole::SolidDividers, 224, 224, 224);
        set_color_alpha(&mut palette, ColorRole::Border, 0, 0, 0, 0.04);

        // Links
        set_color_rgb(&mut palette, ColorRole::LinkBlue, 30, 150, 240);
        set_color_alpha(&mut palette, ColorRole::LinkBlueHighlighted, 30, 150, 240, 0.3);
        set_color_rgb(&mut palette, ColorRole::LinkBlueDark, 25, 118, 210);

        // Status
        set_color_rgb(&mut palette, ColorRole::ButtonRed, 244, 67, 54);
        set_color_rgb(&mut palette, ColorRole::Red, 230, 21, 21);
        set_color_rgb(&mut palette, ColorRole::RatingGreen, 51, 204, 51);
        set_color_alpha(&mut palette, ColorRole::TransparentGreen, 233, 244, 233, 0.7);

        palette
    }
}
