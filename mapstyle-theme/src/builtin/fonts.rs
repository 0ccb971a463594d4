// SPDX-License-Identifier: LGPL-3.0-only

//! System font palette.

use crate::font::Font;
use crate::palette::FontPalette;
use crate::roles::FontRole;

impl FontPalette {
    /// The built-in font palette; each role maps to the size and weight in its name.
    pub fn system() -> Self {
        FontPalette::from_fonts([
            (FontRole::Regular12, Font::regular(12.0)),
            (FontRole::Regular14, Font::regular(14.0)),
            (FontRole::Regular16, Font::regular(16.0)),
            (FontRole::Regular17, Font::regular(17.0)),
            (FontRole::Medium12, Font::medium(12.0)),
            (FontRole::Medium14, Font::medium(14.0)),
            (FontRole::Medium16, Font::medium(16.0)),
            (FontRole::Semibold12, Font::semibold(12.0)),
            (FontRole::Semibold14, Font::semibold(14.0)),
            (FontRole::Semibold16, Font::semibold(16.0)),
            (FontRole::Bold16, Font::bold(16.0)),
            (FontRole::Light12, Font::light(12.0)),
        ])
    }
}
