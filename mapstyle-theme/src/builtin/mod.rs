// SPDX-License-Identifier: LGPL-3.0-only

//! Built-in palettes.
//!
//! The day and night color palettes and the system font palette each define
//! every role, so any style sheet can register against them. Translucent
//! colors use `rgb_alpha(r, g, b, alpha)`; in palette files they are written
//! as 8-character hex strings (`#rrggbbaa`).

mod day;
mod fonts;
mod night;

use super::palette::ColorPalette;
use super::roles::ColorRole;
use super::util::{rgb8, rgb_alpha, rgba8};

/// Helper to set an opaque color from RGB components.
pub(crate) fn set_color_rgb(palette: &mut ColorPalette, role: ColorRole, r: u8, g: u8, b: u8) {
    palette.set(role, rgb8(r, g, b));
}

/// Helper to set a color from RGB components and a fractional alpha.
pub(crate) fn set_color_alpha(
    palette: &mut ColorPalette,
    role: ColorRole,
    r: u8,
    g: u8,
    b: u8,
    alpha: f32,
) {
    palette.set(role, rgb_alpha(r, g, b, alpha));
}

/// Helper to set a role to fully transparent black.
pub(crate) fn set_clear(palette: &mut ColorPalette, role: ColorRole) {
    palette.set(role, rgba8(0, 0, 0, 0));
}
