// SPDX-License-Identifier: LGPL-3.0-only

//! Coloring modes for icon and text tinting.

/// How a button or icon applies tint to its image and title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColoringMode {
    /// Leave the image colors untouched.
    #[default]
    Other,
    /// Tint with the link blue.
    Blue,
    /// Tint with the secondary black text color.
    Black,
    /// Tint image and title white.
    White,
    /// Tint only the title white.
    WhiteText,
    /// Tint with a neutral gray.
    Gray,
    /// Tint with the destructive red.
    Red,
}

crate::impl_role_string_conversion!(ColoringMode, {
    Other => "other",
    Blue => "blue",
    Black => "black",
    White => "white",
    WhiteText => "whiteText",
    Gray => "gray",
    Red => "red",
});
