// SPDX-License-Identifier: LGPL-3.0-only

//! # Style Attributes
//!
//! A [StyleAttributes] value is the record a style sheet registers under a
//! style name. Every property is optional: an unset property means "inherit
//! from the base style, or let the widget use its own default".
//!
//! Style sheets build these as plain struct literals:
//!
//! ```rust
//! use mapstyle_theme::style::StyleAttributes;
//!
//! let attributes = StyleAttributes {
//!     corner_radius: Some(4.0),
//!     border_width: Some(1.0),
//!     ..StyleAttributes::default()
//! };
//! assert!(!attributes.is_empty());
//! ```
//!
//! ## Layering
//!
//! [StyleAttributes::layered_over] combines a style with its base: every
//! property set on the child wins, every property left unset falls through
//! to the base.

use nalgebra::Vector2;
use vello::peniko::Color;

use crate::font::Font;
use crate::roles::ColoringMode;

/// The visual properties a style may set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleAttributes {
    /// Corner radius in points.
    pub corner_radius: Option<f32>,
    /// Whether content is clipped to the bounds (and corner radius).
    pub clip: Option<bool>,
    /// Title or text font.
    pub font: Option<Font>,
    /// Text color.
    pub font_color: Option<Color>,
    /// Text color in the selected state.
    pub font_color_selected: Option<Color>,
    /// Text color in the highlighted (pressed) state.
    pub font_color_highlighted: Option<Color>,
    /// Text color in the disabled state.
    pub font_color_disabled: Option<Color>,
    /// Background color.
    pub background_color: Option<Color>,
    /// Background color in the selected state.
    pub background_color_selected: Option<Color>,
    /// Background color in the highlighted (pressed) state.
    pub background_color_highlighted: Option<Color>,
    /// Border color.
    pub border_color: Option<Color>,
    /// Border width in points.
    pub border_width: Option<f32>,
    /// Tint applied to templated images and cursors.
    pub tint_color: Option<Color>,
    /// Tint of navigation and search bars.
    pub bar_tint_color: Option<Color>,
    /// Generic foreground color for image-only widgets.
    pub color: Option<Color>,
    /// Shadow blur radius in points.
    pub shadow_radius: Option<f32>,
    /// Shadow color.
    pub shadow_color: Option<Color>,
    /// Shadow opacity, `0.0..=1.0`.
    pub shadow_opacity: Option<f32>,
    /// Shadow offset in points.
    pub shadow_offset: Option<Vector2<f32>>,
    /// How icons and titles are tinted.
    pub coloring: Option<ColoringMode>,
}

macro_rules! layer_fields {
    ($child:expr, $base:expr, { $($field:ident),* $(,)? }) => {
        StyleAttributes {
            $($field: $child.$field.or($base.$field),)*
        }
    };
}

impl StyleAttributes {
    /// Create a style with no properties set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no property is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Layer `self` over `base`: properties set on `self` win.
    pub fn layered_over(&self, base: &StyleAttributes) -> StyleAttributes {
        layer_fields!(self, base, {
            corner_radius,
            clip,
            font,
            font_color,
            font_color_selected,
            font_color_highlighted,
            font_color_disabled,
            background_color,
            background_color_selected,
            background_color_highlighted,
            border_color,
            border_width,
            tint_color,
            bar_tint_color,
            color,
            shadow_radius,
            shadow_color,
            shadow_opacity,
            shadow_offset,
            coloring,
        })
    }
}
