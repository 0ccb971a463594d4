// SPDX-License-Identifier: LGPL-3.0-only

//! Role definitions.
//!
//! Roles are the symbolic names style sheets use to look up concrete values
//! in a palette. Each role type lives in its own file.

mod color;
mod coloring;
mod font;

pub use color::ColorRole;
pub use coloring::ColoringMode;
pub use font::FontRole;

/// Implements string conversion and enumeration for role enums.
///
/// Generates `ALL`, `as_str()` and `from_str()`. The string form is the
/// camelCase key used in palette files.
#[macro_export]
macro_rules! impl_role_string_conversion {
    ($enum_name:ident, { $($variant:ident => $str:literal),* $(,)? }) => {
        impl $enum_name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)*];

            /// Get the string representation of the role (for TOML keys).
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)*
                }
            }

            /// Parse a role from a string (for TOML parsing).
            pub fn from_str(s: &str) -> Option<Self> {
                match s {
                    $($str => Some(Self::$variant),)*
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}
