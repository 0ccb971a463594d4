// SPDX-License-Identifier: LGPL-3.0-only

//! Font roles, named by weight and point size.

/// Font roles for palette fonts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontRole {
    Regular12,
    Regular14,
    Regular16,
    Regular17,
    Medium12,
    Medium14,
    Medium16,
    Semibold12,
    Semibold14,
    Semibold16,
    Bold16,
    Light12,
}

crate::impl_role_string_conversion!(FontRole, {
    Regular12 => "regular12",
    Regular14 => "regular14",
    Regular16 => "regular16",
    Regular17 => "regular17",
    Medium12 => "medium12",
    Medium14 => "medium14",
    Medium16 => "medium16",
    Semibold12 => "semibold12",
    Semibold14 => "semibold14",
    Semibold16 => "semibold16",
    Bold16 => "bold16",
    Light12 => "light12",
});
