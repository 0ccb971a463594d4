// SPDX-License-Identifier: LGPL-3.0-only

//! Errors raised while building palettes and themes.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading palettes or registering and resolving styles.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// A color role was looked up but the palette does not define it.
    #[error("Color palette has no value for role: {0}")]
    MissingColor(String),

    /// A font role was looked up but the palette does not define it.
    #[error("Font palette has no value for role: {0}")]
    MissingFont(String),

    /// No style is registered under the requested name.
    #[error("Unknown style: {0}")]
    UnknownStyle(String),

    /// A style names a base style that is not registered.
    #[error("Style '{style}' is based on unregistered style '{base}'")]
    UnresolvedBase {
        /// The style declaring the base.
        style: String,
        /// The missing base style.
        base: String,
    },

    /// Base styles form a cycle.
    #[error("Cycle detected in style bases: {}", path.join(" -> "))]
    CycleDetected {
        /// The chain of style names, ending with the repeated name.
        path: Vec<String>,
    },

    /// Invalid color format.
    #[error("Invalid color format: {0}")]
    InvalidColor(String),

    /// Invalid font weight name.
    #[error("Invalid font weight: {0}")]
    InvalidFontWeight(String),

    /// Failed to read a palette or config file.
    #[error("Failed to read file {0}: {1}")]
    ReadError(PathBuf, std::io::Error),

    /// Failed to parse a palette or config file.
    #[error("Failed to parse file {0}: {1}")]
    ParseError(PathBuf, String),
}

/// Result type alias for theme operations.
pub type ThemeResult<T> = Result<T, ThemeError>;
