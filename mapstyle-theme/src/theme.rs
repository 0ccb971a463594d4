// SPDX-License-Identifier: LGPL-3.0-only

//! The theme registry.
//!
//! A [Theme] owns the table from style name to [StyleEntry] for one
//! appearance variant. Style sheets fill it through [Theme::add]; renderers
//! read it through [Theme::get] or, with base styles applied,
//! [Theme::resolve].

use indexmap::IndexMap;

use crate::error::{ThemeError, ThemeResult};
use crate::sheet::StyleDefinition;
use crate::style::StyleAttributes;

/// The appearance variant a theme is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeVariant {
    /// Light surfaces, dark text.
    #[default]
    Day,
    /// Dark surfaces, light text.
    Night,
}

impl ThemeVariant {
    /// Get the lowercase name of the variant.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeVariant::Day => "day",
            ThemeVariant::Night => "night",
        }
    }

    /// Parse a variant name. `light`/`dark` are accepted as aliases.
    pub fn from_str(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "day" | "light" => Some(ThemeVariant::Day),
            "night" | "dark" => Some(ThemeVariant::Night),
            _ => None,
        }
    }
}

/// A registered style: its attributes and optional base style name.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleEntry {
    base: Option<String>,
    attributes: StyleAttributes,
}

impl StyleEntry {
    /// Name of the style this one is layered over, if any.
    pub fn base(&self) -> Option<&str> {
        self.base.as_deref()
    }

    /// The attributes declared for this style, without base styles applied.
    pub fn attributes(&self) -> &StyleAttributes {
        &self.attributes
    }
}

/// Registry of named styles for one appearance variant.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    variant: ThemeVariant,
    styles: IndexMap<String, StyleEntry>,
}

impl Theme {
    /// Create an empty theme for the given variant.
    pub fn new(variant: ThemeVariant) -> Self {
        Self {
            variant,
            styles: IndexMap::new(),
        }
    }

    /// The variant this theme was built for.
    pub fn variant(&self) -> ThemeVariant {
        self.variant
    }

    /// Register a style.
    ///
    /// Re-registering a name replaces its entry and keeps its position.
    pub fn add(&mut self, name: impl Into<String>, base: Option<&str>, attributes: StyleAttributes) {
        let name = name.into();
        let entry = StyleEntry {
            base: base.map(str::to_string),
            attributes,
        };
        if let Some(previous) = self.styles.insert(name.clone(), entry) {
            if previous != self.styles[&name] {
                log::debug!("Style '{}' replaced with different attributes", name);
            }
        }
    }

    /// Register a style from its declarative definition.
    pub fn add_definition(&mut self, definition: StyleDefinition) {
        let StyleDefinition {
            name,
            base,
            attributes,
        } = definition;
        self.add(name, base.as_deref(), attributes);
    }

    /// Get the registered entry for a style.
    pub fn get(&self, name: &str) -> Option<&StyleEntry> {
        self.styles.get(name)
    }

    /// Get the base style name declared for a style.
    pub fn base_of(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(StyleEntry::base)
    }

    /// Check whether a style is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    /// Registered style names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.styles.keys().map(String::as_str)
    }

    /// Number of registered styles.
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Whether no style is registered.
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Resolve a style with all of its base styles layered underneath.
    pub fn resolve(&self, name: &str) -> ThemeResult<StyleAttributes> {
        let chain = self.base_chain(name)?;
        // Apply from the root base outwards so the named style wins.
        Ok(chain
            .iter()
            .rev()
            .fold(StyleAttributes::default(), |resolved, entry| {
                entry.attributes.layered_over(&resolved)
            }))
    }

    /// Check that every registered style resolves.
    pub fn validate(&self) -> ThemeResult<()> {
        for name in self.styles.keys() {
            self.base_chain(name)?;
        }
        Ok(())
    }

    /// Entries from `name` up to its root base, in that order.
    fn base_chain(&self, name: &str) -> ThemeResult<Vec<&StyleEntry>> {
        let mut entry = self
            .get(name)
            .ok_or_else(|| ThemeError::UnknownStyle(name.to_string()))?;
        let mut path = vec![name.to_string()];
        let mut chain = vec![entry];

        while let Some(base) = entry.base() {
            if path.iter().any(|visited| visited == base) {
                path.push(base.to_string());
                return Err(ThemeError::CycleDetected { path });
            }
            entry = self.get(base).ok_or_else(|| ThemeError::UnresolvedBase {
                style: path.last().cloned().unwrap_or_default(),
                base: base.to_string(),
            })?;
            path.push(base.to_string());
            chain.push(entry);
        }

        Ok(chain)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(ThemeVariant::default())
    }
}
