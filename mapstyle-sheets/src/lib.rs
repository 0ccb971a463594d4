// SPDX-License-Identifier: LGPL-3.0-only

#![warn(missing_docs)]

//! Style sheets for the map and search UI.
//!
//! Each sheet is a fixed table of named styles built from the color and font
//! palettes. [GlobalStyleSheet] defines the shared base styles other sheets
//! are layered over, so it is registered first.

mod global;
mod search;

pub use global::GlobalStyleSheet;
pub use search::SearchStyleSheet;

use mapstyle_theme::sheet::SharedStyleSheet;

/// Every sheet, in registration order.
pub fn all() -> Vec<SharedStyleSheet> {
    vec![Box::new(GlobalStyleSheet), Box::new(SearchStyleSheet)]
}
