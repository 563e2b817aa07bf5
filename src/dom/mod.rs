//! HTML transformation module
//!
//! Everything here works on a markup string and parses it on demand:
//! - render: page text with tables turned into pipe tables
//! - ElementCatalog: every element of the page, addressed by position
//! - TextTable: a single table as rows of cell text

pub mod catalog;
pub mod table;
pub mod text;

pub use catalog::{CatalogEntry, ElementCatalog, catalog};
pub use table::TextTable;
pub use text::render;

use scraper::Html;

/// Parse markup as body content. Never fails; malformed input is repaired
/// the way a browser would repair it.
pub fn parse(html: &str) -> Html {
    let fragment = Html::parse_fragment(html);
    if !fragment.errors.is_empty() {
        log::debug!("Recovered from {} parse errors", fragment.errors.len());
    }
    fragment
}
