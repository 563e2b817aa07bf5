use crate::dom::parse;
use scraper::ElementRef;
use serde::{Deserialize, Serialize};

/// One element of the page as shown in the tag list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogEntry {
    /// Display label, e.g. `<div id="main">`
    pub label: String,

    /// Serialized markup of the element and its whole subtree
    pub raw_html: String,

    /// Element's tag name
    pub tag_name: String,

    /// Element's ID attribute (if any)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl CatalogEntry {
    /// Create an entry for a tag; the label is derived from the tag name
    pub fn new(tag_name: impl Into<String>, raw_html: impl Into<String>) -> Self {
        let tag_name = tag_name.into();
        Self {
            label: format!("<{}>", tag_name),
            raw_html: raw_html.into(),
            tag_name,
            id: None,
        }
    }

    /// Builder method: set ID. Empty IDs are treated as absent.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        let id = id.into();
        if id.is_empty() {
            return self;
        }
        self.label = format!("<{} id=\"{}\">", self.tag_name, id);
        self.id = Some(id);
        self
    }

    fn from_element(element: ElementRef<'_>) -> Self {
        let value = element.value();
        let entry = Self::new(value.name(), element.html());
        match value.id() {
            Some(id) => entry.with_id(id),
            None => entry,
        }
    }
}

/// Every element of a page in pre-order, addressed by position
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementCatalog {
    entries: Vec<CatalogEntry>,
}

impl ElementCatalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the catalog for a piece of markup
    ///
    /// Entry `i` is the `i`-th element met in a pre-order walk of the parsed
    /// markup. The parser's synthetic root is not part of the input and is
    /// left out.
    pub fn from_markup(html: &str) -> Self {
        let fragment = parse(html);
        let mut catalog = Self::new();

        for element in fragment
            .root_element()
            .descendants()
            .skip(1)
            .filter_map(ElementRef::wrap)
        {
            catalog.register(CatalogEntry::from_element(element));
        }

        log::debug!("Catalogued {} elements", catalog.len());
        catalog
    }

    /// Append an entry and return its position
    pub fn register(&mut self, entry: CatalogEntry) -> usize {
        self.entries.push(entry);
        self.entries.len() - 1
    }

    /// Get entry by position
    pub fn get(&self, position: usize) -> Option<&CatalogEntry> {
        self.entries.get(position)
    }

    /// Get entry by a possibly out-of-range position (negative included)
    pub fn lookup(&self, position: i64) -> Option<&CatalogEntry> {
        usize::try_from(position).ok().and_then(|p| self.get(p))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    /// All display labels, in position order
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.label.as_str())
    }

    /// Find the first position carrying an element ID
    pub fn find_by_id(&self, id: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| e.id.as_deref() == Some(id))
    }

    /// Export to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.entries)
    }
}

/// Catalog every element of `html` in document order
pub fn catalog(html: &str) -> ElementCatalog {
    ElementCatalog::from_markup(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_div_with_span() {
        let catalog = catalog(r#"<div id="x"><span>hi</span></div>"#);

        assert_eq!(catalog.len(), 2);
        let div = catalog.get(0).unwrap();
        assert_eq!(div.label, r#"<div id="x">"#);
        assert_eq!(div.raw_html, r#"<div id="x"><span>hi</span></div>"#);

        let span = catalog.get(1).unwrap();
        assert_eq!(span.label, "<span>");
        assert_eq!(span.raw_html, "<span>hi</span>");
    }

    #[test]
    fn test_pre_order() {
        let catalog = catalog(
            "<header><nav><a href='/'>Home</a></nav></header><main><p>One</p><p>Two</p></main>",
        );

        let tags: Vec<&str> = catalog.iter().map(|e| e.tag_name.as_str()).collect();
        assert_eq!(tags, vec!["header", "nav", "a", "main", "p", "p"]);
    }

    #[test]
    fn test_implied_tbody_is_catalogued() {
        // Entries describe the parsed tree, which carries the implied tbody
        let catalog = catalog("<table><tr><td>1</td></tr></table>");

        let labels: Vec<&str> = catalog.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["<table>", "<tbody>", "<tr>", "<td>"]);
        assert_eq!(
            catalog.get(0).unwrap().raw_html,
            "<table><tbody><tr><td>1</td></tr></tbody></table>"
        );
    }

    #[test]
    fn test_raw_html_keeps_every_attribute() {
        let catalog = catalog(r#"<a id="home" class="nav link" href="/index.html">Home</a>"#);

        let entry = catalog.get(0).unwrap();
        assert_eq!(entry.label, r#"<a id="home">"#);
        assert!(entry.raw_html.contains(r#"class="nav link""#));
        assert!(entry.raw_html.contains(r#"href="/index.html""#));
    }

    #[test]
    fn test_empty_id_is_ignored() {
        let catalog = catalog(r#"<p id="">text</p>"#);
        assert_eq!(catalog.get(0).unwrap().label, "<p>");
        assert_eq!(catalog.get(0).unwrap().id, None);
    }

    #[test]
    fn test_text_only_input_has_no_entries() {
        assert!(catalog("no markup here").is_empty());
        assert!(catalog("").is_empty());
    }

    #[test]
    fn test_lookup_out_of_range() {
        let catalog = catalog("<p>a</p><p>b</p>");

        assert!(catalog.lookup(-1).is_none());
        assert!(catalog.lookup(2).is_none());
        assert!(catalog.lookup(i64::MAX).is_none());
        assert_eq!(catalog.lookup(1).unwrap().raw_html, "<p>b</p>");
    }

    #[test]
    fn test_find_by_id() {
        let catalog = catalog(r#"<div><p id="first">1</p><p id="second">2</p></div>"#);

        assert_eq!(catalog.find_by_id("second"), Some(2));
        assert_eq!(catalog.find_by_id("missing"), None);
    }

    #[test]
    fn test_catalog_is_repeatable() {
        let html = r#"<ul id="list"><li>a</li><li class="b">b</li></ul>"#;
        assert_eq!(catalog(html), catalog(html));
    }

    #[test]
    fn test_entry_builder() {
        let entry = CatalogEntry::new("button", "<button id=\"go\">Go</button>").with_id("go");

        assert_eq!(entry.label, "<button id=\"go\">");
        assert_eq!(entry.id, Some("go".to_string()));
    }

    #[test]
    fn test_to_json() {
        let catalog = catalog(r#"<section id="intro"><h2>Hi</h2></section>"#);

        let json = catalog.to_json().unwrap();
        assert!(json.contains("\"tag_name\": \"section\""));
        assert!(json.contains("\"id\": \"intro\""));
        assert!(json.contains("\"h2\""));
    }
}
