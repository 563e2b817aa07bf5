use crate::dom::{self, ElementCatalog};

/// Everything derived from one page load
///
/// Built from a single markup snapshot and swapped into the shell as a
/// whole, so the text and the catalog always describe the same page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageSession {
    url: Option<String>,
    context_text: String,
    catalog: ElementCatalog,
}

impl PageSession {
    /// A session with no page loaded
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_markup(url: Option<String>, markup: &str) -> Self {
        let context_text = dom::render(markup);
        let catalog = dom::catalog(markup);

        Self { url, context_text, catalog }
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Page text used as chat context
    pub fn context_text(&self) -> &str {
        &self.context_text
    }

    pub fn catalog(&self) -> &ElementCatalog {
        &self.catalog
    }

    pub fn is_loaded(&self) -> bool {
        self.url.is_some() || !self.catalog.is_empty() || !self.context_text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_markup() {
        let session = PageSession::from_markup(
            Some("https://example.com/".to_string()),
            "<h1 id=\"t\">Title</h1><table><tr><th>k</th></tr><tr><td>v</td></tr></table>",
        );

        assert_eq!(session.url(), Some("https://example.com/"));
        assert_eq!(session.context_text(), "Title\n| k |\n| --- |\n| v |");
        assert_eq!(session.catalog().get(0).unwrap().label, "<h1 id=\"t\">");
        assert!(session.is_loaded());
    }

    #[test]
    fn test_empty() {
        let session = PageSession::empty();
        assert!(!session.is_loaded());
        assert!(session.catalog().is_empty());
        assert_eq!(session.context_text(), "");
    }
}
