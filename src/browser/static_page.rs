use crate::{browser::PageRenderer,
            error::{InspectorError, Result}};
use scraper::{ElementRef, Html};
use std::collections::HashMap;

/// Page renderer serving HTML held in memory
///
/// Useful for inspecting saved pages without a browser. Documents are
/// registered per URL; a fallback document, when set, answers any URL.
#[derive(Debug, Clone, Default)]
pub struct StaticPage {
    pages: HashMap<String, String>,
    fallback: Option<String>,
    current: Option<String>,
}

impl StaticPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `html` for every URL
    pub fn from_document(html: impl Into<String>) -> Self {
        Self {
            fallback: Some(html.into()),
            ..Self::default()
        }
    }

    /// Builder method: serve `html` at `url`
    pub fn with_page(mut self, url: impl Into<String>, html: impl Into<String>) -> Self {
        self.pages.insert(url.into(), html.into());
        self
    }

    fn document_for(&self, url: &str) -> Option<&str> {
        self.pages
            .get(url)
            .map(String::as_str)
            .or(self.fallback.as_deref())
    }
}

impl PageRenderer for StaticPage {
    fn load(&mut self, url: &str) -> Result<()> {
        if self.document_for(url).is_none() {
            return Err(InspectorError::NavigationFailed(format!("No document for {}", url)));
        }
        self.current = Some(url.to_string());
        Ok(())
    }

    fn body_markup(&self) -> Result<String> {
        let document = self
            .current
            .as_deref()
            .and_then(|url| self.document_for(url))
            .ok_or_else(|| InspectorError::EvaluationFailed("No page loaded".to_string()))?;

        Ok(body_inner_html(document))
    }

    fn current_url(&self) -> Option<String> {
        self.current.clone()
    }
}

/// What `document.body.innerHTML` would return for this document
fn body_inner_html(document: &str) -> String {
    let parsed = Html::parse_document(document);
    parsed
        .root_element()
        .children()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "body")
        .map(|body| body.inner_html())
        .unwrap_or_default()
}
