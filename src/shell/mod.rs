//! The presentation shell
//!
//! [`Inspector`] owns the current [`PageSession`], the active [`View`], the
//! inspection panel and the chat log, and wires user actions to the renderer,
//! the HTML transformations and the chat backend. It is single-threaded:
//! every action runs to completion before the next one starts.

pub mod chat_log;
pub mod command;
pub mod page;
pub mod view;

pub use chat_log::{ChatEntry, ChatLog};
pub use command::Command;
pub use page::PageSession;
pub use view::View;

use crate::{browser::PageRenderer,
            chat::ChatBackend,
            error::{InspectorError, Result},
            tools::utils::normalize_url};
use serde::Serialize;

/// The element currently shown in the inspection panel
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Inspection {
    pub position: usize,
    pub label: String,
    pub raw_html: String,
    /// Fragment rendered as markdown
    pub preview: String,
}

pub struct Inspector {
    renderer: Box<dyn PageRenderer>,
    chat: Option<Box<dyn ChatBackend>>,
    page: PageSession,
    view: View,
    inspection: Option<Inspection>,
    chat_log: ChatLog,
}

impl Inspector {
    /// Create a shell around a renderer; without a chat backend questions are
    /// answered with an error entry
    pub fn new(renderer: Box<dyn PageRenderer>, chat: Option<Box<dyn ChatBackend>>) -> Self {
        Self {
            renderer,
            chat,
            page: PageSession::empty(),
            view: View::default(),
            inspection: None,
            chat_log: ChatLog::new(),
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    /// Make `view` the visible panel. Nothing else changes.
    pub fn switch_view(&mut self, view: View) {
        self.view = view;
    }

    pub fn page(&self) -> &PageSession {
        &self.page
    }

    pub fn inspection(&self) -> Option<&Inspection> {
        self.inspection.as_ref()
    }

    pub fn chat_log(&self) -> &ChatLog {
        &self.chat_log
    }

    /// Load an address typed by the user
    ///
    /// Returns the normalized address, or `None` for blank input. On failure
    /// the previous page session stays in place.
    pub fn load_url(&mut self, input: &str) -> Result<Option<String>> {
        if input.trim().is_empty() {
            return Ok(None);
        }

        let url = normalize_url(input);
        self.renderer.load(&url)?;
        let markup = self.renderer.body_markup()?;

        let loaded_url = self.renderer.current_url().unwrap_or_else(|| url.clone());
        self.on_page_loaded(Some(loaded_url), &markup);
        Ok(Some(url))
    }

    /// Install the page derived from `markup`, replacing the previous one
    pub fn on_page_loaded(&mut self, url: Option<String>, markup: &str) {
        let session = PageSession::from_markup(url, markup);
        log::info!(
            "Page ready: {} elements, {} chars of text",
            session.catalog().len(),
            session.context_text().len()
        );

        self.page = session;
        self.inspection = None;
    }

    /// Show the catalog entry at `position` in the inspection panel
    ///
    /// Out-of-range positions, negative ones included, are ignored and leave
    /// the panel as it was.
    pub fn select_element(&mut self, position: i64) -> Option<&Inspection> {
        let Some((index, entry)) = usize::try_from(position)
            .ok()
            .and_then(|p| self.page.catalog().get(p).map(|entry| (p, entry)))
        else {
            log::debug!("Ignoring selection of position {}", position);
            return None;
        };

        let inspection = Inspection {
            position: index,
            label: entry.label.clone(),
            raw_html: entry.raw_html.clone(),
            preview: html2md::parse_html(&entry.raw_html),
        };

        self.inspection = Some(inspection);
        self.inspection.as_ref()
    }

    /// Ask a question about the current page
    ///
    /// Blank input is ignored and `None` is returned. Otherwise the question
    /// and then the answer (or a visible error) are appended to the chat log,
    /// and the last entry is returned.
    pub fn submit_chat(&mut self, input: &str) -> Option<&ChatEntry> {
        let question = input.trim();
        if question.is_empty() {
            return None;
        }

        self.chat_log.push(ChatEntry::Question(question.to_string()));

        let reply = match &self.chat {
            Some(chat) => chat.ask(self.page.context_text(), question),
            None => Err(InspectorError::MissingApiKey),
        };

        let entry = match reply {
            Ok(answer) => ChatEntry::Answer(answer),
            Err(e) => {
                log::warn!("Chat failed: {}", e);
                ChatEntry::Error(e.to_string())
            }
        };

        Some(self.chat_log.push(entry))
    }

    /// Text rendering of the visible panel
    pub fn render_view(&self) -> String {
        match self.view {
            View::Page => self.render_page(),
            View::Text => {
                if self.page.is_loaded() {
                    self.page.context_text().to_string()
                } else {
                    "(no page loaded)".to_string()
                }
            }
            View::Chat => {
                if self.chat_log.is_empty() {
                    "(no questions yet)".to_string()
                } else {
                    self.chat_log.to_string()
                }
            }
        }
    }

    fn render_page(&self) -> String {
        let mut lines = vec![format!("URL: {}", self.page.url().unwrap_or("(none)"))];

        let catalog = self.page.catalog();
        lines.push(format!("Page elements: {}", catalog.len()));
        lines.extend(
            catalog
                .labels()
                .enumerate()
                .map(|(i, label)| format!("[{}] {}", i, label)),
        );

        if let Some(inspection) = &self.inspection {
            lines.push(String::new());
            lines.push(format!("Selected [{}] {}", inspection.position, inspection.label));
            lines.push(inspection.raw_html.clone());
            if !inspection.preview.trim().is_empty() {
                lines.push(String::new());
                lines.push(inspection.preview.clone());
            }
        }

        lines.join("\n")
    }
}
