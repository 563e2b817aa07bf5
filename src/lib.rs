//! # page-inspector
//!
//! Load a web page, browse its elements, read its text and ask questions
//! about it.
//!
//! ## Features
//!
//! - **Page text**: the body text of a page, with every table rendered as a
//!   pipe table so a language model can read it
//! - **Element catalog**: every element of the page in document order, with a
//!   short `<tag id="...">` label and its full markup
//! - **Chat**: questions answered by an OpenAI-compatible chat endpoint using
//!   the page text as context
//! - **Renderers**: headless Chrome for live pages, or HTML held in memory
//!
//! ## Usage
//!
//! The transformations work on any markup string:
//!
//! ```rust
//! use page_inspector::dom;
//!
//! let html = "<table><tr><th>A</th><th>B</th></tr><tr><td>1</td><td>2</td></tr></table>";
//! assert_eq!(dom::render(html), "| A | B |\n| --- | --- |\n| 1 | 2 |");
//!
//! let catalog = dom::catalog(r#"<div id="x"><span>hi</span></div>"#);
//! assert_eq!(catalog.get(0).unwrap().label, r#"<div id="x">"#);
//! assert_eq!(catalog.get(1).unwrap().raw_html, "<span>hi</span>");
//! ```
//!
//! The shell ties a renderer and a chat backend together:
//!
//! ```rust,no_run
//! use page_inspector::{BrowserSession, ChatClient, ChatOptions, Inspector, LaunchOptions};
//!
//! # fn main() -> page_inspector::Result<()> {
//! let browser = BrowserSession::launch(LaunchOptions::default())?;
//! let chat = ChatClient::new(ChatOptions::from_env())?;
//! let mut inspector = Inspector::new(Box::new(browser), Some(Box::new(chat)));
//!
//! inspector.load_url("example.com")?;
//! println!("{} elements", inspector.page().catalog().len());
//!
//! if let Some(reply) = inspector.submit_chat("What is this page about?") {
//!     println!("{}", reply);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Overview
//!
//! - [`dom`]: table-to-text conversion and the element catalog
//! - [`browser`]: page renderers (headless Chrome, static HTML)
//! - [`chat`]: the chat-completion client
//! - [`shell`]: page session, views, selection and chat log
//! - [`tools`]: shell actions as named tools with typed parameters
//! - [`error`]: error types and result aliases

pub mod browser;
pub mod chat;
pub mod dom;
pub mod error;
pub mod shell;
pub mod tools;

pub use browser::{BrowserSession, LaunchOptions, PageRenderer, StaticPage};
pub use chat::{ChatBackend, ChatClient, ChatOptions, PromptStyle};
pub use dom::{CatalogEntry, ElementCatalog, TextTable};
pub use error::{InspectorError, Result};
pub use shell::{ChatEntry, Inspector, PageSession, View};
pub use tools::{Tool, ToolContext, ToolRegistry, ToolResult};
