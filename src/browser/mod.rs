//! Page rendering
//!
//! A [`PageRenderer`] loads an address and hands back the live body markup.
//! [`BrowserSession`] drives headless Chrome; [`StaticPage`] serves HTML
//! held in memory.

pub mod config;
pub mod session;
pub mod static_page;

pub use config::LaunchOptions;
pub use session::BrowserSession;
pub use static_page::StaticPage;

use crate::error::Result;

/// Something that can load a page and report its body markup
pub trait PageRenderer {
    /// Load `url`, blocking until the page has finished loading
    fn load(&mut self, url: &str) -> Result<()>;

    /// Serialized markup of the current page body
    fn body_markup(&self) -> Result<String>;

    /// Address of the current page, if any
    fn current_url(&self) -> Option<String>;
}
