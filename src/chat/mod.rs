//! Question answering over page text
//!
//! [`ChatBackend`] is the seam the shell talks to; [`ChatClient`] is the
//! implementation backed by an OpenAI-compatible HTTP endpoint.

pub mod client;
pub mod config;

pub use client::ChatClient;
pub use config::{ChatOptions, PromptStyle};

use crate::error::Result;

/// Answers a question using a block of page text as context
pub trait ChatBackend {
    /// Blocking. Transport and non-success responses are errors, never an
    /// empty answer.
    fn ask(&self, context: &str, question: &str) -> Result<String>;
}
