use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://api.groq.com/openai/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

pub const API_KEY_VAR: &str = "GROQ_API_KEY";
pub const ENDPOINT_VAR: &str = "PAGE_INSPECTOR_ENDPOINT";
pub const MODEL_VAR: &str = "PAGE_INSPECTOR_MODEL";

/// How the page text and the question are laid out across chat roles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum PromptStyle {
    /// Page text goes in the system message, the question is the user message
    #[default]
    SystemContext,
    /// Fixed system instruction; page text and question share the user message
    SplitRoles,
}

/// Options for the chat-completion endpoint
#[derive(Debug, Clone)]
pub struct ChatOptions {
    /// OpenAI-compatible chat completions URL
    pub endpoint: String,

    pub model: String,

    /// Bearer token; never compiled in
    pub api_key: Option<String>,

    /// Sampling temperature; `None` leaves it to the endpoint
    pub temperature: Option<f32>,

    pub prompt_style: PromptStyle,

    /// Request timeout (none by default: one blocking call per question)
    pub timeout: Option<Duration>,
}

impl Default for ChatOptions {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
            temperature: Some(DEFAULT_TEMPERATURE),
            prompt_style: PromptStyle::default(),
            timeout: None,
        }
    }
}

impl ChatOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by `GROQ_API_KEY`, `PAGE_INSPECTOR_ENDPOINT` and
    /// `PAGE_INSPECTOR_MODEL`
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`ChatOptions::from_env`] with a custom variable source
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let mut options = Self::default();
        if let Some(key) = non_empty(API_KEY_VAR) {
            options.api_key = Some(key);
        }
        if let Some(endpoint) = non_empty(ENDPOINT_VAR) {
            options.endpoint = endpoint;
        }
        if let Some(model) = non_empty(MODEL_VAR) {
            options.model = model;
        }
        options
    }

    /// Builder method: set endpoint URL
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Builder method: set model identifier
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Builder method: set API key
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Builder method: set sampling temperature
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Builder method: omit the temperature from requests
    pub fn without_temperature(mut self) -> Self {
        self.temperature = None;
        self
    }

    /// Builder method: set prompt layout
    pub fn prompt_style(mut self, style: PromptStyle) -> Self {
        self.prompt_style = style;
        self
    }

    /// Builder method: set request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}
