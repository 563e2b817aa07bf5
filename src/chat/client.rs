use crate::{chat::{ChatBackend,
                   config::{ChatOptions, PromptStyle}},
            error::{InspectorError, Result}};
use serde::{Deserialize, Serialize};

const CONTEXT_PREAMBLE: &str = "Answer ONLY from the webpage content below:\n";
const SPLIT_SYSTEM_PROMPT: &str =
    "You are a helpful assistant that answers questions only based on the given context.";

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

impl ChatMessage {
    fn system(content: impl Into<String>) -> Self {
        Self { role: "system", content: content.into() }
    }

    fn user(content: impl Into<String>) -> Self {
        Self { role: "user", content: content.into() }
    }
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

fn build_messages(style: PromptStyle, context: &str, question: &str) -> Vec<ChatMessage> {
    match style {
        PromptStyle::SystemContext => vec![
            ChatMessage::system(format!("{}{}", CONTEXT_PREAMBLE, context)),
            ChatMessage::user(question),
        ],
        PromptStyle::SplitRoles => vec![
            ChatMessage::system(SPLIT_SYSTEM_PROMPT),
            ChatMessage::user(format!("Context:\n{}\n\nQuestion:\n{}", context, question)),
        ],
    }
}

fn extract_answer(body: &str) -> Result<String> {
    let parsed: ChatResponse =
        serde_json::from_str(body).map_err(|e| InspectorError::ChatResponse(e.to_string()))?;

    parsed
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| InspectorError::ChatResponse("missing choices[0].message.content".to_string()))
}

/// Blocking client for an OpenAI-compatible chat completions endpoint
pub struct ChatClient {
    http: reqwest::blocking::Client,
    options: ChatOptions,
    api_key: String,
}

impl ChatClient {
    /// Build a client. Fails when no API key is configured.
    pub fn new(options: ChatOptions) -> Result<Self> {
        let api_key = options
            .api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .ok_or(InspectorError::MissingApiKey)?;

        let http = reqwest::blocking::Client::builder()
            .timeout(options.timeout)
            .build()
            .map_err(|e| InspectorError::ChatRequest(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { http, options, api_key })
    }

    pub fn options(&self) -> &ChatOptions {
        &self.options
    }
}

impl ChatBackend for ChatClient {
    fn ask(&self, context: &str, question: &str) -> Result<String> {
        let request = ChatRequest {
            model: &self.options.model,
            messages: build_messages(self.options.prompt_style, context, question),
            temperature: self.options.temperature,
            stream: false,
        };

        log::info!(
            "Asking {} ({} chars of context)",
            self.options.model,
            context.len()
        );

        let response = self
            .http
            .post(&self.options.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()?;

        let status = response.status();
        let body = response.text()?;

        if !status.is_success() {
            log::warn!("Chat endpoint returned {}", status);
            return Err(InspectorError::ChatStatus { status: status.as_u16(), body });
        }

        extract_answer(&body)
    }
}
