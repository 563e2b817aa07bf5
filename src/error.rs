use thiserror::Error;

/// Errors produced by the page inspector
#[derive(Debug, Error)]
pub enum InspectorError {
    /// The headless browser could not be started
    #[error("Failed to launch browser: {0}")]
    LaunchFailed(String),

    /// Navigation to a page did not complete
    #[error("Navigation failed: {0}")]
    NavigationFailed(String),

    /// A script evaluated in the page failed or returned nothing usable
    #[error("Script evaluation failed: {0}")]
    EvaluationFailed(String),

    /// The chat request could not be sent or its body could not be read
    #[error("Chat request failed: {0}")]
    ChatRequest(String),

    /// The chat endpoint answered with a non-success status
    #[error("Chat endpoint returned {status}: {body}")]
    ChatStatus { status: u16, body: String },

    /// The chat endpoint answered 2xx but without an answer in it
    #[error("Malformed chat response: {0}")]
    ChatResponse(String),

    /// No credential was configured for the chat endpoint
    #[error("No API key configured (set GROQ_API_KEY or pass --api-key)")]
    MissingApiKey,

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Tool '{tool}' failed: {reason}")]
    ToolExecutionFailed { tool: String, reason: String },
}

impl From<reqwest::Error> for InspectorError {
    fn from(err: reqwest::Error) -> Self {
        InspectorError::ChatRequest(err.to_string())
    }
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, InspectorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_status_message_includes_detail() {
        let err = InspectorError::ChatStatus {
            status: 500,
            body: "upstream exploded".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("500"));
        assert!(msg.contains("upstream exploded"));
    }

    #[test]
    fn test_tool_failure_message() {
        let err = InspectorError::ToolExecutionFailed {
            tool: "ask".to_string(),
            reason: "no page".to_string(),
        };
        assert_eq!(err.to_string(), "Tool 'ask' failed: no page");
    }
}
