use crate::error::Result;
use crate::shell::ChatEntry;
use crate::tools::{Tool, ToolContext, ToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AskParams {
    /// Question about the current page; blank questions are ignored
    pub question: String,
}

/// Tool asking the chat backend about the current page
#[derive(Default)]
pub struct AskTool;

impl Tool for AskTool {
    type Params = AskParams;

    fn name(&self) -> &str {
        "ask"
    }

    fn description(&self) -> &str {
        "Ask a question answered from the page text"
    }

    fn execute_typed(&self, params: AskParams, context: &mut ToolContext<'_>) -> Result<ToolResult> {
        let result = match context.inspector.submit_chat(&params.question) {
            None => ToolResult::success_with(serde_json::json!({ "ignored": true })),
            Some(ChatEntry::Error(message)) => ToolResult::failure(message.clone()),
            Some(entry) => ToolResult::success_with(serde_json::json!({ "answer": entry.text() })),
        };

        Ok(result)
    }
}
