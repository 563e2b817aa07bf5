use crate::error::Result;
use crate::tools::{Tool, ToolContext, ToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for getting the page text (no parameters needed)
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GetTextParams {}

/// Tool returning the page text that questions are answered from
#[derive(Default)]
pub struct GetTextTool;

impl Tool for GetTextTool {
    type Params = GetTextParams;

    fn name(&self) -> &str {
        "get_text"
    }

    fn description(&self) -> &str {
        "Get the page text, with tables rendered as pipe tables"
    }

    fn execute_typed(&self, _params: GetTextParams, context: &mut ToolContext<'_>) -> Result<ToolResult> {
        let page = context.inspector.page();
        let text = page.context_text();

        Ok(ToolResult::success_with(serde_json::json!({
            "text": text,
            "url": page.url(),
            "length": text.len()
        })))
    }
}
