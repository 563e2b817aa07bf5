use crate::error::{InspectorError, Result};
use crate::tools::{Tool, ToolContext, ToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SelectElementParams {
    /// Position in the element list; out-of-range positions are ignored
    pub position: i64,
}

/// Tool showing one element's markup in the inspection panel
#[derive(Default)]
pub struct SelectElementTool;

impl Tool for SelectElementTool {
    type Params = SelectElementParams;

    fn name(&self) -> &str {
        "select_element"
    }

    fn description(&self) -> &str {
        "Inspect the element at a position of the element list"
    }

    fn execute_typed(&self, params: SelectElementParams, context: &mut ToolContext<'_>) -> Result<ToolResult> {
        let Some(inspection) = context.inspector.select_element(params.position) else {
            return Ok(ToolResult::success_with(serde_json::json!({
                "ignored": true,
                "position": params.position
            })));
        };

        let data = serde_json::to_value(inspection).map_err(|e| InspectorError::ToolExecutionFailed {
            tool: "select_element".to_string(),
            reason: e.to_string(),
        })?;

        Ok(ToolResult::success_with(data))
    }
}
