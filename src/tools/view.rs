use crate::error::Result;
use crate::shell::View;
use crate::tools::{Tool, ToolContext, ToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SwitchViewParams {
    /// Panel to show: page, text or chat
    pub view: View,
}

/// Tool switching the visible panel
#[derive(Default)]
pub struct SwitchViewTool;

impl Tool for SwitchViewTool {
    type Params = SwitchViewParams;

    fn name(&self) -> &str {
        "switch_view"
    }

    fn description(&self) -> &str {
        "Show the page, text or chat panel"
    }

    fn execute_typed(&self, params: SwitchViewParams, context: &mut ToolContext<'_>) -> Result<ToolResult> {
        context.inspector.switch_view(params.view);

        Ok(ToolResult::success_with(serde_json::json!({
            "view": params.view,
            "rendered": context.inspector.render_view()
        })))
    }
}
