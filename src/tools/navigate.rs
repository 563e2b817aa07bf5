use crate::error::Result;
use crate::tools::{Tool, ToolContext, ToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for the navigate tool
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct NavigateParams {
    /// Address to load; a missing scheme is filled in
    pub url: String,
}

/// Tool for loading a page and rebuilding its text and element list
#[derive(Default)]
pub struct NavigateTool;

impl Tool for NavigateTool {
    type Params = NavigateParams;

    fn name(&self) -> &str {
        "navigate"
    }

    fn description(&self) -> &str {
        "Load a page and extract its text and elements"
    }

    fn execute_typed(&self, params: NavigateParams, context: &mut ToolContext<'_>) -> Result<ToolResult> {
        let Some(normalized_url) = context.inspector.load_url(&params.url)? else {
            return Ok(ToolResult::success_with(serde_json::json!({ "ignored": true })));
        };

        let page = context.inspector.page();
        Ok(ToolResult::success_with(serde_json::json!({
            "original_url": params.url,
            "normalized_url": normalized_url,
            "elements": page.catalog().len(),
            "text_length": page.context_text().len()
        })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{browser::StaticPage, shell::Inspector};

    #[test]
    fn test_navigate_params() {
        let params: NavigateParams =
            serde_json::from_value(serde_json::json!({ "url": "https://example.com" })).unwrap();
        assert_eq!(params.url, "https://example.com");
    }

    #[test]
    fn test_navigate_tool_metadata() {
        let tool = NavigateTool;
        assert_eq!(tool.name(), "navigate");
        assert!(tool.parameters_schema().is_object());
    }

    #[test]
    fn test_navigate_loads_page() {
        let mut inspector = Inspector::new(
            Box::new(StaticPage::from_document("<ul><li>one</li><li>two</li></ul>")),
            None,
        );
        let mut context = ToolContext::new(&mut inspector);

        let result = NavigateTool
            .execute_typed(NavigateParams { url: "example.org".to_string() }, &mut context)
            .unwrap();

        let data = result.data.unwrap();
        assert_eq!(data["normalized_url"], "https://example.org");
        assert_eq!(data["elements"], 3);
        assert_eq!(data["text_length"], "one\ntwo".len());
    }

    #[test]
    fn test_navigate_blank_is_ignored() {
        let mut inspector = Inspector::new(Box::new(StaticPage::new()), None);
        let mut context = ToolContext::new(&mut inspector);

        let result = NavigateTool
            .execute_typed(NavigateParams { url: " ".to_string() }, &mut context)
            .unwrap();
        assert_eq!(result.data.unwrap()["ignored"], true);
    }
}
