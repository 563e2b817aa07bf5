use crate::error::Result;
use crate::tools::{Tool, ToolContext, ToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ListElementsParams {
    /// Include each element's markup (default: false)
    #[serde(default)]
    pub with_html: bool,
}

/// Tool listing the page's elements with their positions
#[derive(Default)]
pub struct ListElementsTool;

impl Tool for ListElementsTool {
    type Params = ListElementsParams;

    fn name(&self) -> &str {
        "list_elements"
    }

    fn description(&self) -> &str {
        "List every element of the page (tag and id) by position"
    }

    fn execute_typed(&self, params: ListElementsParams, context: &mut ToolContext<'_>) -> Result<ToolResult> {
        let catalog = context.inspector.page().catalog();

        let elements: Vec<serde_json::Value> = catalog
            .iter()
            .enumerate()
            .map(|(position, entry)| {
                let mut item = serde_json::json!({
                    "position": position,
                    "label": entry.label,
                });
                if params.with_html {
                    item["html"] = serde_json::json!(entry.raw_html);
                }
                item
            })
            .collect();

        Ok(ToolResult::success_with(serde_json::json!({
            "count": elements.len(),
            "elements": elements
        })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{browser::StaticPage, shell::Inspector};

    #[test]
    fn test_list_elements() {
        let mut inspector = Inspector::new(
            Box::new(StaticPage::from_document(r#"<div id="x"><span>hi</span></div>"#)),
            None,
        );
        inspector.load_url("about:blank").unwrap();
        let mut context = ToolContext::new(&mut inspector);

        let data = ListElementsTool
            .execute_typed(ListElementsParams::default(), &mut context)
            .unwrap()
            .data
            .unwrap();

        assert_eq!(data["count"], 2);
        assert_eq!(data["elements"][0]["label"], r#"<div id="x">"#);
        assert_eq!(data["elements"][1]["position"], 1);
        assert!(data["elements"][0].get("html").is_none());

        let data = ListElementsTool
            .execute_typed(ListElementsParams { with_html: true }, &mut context)
            .unwrap()
            .data
            .unwrap();
        assert_eq!(data["elements"][1]["html"], "<span>hi</span>");
    }

    #[test]
    fn test_list_elements_without_page() {
        let mut inspector = Inspector::new(Box::new(StaticPage::new()), None);
        let mut context = ToolContext::new(&mut inspector);

        let data = ListElementsTool
            .execute_typed(ListElementsParams::default(), &mut context)
            .unwrap()
            .data
            .unwrap();
        assert_eq!(data["count"], 0);
    }
}
