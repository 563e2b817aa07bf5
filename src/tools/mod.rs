//! Shell actions as named tools
//!
//! Each tool takes typed parameters (deserialized from JSON, with a JSON
//! schema derived by `schemars`) and acts on the [`Inspector`] through a
//! [`ToolContext`]. The [`ToolRegistry`] dispatches by name.

pub mod ask;
pub mod elements;
pub mod navigate;
pub mod select;
pub mod text;
pub mod utils;
pub mod view;

pub use ask::AskTool;
pub use elements::ListElementsTool;
pub use navigate::NavigateTool;
pub use select::SelectElementTool;
pub use text::GetTextTool;
pub use view::SwitchViewTool;

use crate::{error::{InspectorError, Result},
            shell::Inspector};
use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;

/// State a tool acts on
pub struct ToolContext<'a> {
    pub inspector: &'a mut Inspector,
}

impl<'a> ToolContext<'a> {
    pub fn new(inspector: &'a mut Inspector) -> Self {
        Self { inspector }
    }
}

/// Outcome of a tool run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToolResult {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ToolResult {
    pub fn success() -> Self {
        Self { success: true, data: None, error: None }
    }

    pub fn success_with(data: Value) -> Self {
        Self { success: true, data: Some(data), error: None }
    }

    /// The action ran but its outcome is an error the user should see
    pub fn failure(error: impl Into<String>) -> Self {
        Self { success: false, data: None, error: Some(error.into()) }
    }
}

/// A shell action with typed parameters
pub trait Tool {
    type Params: DeserializeOwned + JsonSchema;

    fn name(&self) -> &str;

    fn description(&self) -> &str;

    /// JSON schema of [`Tool::Params`]
    fn parameters_schema(&self) -> Value {
        serde_json::to_value(schemars::schema_for!(Self::Params)).unwrap_or_default()
    }

    fn execute_typed(&self, params: Self::Params, context: &mut ToolContext<'_>) -> Result<ToolResult>;
}

/// Object-safe view of a [`Tool`] used by the registry
trait DynTool {
    fn description(&self) -> &str;
    fn parameters_schema(&self) -> Value;
    fn execute(&self, params: Value, context: &mut ToolContext<'_>) -> Result<ToolResult>;
}

impl<T: Tool> DynTool for T {
    fn description(&self) -> &str {
        Tool::description(self)
    }

    fn parameters_schema(&self) -> Value {
        Tool::parameters_schema(self)
    }

    fn execute(&self, params: Value, context: &mut ToolContext<'_>) -> Result<ToolResult> {
        let params: T::Params = serde_json::from_value(params).map_err(|e| {
            InspectorError::InvalidArgument(format!("Bad parameters for '{}': {}", Tool::name(self), e))
        })?;
        self.execute_typed(params, context)
    }
}

/// Tools by name, in registration order
#[derive(Default)]
pub struct ToolRegistry {
    tools: IndexMap<String, Box<dyn DynTool>>,
}

impl ToolRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every shell action
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(NavigateTool);
        registry.register(ListElementsTool);
        registry.register(SelectElementTool);
        registry.register(GetTextTool);
        registry.register(SwitchViewTool);
        registry.register(AskTool);
        registry
    }

    /// Register a tool, replacing any tool with the same name
    pub fn register<T: Tool + 'static>(&mut self, tool: T) {
        let name = Tool::name(&tool).to_string();
        if self.tools.insert(name.clone(), Box::new(tool)).is_some() {
            log::debug!("Replaced tool '{}'", name);
        }
    }

    pub fn has(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tools.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Description and parameter schema of a tool
    pub fn describe(&self, name: &str) -> Option<(&str, Value)> {
        self.tools
            .get(name)
            .map(|tool| (tool.description(), tool.parameters_schema()))
    }

    /// Run a tool by name with JSON parameters
    pub fn execute(&self, name: &str, params: Value, context: &mut ToolContext<'_>) -> Result<ToolResult> {
        let tool = self
            .tools
            .get(name)
            .ok_or_else(|| InspectorError::UnknownTool(name.to_string()))?;

        log::debug!("Executing tool '{}'", name);
        tool.execute(params, context)
    }
}
