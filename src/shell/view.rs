use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::error::InspectorError;

/// The three mutually exclusive panels of the shell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum View {
    /// Rendered page: address, element list and the selected element
    #[default]
    #[serde(alias = "web")]
    Page,
    /// Extracted page text
    #[serde(alias = "content")]
    Text,
    /// Question and answer log
    Chat,
}

impl View {
    pub const ALL: [View; 3] = [View::Page, View::Text, View::Chat];

    pub fn as_str(&self) -> &'static str {
        match self {
            View::Page => "page",
            View::Text => "text",
            View::Chat => "chat",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for View {
    type Err = InspectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "page" | "web" => Ok(View::Page),
            "text" | "content" => Ok(View::Text),
            "chat" => Ok(View::Chat),
            other => Err(InspectorError::InvalidArgument(format!(
                "Unknown view '{}' (expected page, text or chat)",
                other
            ))),
        }
    }
}
