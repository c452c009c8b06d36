//! Tool definitions advertised to the chat model.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A tool definition in the chat completions `tools` format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolSchema {
    /// Tool type (always "function").
    #[serde(rename = "type")]
    pub tool_type: String,
    pub function: FunctionSchema,
}

/// Name, description and JSON-schema parameters of a function tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionSchema {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

impl ToolSchema {
    /// Create a function tool definition.
    pub fn function(
        name: impl Into<String>,
        description: impl Into<String>,
        parameters: Value,
    ) -> Self {
        Self {
            tool_type: "function".to_string(),
            function: FunctionSchema {
                name: name.into(),
                description: description.into(),
                parameters,
            },
        }
    }

    /// The function name.
    pub fn name(&self) -> &str {
        &self.function.name
    }
}
