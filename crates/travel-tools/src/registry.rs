//! Tool registry for advertising and dispatching tools.

use std::sync::Arc;

use indexmap::IndexMap;
use tracing::{debug, info};
use travel_core::ToolSchema;

use crate::error::ToolError;
use crate::tool::{Tool, ToolArgs, ToolName, ToolOutput};

/// Registry for managing tools.
///
/// Tools are kept in registration order, which is also the order their
/// schemas are advertised to the model.
pub struct ToolRegistry {
    tools: IndexMap<ToolName, Arc<dyn Tool>>,
}

impl ToolRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            tools: IndexMap::new(),
        }
    }

    /// Register a tool, replacing any tool with the same name.
    pub fn register<T: Tool + 'static>(&mut self, tool: T) {
        self.register_arc(Arc::new(tool));
    }

    pub fn register_arc(&mut self, tool: Arc<dyn Tool>) {
        let name = tool.name();
        info!("Registering tool: {}", name);
        self.tools.insert(name, tool);
    }

    /// Registered tool names, in registration order.
    pub fn list_tools(&self) -> Vec<&'static str> {
        self.tools.keys().map(ToolName::as_str).collect()
    }

    pub fn has_tool(&self, name: ToolName) -> bool {
        self.tools.contains_key(&name)
    }

    /// Tool definitions sent with every chat request.
    pub fn schemas(&self) -> Vec<ToolSchema> {
        self.tools.values().map(|tool| tool.schema()).collect()
    }

    /// Run a registered tool with decoded arguments.
    pub async fn execute(&self, name: ToolName, args: ToolArgs) -> Result<ToolOutput, ToolError> {
        let tool = self
            .tools
            .get(&name)
            .ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;

        debug!("Executing tool '{}'", name);
        let output = tool.execute(args).await?;
        debug!(
            "Tool '{}' completed: error={}, content_len={}",
            name,
            output.is_error(),
            output.content.len()
        );

        Ok(output)
    }

    /// Resolve a model tool call by name and run it on its JSON arguments.
    pub async fn dispatch(&self, name: &str, arguments: &str) -> Result<ToolOutput, ToolError> {
        let tool: ToolName = name.parse()?;
        let args = ToolArgs::from_json(tool, arguments)?;
        self.execute(tool, args).await
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde::Deserialize;
    use serde_json::{json, Value};

    struct EchoTool;

    #[derive(Deserialize)]
    struct EchoParams {
        trip_id: String,
    }

    #[async_trait]
    impl Tool for EchoTool {
        fn name(&self) -> ToolName {
            ToolName::GetTripDetails
        }

        fn description(&self) -> &str {
            "Echoes back the trip id"
        }

        fn parameters(&self) -> Value {
            json!({"type": "object", "properties": {"trip_id": {"type": "string"}}})
        }

        async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError> {
            let params: EchoParams = args.parse()?;
            Ok(ToolOutput {
                content: params.trip_id,
                error: None,
            })
        }
    }

    #[test]
    fn test_registry_basic() {
        let mut registry = ToolRegistry::new();
        registry.register(EchoTool);

        assert!(registry.has_tool(ToolName::GetTripDetails));
        assert!(!registry.has_tool(ToolName::BookFlight));
        assert_eq!(registry.list_tools(), vec!["get_trip_details"]);

        let schemas = registry.schemas();
        assert_eq!(schemas.len(), 1);
        assert_eq!(schemas[0].name(), "get_trip_details");
    }

    #[tokio::test]
    async fn test_registry_dispatch() {
        let mut registry = ToolRegistry::new();
        registry.register(EchoTool);

        let result = registry
            .dispatch("get_trip_details", r#"{"trip_id": "TRIP_20300101"}"#)
            .await
            .unwrap();
        assert_eq!(result.content, "TRIP_20300101");
    }

    #[tokio::test]
    async fn test_dispatch_unknown_name() {
        let registry = ToolRegistry::new();
        let result = registry.dispatch("cancel_everything", "{}").await;
        assert!(matches!(result, Err(ToolError::UnknownTool(_))));
    }

    #[tokio::test]
    async fn test_dispatch_known_but_unregistered() {
        let registry = ToolRegistry::new();
        let result = registry.dispatch("book_flight", "{}").await;
        assert!(matches!(result, Err(ToolError::UnknownTool(name)) if name == "book_flight"));
    }

    #[tokio::test]
    async fn test_dispatch_bad_arguments() {
        let mut registry = ToolRegistry::new();
        registry.register(EchoTool);

        let result = registry.dispatch("get_trip_details", r#"{"trip": 1}"#).await;
        assert!(matches!(result, Err(ToolError::InvalidArguments { .. })));
    }
}
