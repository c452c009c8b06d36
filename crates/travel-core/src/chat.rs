//! Conversation types exchanged with a chat completion provider.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::ConversationError;
use crate::tool::ToolSchema;

/// Model used when the client does not name one.
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// Sampling temperature used when the client does not provide one.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Author of a conversation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
    Tool,
}

/// A single message in a conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_calls: Option<Vec<ToolCall>>,
    /// Links a `tool` message back to the assistant call it answers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
}

impl ChatMessage {
    fn with_content(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: Some(content.into()),
            tool_calls: None,
            tool_call_id: None,
        }
    }

    /// Create a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self::with_content(Role::System, content)
    }

    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::with_content(Role::User, content)
    }

    /// Create an assistant text message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::with_content(Role::Assistant, content)
    }

    /// Create an assistant message that only carries tool calls.
    pub fn assistant_tool_calls(calls: Vec<ToolCall>) -> Self {
        Self {
            role: Role::Assistant,
            content: None,
            tool_calls: Some(calls),
            tool_call_id: None,
        }
    }

    /// Create a tool result message answering `tool_call_id`.
    pub fn tool_result(tool_call_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: Role::Tool,
            content: Some(content.into()),
            tool_calls: None,
            tool_call_id: Some(tool_call_id.into()),
        }
    }
}

fn function_type() -> String {
    "function".to_string()
}

/// A model-requested tool invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    pub id: String,
    #[serde(rename = "type", default = "function_type")]
    pub call_type: String,
    pub function: FunctionCall,
}

impl ToolCall {
    /// Create a function tool call.
    pub fn function(
        id: impl Into<String>,
        name: impl Into<String>,
        arguments: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            call_type: function_type(),
            function: FunctionCall {
                name: name.into(),
                arguments: arguments.into(),
            },
        }
    }

    /// Whether this is a function call (the only kind that can be dispatched).
    pub fn is_function(&self) -> bool {
        self.call_type == "function"
    }
}

/// Function name and raw JSON arguments of a tool call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionCall {
    pub name: String,
    /// Arguments as a JSON-encoded string, exactly as the model produced them.
    pub arguments: String,
}

/// Name of a function the model is forced to call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedFunction {
    pub name: String,
}

/// Tool-choice directive passed through to the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ToolChoice {
    /// `"auto"`, `"none"` or `"required"`.
    Mode(String),
    /// Force a specific function.
    Function {
        #[serde(rename = "type")]
        choice_type: String,
        function: NamedFunction,
    },
}

/// A full chat completion request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    /// Conversation so far, in conversation order.
    pub messages: Vec<ChatMessage>,
    pub model: String,
    pub temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<ToolSchema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_choice: Option<ToolChoice>,
}

impl ChatRequest {
    /// Create a request without tools.
    pub fn new(messages: Vec<ChatMessage>, model: impl Into<String>, temperature: f32) -> Self {
        Self {
            messages,
            model: model.into(),
            temperature,
            tools: None,
            tool_choice: None,
        }
    }

    /// Attach the tool schemas the model may call.
    pub fn with_tools(mut self, tools: Vec<ToolSchema>) -> Self {
        self.tools = Some(tools);
        self
    }

    /// Attach a tool-choice directive.
    pub fn with_tool_choice(mut self, choice: ToolChoice) -> Self {
        self.tool_choice = Some(choice);
        self
    }

    /// Check that every `tool` message answers a tool call made earlier by
    /// the assistant in this same conversation.
    pub fn validate(&self) -> Result<(), ConversationError> {
        let mut issued: HashSet<&str> = HashSet::new();

        for (index, message) in self.messages.iter().enumerate() {
            match message.role {
                Role::Assistant => {
                    if let Some(calls) = &message.tool_calls {
                        issued.extend(calls.iter().map(|c| c.id.as_str()));
                    }
                }
                Role::Tool => {
                    let id = message
                        .tool_call_id
                        .as_deref()
                        .ok_or(ConversationError::MissingToolCallId { index })?;
                    if !issued.contains(id) {
                        return Err(ConversationError::UnknownToolCallId {
                            index,
                            id: id.to_string(),
                        });
                    }
                }
                Role::System | Role::User => {}
            }
        }

        Ok(())
    }
}

/// Token usage reported by the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Assistant output from one completion.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChatResponse {
    pub content: Option<String>,
    /// Requested tool calls, in the order the model returned them.
    pub tool_calls: Vec<ToolCall>,
    pub usage: Option<Usage>,
}

impl ChatResponse {
    /// A text-only response.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::default()
        }
    }

    /// A response that only requests tool calls.
    pub fn tool_calls(calls: Vec<ToolCall>) -> Self {
        Self {
            tool_calls: calls,
            ..Self::default()
        }
    }

    /// Assistant text worth showing to the user, if any.
    pub fn visible_text(&self) -> Option<&str> {
        self.content.as_deref().filter(|text| !text.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_serialization_skips_empty_fields() {
        let json = serde_json::to_value(ChatMessage::user("hi")).unwrap();
        assert_eq!(json, serde_json::json!({"role": "user", "content": "hi"}));
    }

    #[test]
    fn test_tool_call_defaults_to_function_type() {
        let call: ToolCall = serde_json::from_str(
            r#"{"id": "call_1", "function": {"name": "search_flights", "arguments": "{}"}}"#,
        )
        .unwrap();
        assert!(call.is_function());
        assert_eq!(call.function.name, "search_flights");
    }

    #[test]
    fn test_tool_choice_shapes() {
        let mode: ToolChoice = serde_json::from_str(r#""auto""#).unwrap();
        assert_eq!(mode, ToolChoice::Mode("auto".to_string()));

        let forced: ToolChoice = serde_json::from_str(
            r#"{"type": "function", "function": {"name": "get_trip_details"}}"#,
        )
        .unwrap();
        assert!(matches!(forced, ToolChoice::Function { ref function, .. } if function.name == "get_trip_details"));
    }

    #[test]
    fn test_validate_accepts_answered_tool_call() {
        let request = ChatRequest::new(
            vec![
                ChatMessage::user("find flights"),
                ChatMessage::assistant_tool_calls(vec![ToolCall::function(
                    "call_1",
                    "search_flights",
                    "{}",
                )]),
                ChatMessage::tool_result("call_1", "{}"),
            ],
            DEFAULT_MODEL,
            DEFAULT_TEMPERATURE,
        );
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_orphan_tool_message() {
        let request = ChatRequest::new(
            vec![ChatMessage::user("hi"), ChatMessage::tool_result("call_9", "{}")],
            DEFAULT_MODEL,
            DEFAULT_TEMPERATURE,
        );
        assert_eq!(
            request.validate(),
            Err(ConversationError::UnknownToolCallId {
                index: 1,
                id: "call_9".to_string()
            })
        );
    }

    #[test]
    fn test_validate_rejects_tool_message_without_id() {
        let mut message = ChatMessage::tool_result("x", "{}");
        message.tool_call_id = None;
        let request = ChatRequest::new(vec![message], DEFAULT_MODEL, DEFAULT_TEMPERATURE);
        assert_eq!(
            request.validate(),
            Err(ConversationError::MissingToolCallId { index: 0 })
        );
    }

    #[test]
    fn test_visible_text_ignores_empty_content() {
        assert_eq!(ChatResponse::text("").visible_text(), None);
        assert_eq!(ChatResponse::text("Hello").visible_text(), Some("Hello"));
        assert_eq!(ChatResponse::default().visible_text(), None);
    }
}
