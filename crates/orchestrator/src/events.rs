//! Frames exchanged with the chat client.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use travel_core::{ChatMessage, Role, ToolCall, ToolChoice};

use crate::error::OrchestratorError;

/// Outbound event, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerEvent {
    /// Acknowledges an inbound frame before the model is contacted.
    MessageReceived { message: String },
    /// Text for the chat transcript.
    ChatResponse { role: Role, message: String },
    /// An exchange failed; the connection stays open.
    Error { message: String },
}

impl ServerEvent {
    pub fn received(message: impl Into<String>) -> Self {
        ServerEvent::MessageReceived {
            message: message.into(),
        }
    }

    pub fn assistant(message: impl Into<String>) -> Self {
        ServerEvent::ChatResponse {
            role: Role::Assistant,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        ServerEvent::Error {
            message: message.into(),
        }
    }

    /// The text carried by the event.
    pub fn message(&self) -> &str {
        match self {
            ServerEvent::MessageReceived { message }
            | ServerEvent::ChatResponse { message, .. }
            | ServerEvent::Error { message } => message,
        }
    }

    /// Encode as a JSON text frame.
    pub fn to_frame(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// A conversation message as sent by the client.
///
/// `content` may be a string, null, or an object wrapping the string under
/// its own `content` key.
#[derive(Debug, Clone, Deserialize)]
pub struct InboundMessage {
    pub role: Role,
    #[serde(default)]
    pub content: Option<Value>,
    #[serde(default)]
    pub tool_calls: Option<Vec<ToolCall>>,
    #[serde(default)]
    pub tool_call_id: Option<String>,
}

impl InboundMessage {
    pub fn into_chat_message(self) -> Result<ChatMessage, OrchestratorError> {
        let content = match self.content {
            Some(Value::Object(mut wrapper)) => match wrapper.remove("content") {
                Some(inner) => text_content(inner)?,
                None => {
                    return Err(OrchestratorError::Decode(
                        "message content object has no content field".to_string(),
                    ))
                }
            },
            Some(other) => text_content(other)?,
            None => None,
        };

        Ok(ChatMessage {
            role: self.role,
            content,
            tool_calls: self.tool_calls,
            tool_call_id: self.tool_call_id,
        })
    }
}

fn text_content(value: Value) -> Result<Option<String>, OrchestratorError> {
    match value {
        Value::String(text) => Ok(Some(text)),
        Value::Null => Ok(None),
        other => Err(OrchestratorError::Decode(format!(
            "message content must be text, got {}",
            other
        ))),
    }
}

/// One inbound frame: the conversation so far plus request options.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatPayload {
    #[serde(default)]
    pub messages: Vec<InboundMessage>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub temperature: Option<f32>,
    #[serde(default)]
    pub tool_choice: Option<ToolChoice>,
}

impl ChatPayload {
    pub fn from_frame(frame: &str) -> Result<Self, OrchestratorError> {
        serde_json::from_str(frame).map_err(|e| OrchestratorError::Decode(e.to_string()))
    }

    /// The conversation in client order.
    pub fn conversation(&self) -> Result<Vec<ChatMessage>, OrchestratorError> {
        self.messages
            .iter()
            .cloned()
            .map(InboundMessage::into_chat_message)
            .collect()
    }
}
