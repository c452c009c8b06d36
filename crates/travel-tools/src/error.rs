//! Error types for tool dispatch.

use thiserror::Error;

/// Errors that can occur while dispatching a tool call.
///
/// Booking failures are not errors here: they come back as results with an
/// `error` field so the model can explain them to the user.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Tool name is not one of the registered tools.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// Arguments are not valid JSON or do not match the tool's parameters.
    #[error("Invalid arguments for '{tool}': {reason}")]
    InvalidArguments { tool: String, reason: String },

    /// Result could not be serialized for the conversation.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
