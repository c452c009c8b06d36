//! Error types for the chat and booking provider boundaries.

use thiserror::Error;

/// Errors raised by a chat completion provider.
#[derive(Debug, Error)]
pub enum ChatError {
    /// Provider is misconfigured (missing key, bad URL).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Request could not reach the provider.
    #[error("network error: {0}")]
    Network(String),

    /// Provider answered with an error or an unreadable body.
    #[error("processing failed: {0}")]
    ProcessingFailed(String),

    /// The conversation handed to the provider is malformed.
    #[error("invalid conversation: {0}")]
    InvalidConversation(#[from] ConversationError),
}

/// Structural problems in a conversation history.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversationError {
    #[error("tool message at position {index} has no tool_call_id")]
    MissingToolCallId { index: usize },

    #[error("tool message at position {index} answers unknown tool call '{id}'")]
    UnknownToolCallId { index: usize, id: String },
}

/// Transport-level failures talking to the booking provider.
///
/// Provider-reported domain errors (the `errors` array in a response body)
/// are not transport failures and come back as `Ok` bodies.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("network error: {0}")]
    Network(String),

    /// Request could not be encoded.
    #[error("encode error: {0}")]
    Encode(String),

    /// Body was not JSON.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
