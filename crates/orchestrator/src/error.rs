//! Error types for orchestrator operations.

use thiserror::Error;
use travel_core::ChatError;

/// Errors that can occur while handling one inbound frame.
#[derive(Debug, Error)]
pub enum OrchestratorError {
    /// Inbound frame is not a valid chat payload.
    #[error("invalid chat payload: {0}")]
    Decode(String),

    /// The chat completion provider failed.
    #[error(transparent)]
    Chat(#[from] ChatError),

    /// The client can no longer be reached.
    #[error("send failed: {0}")]
    SendFailed(String),
}

impl OrchestratorError {
    /// Whether the connection is gone and the loop should stop.
    pub fn is_disconnect(&self) -> bool {
        matches!(self, OrchestratorError::SendFailed(_))
    }
}
