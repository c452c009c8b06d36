//! Application state shared across handlers.

use std::sync::Arc;

use orchestrator::ChatOrchestrator;

use crate::connections::ConnectionRegistry;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Chat loop shared by every connection.
    pub orchestrator: Arc<ChatOrchestrator>,
    /// Open chat connections.
    pub connections: ConnectionRegistry,
}

impl AppState {
    /// Create new application state.
    pub fn new(orchestrator: ChatOrchestrator) -> Self {
        Self {
            orchestrator: Arc::new(orchestrator),
            connections: ConnectionRegistry::new(),
        }
    }
}
