//! Outbound event sink trait and implementations.

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::error::OrchestratorError;
use crate::events::ServerEvent;

/// Where a connection's outbound events go.
///
/// Abstracted to support different transports (WebSocket, tests, etc.)
#[async_trait]
pub trait ChatSink: Send + Sync {
    /// Deliver one event.
    ///
    /// Returns `SendFailed` once the client is gone.
    async fn send(&self, event: ServerEvent) -> Result<(), OrchestratorError>;
}

/// A sink that keeps every event in order.
#[derive(Debug, Default)]
pub struct CollectingSink {
    events: Mutex<Vec<ServerEvent>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn events(&self) -> Vec<ServerEvent> {
        self.events.lock().await.clone()
    }

    /// Message text of every event, in order.
    pub async fn messages(&self) -> Vec<String> {
        self.events
            .lock()
            .await
            .iter()
            .map(|e| e.message().to_string())
            .collect()
    }
}

#[async_trait]
impl ChatSink for CollectingSink {
    async fn send(&self, event: ServerEvent) -> Result<(), OrchestratorError> {
        self.events.lock().await.push(event);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_collecting_sink_keeps_order() {
        let sink = CollectingSink::new();
        sink.send(ServerEvent::received("one")).await.unwrap();
        sink.send(ServerEvent::assistant("two")).await.unwrap();

        assert_eq!(sink.messages().await, vec!["one", "two"]);
        assert!(matches!(
            sink.events().await[0],
            ServerEvent::MessageReceived { .. }
        ));
    }
}
