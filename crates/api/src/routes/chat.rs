//! WebSocket chat channel.
//!
//! Each connection runs its own sequential loop: one inbound text frame is
//! handled to completion before the next is read.

use async_trait::async_trait;
use axum::extract::ws::{Message, WebSocket};
use axum::extract::{State, WebSocketUpgrade};
use axum::response::Response;
use futures::{Sink, SinkExt, StreamExt};
use orchestrator::{ChatSink, OrchestratorError, ServerEvent};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::state::AppState;

/// WebSocket upgrade handler.
pub async fn chat_socket(ws: WebSocketUpgrade, State(state): State<AppState>) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: AppState) {
    let id = state.connections.register().await;
    info!(connection = %id, "Chat connection opened");

    let (sender, mut receiver) = socket.split();
    let sink = WsSink::new(sender);

    while let Some(message) = receiver.next().await {
        match message {
            Ok(Message::Text(frame)) => {
                if let Err(e) = state.orchestrator.handle_frame(&frame, &sink).await {
                    info!(connection = %id, "Client went away: {}", e);
                    break;
                }
            }
            Ok(Message::Close(_)) => break,
            Ok(other) => debug!(connection = %id, "Ignoring non-text frame: {:?}", other),
            Err(e) => {
                warn!(connection = %id, "WebSocket receive error: {}", e);
                break;
            }
        }
    }

    let open_for = state.connections.unregister(id).await;
    info!(
        connection = %id,
        seconds = open_for.map(|d| d.num_seconds()).unwrap_or_default(),
        "Chat connection closed"
    );
}

/// Sends server events as JSON text frames.
pub struct WsSink<S> {
    sender: Mutex<S>,
}

impl<S> WsSink<S> {
    pub fn new(sender: S) -> Self {
        Self {
            sender: Mutex::new(sender),
        }
    }
}

#[async_trait]
impl<S> ChatSink for WsSink<S>
where
    S: Sink<Message> + Unpin + Send,
    S::Error: std::fmt::Display,
{
    async fn send(&self, event: ServerEvent) -> Result<(), OrchestratorError> {
        let frame = event
            .to_frame()
            .map_err(|e| OrchestratorError::SendFailed(e.to_string()))?;
        self.sender
            .lock()
            .await
            .send(Message::Text(frame))
            .await
            .map_err(|e| OrchestratorError::SendFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::mpsc;

    #[tokio::test]
    async fn test_events_sent_as_json_text() {
        let (tx, mut rx) = mpsc::channel(4);
        let sink = WsSink::new(tx);

        sink.send(ServerEvent::assistant("Hi there")).await.unwrap();

        match rx.next().await {
            Some(Message::Text(frame)) => assert_eq!(
                frame,
                r#"{"type":"chat_response","role":"assistant","message":"Hi there"}"#
            ),
            other => panic!("unexpected frame: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_closed_peer_is_disconnect() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);
        let sink = WsSink::new(tx);

        let err = sink.send(ServerEvent::error("boom")).await.unwrap_err();
        assert!(err.is_disconnect());
    }
}
