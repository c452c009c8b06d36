//! Route handlers for the chat server.

pub mod chat;
pub mod health;

use axum::routing::get;
use axum::Router;

use crate::state::AppState;

/// Build the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health))
        .route("/ws/chat", get(chat::chat_socket))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use mock_providers::{CannedBookingApi, ScriptedChatProvider};
    use orchestrator::ChatOrchestrator;
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use travel_tools::{default_registry, BookingService, TripLedger};

    fn test_state() -> AppState {
        let service = BookingService::new(
            Arc::new(CannedBookingApi::new()),
            Arc::new(TripLedger::new()),
        );
        AppState::new(ChatOrchestrator::new(
            Arc::new(ScriptedChatProvider::new()),
            Arc::new(default_registry(Arc::new(service))),
        ))
    }

    async fn get_json(state: AppState, uri: &str) -> (StatusCode, Value) {
        let response = router()
            .with_state(state)
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_root_welcome() {
        let (status, body) = get_json(test_state(), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"message": "Welcome to the BrainBase AirlinesChat API"})
        );
    }

    #[tokio::test]
    async fn test_health_counts_connections() {
        let state = test_state();
        let (_, body) = get_json(state.clone(), "/health").await;
        assert_eq!(body, json!({"status": "ok", "connections": 0}));

        state.connections.register().await;
        let (status, body) = get_json(state, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["connections"], 1);
    }

    #[tokio::test]
    async fn test_chat_requires_upgrade() {
        let response = router()
            .with_state(test_state())
            .oneshot(
                Request::builder()
                    .uri("/ws/chat")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert!(response.status().is_client_error());
    }
}
