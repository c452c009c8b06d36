//! Welcome and health check endpoints.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

const WELCOME: &str = "Welcome to the BrainBase AirlinesChat API";

#[derive(Serialize)]
pub struct Welcome {
    pub message: String,
}

#[derive(Serialize)]
pub struct Health {
    pub status: String,
    pub connections: usize,
}

pub async fn root() -> Json<Welcome> {
    Json(Welcome {
        message: WELCOME.to_string(),
    })
}

/// Health check endpoint.
pub async fn health(State(state): State<AppState>) -> Json<Health> {
    Json(Health {
        status: "ok".to_string(),
        connections: state.connections.count().await,
    })
}
