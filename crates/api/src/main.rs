//! WebSocket chat server for the Brainbase Airlines travel assistant.
//!
//! Wires the OpenAI chat provider, the Amadeus booking client and the
//! booking tools into one orchestrator shared by every chat connection.

mod config;
mod connections;
mod routes;
mod state;

use std::sync::Arc;

use amadeus_client::AmadeusClient;
use openai_brain::OpenAiChatProvider;
use orchestrator::ChatOrchestrator;
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;
use travel_tools::{default_registry, BookingService, TripLedger};

use crate::config::Config;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    info!(addr = %config.addr, "Starting travel chat server");

    let booking_api = AmadeusClient::from_env()?;
    info!(api_url = %booking_api.config().api_url, "Booking provider configured");

    let provider = OpenAiChatProvider::from_env()?;
    let default_model = provider.config().model.clone();
    info!(model = %default_model, "Chat provider configured");

    let service = BookingService::new(Arc::new(booking_api), Arc::new(TripLedger::new()));
    let tools = default_registry(Arc::new(service));
    info!(tools = ?tools.list_tools(), "Registered booking tools");

    let orchestrator = ChatOrchestrator::new(Arc::new(provider), Arc::new(tools))
        .with_default_model(default_model);
    let state = AppState::new(orchestrator);

    let app = routes::router()
        .layer(CorsLayer::permissive())
        .with_state(state);

    info!(addr = %config.addr, "Travel chat server listening");
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
