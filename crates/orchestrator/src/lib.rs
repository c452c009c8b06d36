//! Chat loop coordinating the language model and the booking tools.
//!
//! This crate provides the [`ChatOrchestrator`] type which handles one inbound
//! chat frame at a time for any number of connections.
//!
//! # Architecture
//!
//! ```text
//! Inbound frame (from the WebSocket route)
//!          ↓
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      ORCHESTRATOR                           │
//! │                                                             │
//! │  1. Decode payload, add the system prompt if missing        │
//! │         ↓                                                   │
//! │  2. Send "Processing your request..."                       │
//! │         ↓                                                   │
//! │  3. Complete with the tool schemas, forward the text        │
//! │         ↓                                                   │
//! │  4. For each requested tool call:                           │
//! │     • send "Browsing for options..."                        │
//! │     • dispatch through the tool registry                    │
//! │     • append call + result, complete again, forward text    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use mock_providers::{CannedBookingApi, ScriptedChatProvider};
//! use orchestrator::{ChatOrchestrator, CollectingSink};
//! use travel_core::ChatResponse;
//! use travel_tools::{default_registry, BookingService, TripLedger};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let service = BookingService::new(
//!     Arc::new(CannedBookingApi::new()),
//!     Arc::new(TripLedger::new()),
//! );
//! let provider = ScriptedChatProvider::new().then(ChatResponse::text("Where to?"));
//! let orchestrator = ChatOrchestrator::new(
//!     Arc::new(provider),
//!     Arc::new(default_registry(Arc::new(service))),
//! );
//!
//! let sink = CollectingSink::new();
//! orchestrator
//!     .handle_frame(r#"{"messages": [{"role": "user", "content": "hi"}]}"#, &sink)
//!     .await
//!     .unwrap();
//! assert_eq!(sink.messages().await.last().map(String::as_str), Some("Where to?"));
//! # }
//! ```

mod error;
mod events;
mod orchestrator;
mod prompt;
mod sink;

pub use error::OrchestratorError;
pub use events::{ChatPayload, InboundMessage, ServerEvent};
pub use orchestrator::{
    ChatOrchestrator, ConversationState, BROWSING_NOTICE, DISPATCH_FAILED_NOTICE,
    PROCESSING_NOTICE,
};
pub use prompt::system_prompt;
pub use sink::{ChatSink, CollectingSink};
