//! Core data contracts and provider traits for the travel booking assistant.
//!
//! This crate provides the shared vocabulary for every other crate in the
//! workspace. It defines:
//!
//! - [`ChatMessage`] / [`ChatRequest`] / [`ChatResponse`] - The conversation
//!   shapes exchanged with a chat completion provider
//! - [`ToolSchema`] - Function definitions advertised to the model
//! - Flight, hotel, transfer and trip records (parameters and results)
//! - [`ChatProvider`] - Trait for chat completion backends
//! - [`BookingApi`] - Trait for the travel inventory backend
//! - [`ChatError`] / [`ProviderError`] - Error types for both boundaries
//!
//! # Example
//!
//! ```rust
//! use travel_core::{async_trait, ChatError, ChatProvider, ChatRequest, ChatResponse};
//!
//! struct CannedProvider;
//!
//! #[async_trait]
//! impl ChatProvider for CannedProvider {
//!     async fn complete(&self, _request: &ChatRequest) -> Result<ChatResponse, ChatError> {
//!         Ok(ChatResponse::text("Where would you like to fly?"))
//!     }
//!
//!     fn name(&self) -> &str {
//!         "CannedProvider"
//!     }
//! }
//! ```

mod chat;
mod error;
pub mod flight;
pub mod hotel;
mod outcome;
mod provider;
mod tool;
pub mod transfer;
pub mod trip;
mod value;

pub use chat::{
    ChatMessage, ChatRequest, ChatResponse, FunctionCall, NamedFunction, Role, ToolCall,
    ToolChoice, Usage, DEFAULT_MODEL, DEFAULT_TEMPERATURE,
};
pub use error::{ChatError, ConversationError, ProviderError};
pub use outcome::ToolOutcome;
pub use provider::{BookingApi, ChatProvider, FlightOfferQuery};
pub use tool::{FunctionSchema, ToolSchema};
pub use value::{Address, Money};

// Re-export async_trait for convenience
pub use async_trait::async_trait;
