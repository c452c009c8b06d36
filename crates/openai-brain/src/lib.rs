//! OpenAI-compatible chat completion provider.
//!
//! This crate implements [`ChatProvider`] against any endpoint that speaks
//! the `/v1/chat/completions` wire format with function tools.
//!
//! # Features
//!
//! - Forwards the full conversation, tool schemas and tool-choice directive
//! - Surfaces requested tool calls in model order
//! - Logs request shape and token usage via `tracing`
//! - Configurable via environment variables
//!
//! # Usage
//!
//! ```rust,no_run
//! use openai_brain::OpenAiChatProvider;
//! use travel_core::{ChatMessage, ChatProvider, ChatRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = OpenAiChatProvider::from_env()?;
//!     let request = ChatRequest::new(vec![ChatMessage::user("Hello")], "gpt-4o", 0.7);
//!     let response = provider.complete(&request).await?;
//!     println!("{:?}", response.content);
//!     Ok(())
//! }
//! ```

mod api_types;
mod config;
mod provider;

pub use config::{OpenAiBrainConfig, OpenAiBrainConfigBuilder};
pub use provider::OpenAiChatProvider;

pub use travel_core::{ChatError, ChatProvider};
