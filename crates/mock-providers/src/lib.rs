//! Mock providers for testing the travel assistant without network access.
//!
//! - [`ScriptedChatProvider`] - replays queued chat responses and records
//!   every request it receives
//! - [`CannedBookingApi`] - answers each booking endpoint with a fixed JSON
//!   body and records the calls
//!
//! # Example
//!
//! ```rust
//! use mock_providers::{ChatProvider, ScriptedChatProvider};
//! use travel_core::{ChatMessage, ChatRequest, ChatResponse};
//!
//! #[tokio::main]
//! async fn main() {
//!     let provider = ScriptedChatProvider::new().then(ChatResponse::text("Hello!"));
//!
//!     let request = ChatRequest::new(vec![ChatMessage::user("hi")], "gpt-4o", 0.7);
//!     let response = provider.complete(&request).await.unwrap();
//!
//!     assert_eq!(response.visible_text(), Some("Hello!"));
//!     assert_eq!(provider.requests().len(), 1);
//! }
//! ```

mod canned;
mod scripted;

pub use travel_core::{async_trait, BookingApi, ChatProvider};

pub use canned::{BookingCall, CannedBookingApi};
pub use scripted::ScriptedChatProvider;
