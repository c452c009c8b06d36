//! Traits for the two external collaborators: the chat completion provider
//! and the booking provider.

use async_trait::async_trait;
use serde_json::Value;

use crate::chat::{ChatRequest, ChatResponse};
use crate::error::{ChatError, ProviderError};
use crate::flight::Traveler;
use crate::hotel::SearchHotelParams;
use crate::transfer::TransferSearchParams;

/// A chat completion backend.
///
/// Receives the whole conversation plus tool schemas and returns assistant
/// text and/or requested tool calls.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, ChatError>;

    /// Provider name for logging.
    fn name(&self) -> &str;
}

/// Criteria for a flight offer search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightOfferQuery {
    pub origin: String,
    pub destination: String,
    pub departure_date: String,
    /// Maximum offers the provider should return.
    pub max: u32,
    /// Ask the provider to price offers in its configured currency.
    pub priced_in_currency: bool,
}

/// The travel inventory backend.
///
/// Every method returns the provider's JSON body as-is, including bodies
/// that carry an `errors` array. `Err` is reserved for transport failures.
#[async_trait]
pub trait BookingApi: Send + Sync {
    async fn search_flight_offers(&self, query: &FlightOfferQuery) -> Result<Value, ProviderError>;

    /// Confirm the price of one complete offer object.
    async fn price_flight_offer(&self, offer: &Value) -> Result<Value, ProviderError>;

    /// Place an order for a priced offer.
    async fn create_flight_order(
        &self,
        priced_offer: &Value,
        traveler: &Traveler,
    ) -> Result<Value, ProviderError>;

    async fn hotels_by_city(&self, params: &SearchHotelParams) -> Result<Value, ProviderError>;

    /// Batched offer lookup for the given hotel ids.
    async fn hotel_offers(&self, hotel_ids: &[String]) -> Result<Value, ProviderError>;

    async fn transfer_offers(&self, params: &TransferSearchParams) -> Result<Value, ProviderError>;
}
