//! Canned booking provider - fixed JSON bodies per endpoint.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};
use travel_core::flight::Traveler;
use travel_core::hotel::SearchHotelParams;
use travel_core::transfer::TransferSearchParams;
use travel_core::{BookingApi, FlightOfferQuery, ProviderError};

/// The booking provider endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookingCall {
    FlightOffers,
    FlightPricing,
    FlightOrder,
    HotelsByCity,
    HotelOffers,
    TransferOffers,
}

#[derive(Clone)]
enum Canned {
    Body(Value),
    Unreachable(String),
}

/// A [`BookingApi`] that answers from fixed bodies.
///
/// Endpoints without a canned answer fail with a network error, as an
/// unreachable provider would. Each call is recorded together with a JSON
/// view of what was sent.
#[derive(Default)]
pub struct CannedBookingApi {
    answers: Mutex<HashMap<BookingCall, Canned>>,
    calls: Mutex<Vec<(BookingCall, Value)>>,
}

impl CannedBookingApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `call` with `body`, which may carry an `errors` array.
    pub fn with(self, call: BookingCall, body: Value) -> Self {
        self.set(call, Canned::Body(body));
        self
    }

    /// Make `call` fail at the transport level.
    pub fn unreachable(self, call: BookingCall, reason: impl Into<String>) -> Self {
        self.set(call, Canned::Unreachable(reason.into()));
        self
    }

    fn set(&self, call: BookingCall, answer: Canned) {
        if let Ok(mut answers) = self.answers.lock() {
            answers.insert(call, answer);
        }
    }

    /// Every call made so far with its request view, oldest first.
    pub fn calls(&self) -> Vec<(BookingCall, Value)> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    /// How many times `call` was made.
    pub fn count(&self, call: BookingCall) -> usize {
        self.calls()
            .iter()
            .filter(|(made, _)| *made == call)
            .count()
    }

    /// Request views sent to `call`, oldest first.
    pub fn requests(&self, call: BookingCall) -> Vec<Value> {
        self.calls()
            .into_iter()
            .filter(|(made, _)| *made == call)
            .map(|(_, request)| request)
            .collect()
    }

    fn answer(&self, call: BookingCall, request: Value) -> Result<Value, ProviderError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push((call, request));
        }

        let answer = self
            .answers
            .lock()
            .ok()
            .and_then(|answers| answers.get(&call).cloned());

        match answer {
            Some(Canned::Body(body)) => Ok(body),
            Some(Canned::Unreachable(reason)) => Err(ProviderError::Network(reason)),
            None => Err(ProviderError::Network(format!(
                "no canned answer for {:?}",
                call
            ))),
        }
    }
}

#[async_trait]
impl BookingApi for CannedBookingApi {
    async fn search_flight_offers(&self, query: &FlightOfferQuery) -> Result<Value, ProviderError> {
        self.answer(
            BookingCall::FlightOffers,
            json!({
                "origin": query.origin,
                "destination": query.destination,
                "departureDate": query.departure_date,
                "max": query.max,
                "pricedInCurrency": query.priced_in_currency,
            }),
        )
    }

    async fn price_flight_offer(&self, offer: &Value) -> Result<Value, ProviderError> {
        self.answer(BookingCall::FlightPricing, offer.clone())
    }

    async fn create_flight_order(
        &self,
        priced_offer: &Value,
        traveler: &Traveler,
    ) -> Result<Value, ProviderError> {
        let traveler = serde_json::to_value(traveler)
            .map_err(|e| ProviderError::Encode(e.to_string()))?;
        self.answer(
            BookingCall::FlightOrder,
            json!({"offer": priced_offer, "traveler": traveler}),
        )
    }

    async fn hotels_by_city(&self, params: &SearchHotelParams) -> Result<Value, ProviderError> {
        let params =
            serde_json::to_value(params).map_err(|e| ProviderError::Encode(e.to_string()))?;
        self.answer(BookingCall::HotelsByCity, params)
    }

    async fn hotel_offers(&self, hotel_ids: &[String]) -> Result<Value, ProviderError> {
        self.answer(BookingCall::HotelOffers, json!(hotel_ids))
    }

    async fn transfer_offers(&self, params: &TransferSearchParams) -> Result<Value, ProviderError> {
        let params =
            serde_json::to_value(params).map_err(|e| ProviderError::Encode(e.to_string()))?;
        self.answer(BookingCall::TransferOffers, params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_canned_body_and_recording() {
        let api = CannedBookingApi::new().with(BookingCall::HotelOffers, json!({"data": []}));

        let body = api
            .hotel_offers(&["H1".to_string(), "H2".to_string()])
            .await
            .unwrap();
        assert_eq!(body, json!({"data": []}));
        assert_eq!(api.count(BookingCall::HotelOffers), 1);
        assert_eq!(api.requests(BookingCall::HotelOffers)[0], json!(["H1", "H2"]));
    }

    #[tokio::test]
    async fn test_unconfigured_and_unreachable() {
        let api = CannedBookingApi::new().unreachable(BookingCall::FlightPricing, "timeout");

        let result = api.price_flight_offer(&json!({})).await;
        assert!(matches!(result, Err(ProviderError::Network(r)) if r == "timeout"));

        let result = api.hotel_offers(&[]).await;
        assert!(matches!(result, Err(ProviderError::Network(_))));
        assert_eq!(api.calls().len(), 2);
    }
}
