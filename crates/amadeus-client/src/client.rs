//! HTTP transport for the Amadeus endpoints.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::Value;
use tracing::{debug, info};
use travel_core::flight::Traveler;
use travel_core::hotel::SearchHotelParams;
use travel_core::transfer::TransferSearchParams;
use travel_core::{BookingApi, FlightOfferQuery, ProviderError};

use crate::config::AmadeusConfig;
use crate::requests::{self, Query};

/// [`BookingApi`] backed by the Amadeus self-service REST API.
///
/// No timeout or retry policy is configured beyond reqwest's defaults.
pub struct AmadeusClient {
    client: Client,
    config: AmadeusConfig,
}

impl AmadeusClient {
    /// Create a client with the given configuration.
    pub fn new(config: AmadeusConfig) -> Result<Self, ProviderError> {
        if config.access_token.is_empty() {
            return Err(ProviderError::Configuration(
                "Amadeus access token is empty".to_string(),
            ));
        }

        let client = Client::builder().build().map_err(|e| {
            ProviderError::Configuration(format!("Failed to create HTTP client: {}", e))
        })?;

        info!(
            "AmadeusClient initialized for {} (currency {})",
            config.api_url, config.currency
        );

        Ok(Self { client, config })
    }

    /// Create a client from environment variables.
    pub fn from_env() -> Result<Self, ProviderError> {
        Self::new(AmadeusConfig::from_env()?)
    }

    /// Get the current configuration.
    pub fn config(&self) -> &AmadeusConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.api_url, path)
    }

    async fn get(&self, path: &str, query: &Query) -> Result<Value, ProviderError> {
        debug!("GET {} {:?}", path, query);

        let response = self
            .client
            .get(self.url(path))
            .bearer_auth(&self.config.access_token)
            .query(query)
            .send()
            .await
            .map_err(|e| ProviderError::Network(format!("GET {} failed: {}", path, e)))?;

        read_body(path, response).await
    }

    async fn post(&self, path: &str, body: &Value) -> Result<Value, ProviderError> {
        debug!("POST {}", path);

        let response = self
            .client
            .post(self.url(path))
            .bearer_auth(&self.config.access_token)
            .json(body)
            .send()
            .await
            .map_err(|e| ProviderError::Network(format!("POST {} failed: {}", path, e)))?;

        read_body(path, response).await
    }
}

/// Decode the JSON body whatever the status; error statuses carry an
/// `errors` array the caller interprets.
async fn read_body(path: &str, response: Response) -> Result<Value, ProviderError> {
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| ProviderError::Network(format!("Failed to read {} body: {}", path, e)))?;

    debug!("{} -> {} ({} bytes)", path, status.as_u16(), text.len());

    serde_json::from_str(&text).map_err(|e| {
        ProviderError::InvalidResponse(format!(
            "{} returned non-JSON body ({}): {}",
            path,
            status.as_u16(),
            e
        ))
    })
}

#[async_trait]
impl BookingApi for AmadeusClient {
    async fn search_flight_offers(&self, query: &FlightOfferQuery) -> Result<Value, ProviderError> {
        let params = requests::flight_offers_query(query, &self.config.currency);
        self.get(requests::FLIGHT_OFFERS_PATH, &params).await
    }

    async fn price_flight_offer(&self, offer: &Value) -> Result<Value, ProviderError> {
        self.post(requests::FLIGHT_PRICING_PATH, &requests::pricing_body(offer))
            .await
    }

    async fn create_flight_order(
        &self,
        priced_offer: &Value,
        traveler: &Traveler,
    ) -> Result<Value, ProviderError> {
        let body = requests::order_body(priced_offer, traveler)?;
        self.post(requests::FLIGHT_ORDERS_PATH, &body).await
    }

    async fn hotels_by_city(&self, params: &SearchHotelParams) -> Result<Value, ProviderError> {
        let query = requests::hotels_by_city_query(params);
        self.get(requests::HOTELS_BY_CITY_PATH, &query).await
    }

    async fn hotel_offers(&self, hotel_ids: &[String]) -> Result<Value, ProviderError> {
        let query = requests::hotel_offers_query(hotel_ids, &self.config.currency);
        self.get(requests::HOTEL_OFFERS_PATH, &query).await
    }

    async fn transfer_offers(&self, params: &TransferSearchParams) -> Result<Value, ProviderError> {
        let body = requests::transfer_body(params)?;
        self.post(requests::TRANSFER_OFFERS_PATH, &body).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_empty_token() {
        let result = AmadeusClient::new(AmadeusConfig::default());
        assert!(matches!(result, Err(ProviderError::Configuration(_))));
    }

    #[test]
    fn test_url_joins_base_and_path() {
        let client = AmadeusClient::new(
            AmadeusConfig::builder()
                .access_token("token")
                .api_url("https://api.amadeus.com/")
                .build(),
        )
        .unwrap();
        assert_eq!(
            client.url(requests::HOTEL_OFFERS_PATH),
            "https://api.amadeus.com/v3/shopping/hotel-offers"
        );
    }
}
