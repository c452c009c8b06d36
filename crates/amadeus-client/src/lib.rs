//! Amadeus self-service API implementation of [`BookingApi`].
//!
//! The client is a thin transport: it builds the request shapes the
//! Amadeus endpoints expect, attaches the bearer token and hands back the
//! JSON body untouched. Interpreting `errors` arrays and projecting offers
//! into travel records happens in `travel-tools`.
//!
//! The access token is obtained out of band and read from the environment;
//! this crate never refreshes it.
//!
//! # Usage
//!
//! ```rust,no_run
//! use amadeus_client::AmadeusClient;
//! use travel_core::{BookingApi, FlightOfferQuery};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = AmadeusClient::from_env()?;
//!     let body = client
//!         .search_flight_offers(&FlightOfferQuery {
//!             origin: "LAX".to_string(),
//!             destination: "JFK".to_string(),
//!             departure_date: "2030-01-15".to_string(),
//!             max: 6,
//!             priced_in_currency: true,
//!         })
//!         .await?;
//!     println!("{}", body);
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod requests;

pub use client::AmadeusClient;
pub use config::{AmadeusConfig, AmadeusConfigBuilder, DEFAULT_API_URL, DEFAULT_CURRENCY};

pub use travel_core::BookingApi;
