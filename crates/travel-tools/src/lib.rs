//! Booking tools for the travel assistant.
//!
//! This crate provides the [`BookingService`] (flight, hotel and transfer
//! operations plus trip lookup), the in-memory [`TripLedger`], and a
//! [`ToolRegistry`] that exposes those operations to the model as seven
//! function tools.
//!
//! # Tools
//!
//! - [`tools::SearchFlights`] / [`tools::BookFlight`]
//! - [`tools::SearchHotels`] / [`tools::BookHotel`]
//! - [`tools::SearchTransfers`] / [`tools::BookTransfer`]
//! - [`tools::GetTripDetails`]
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use amadeus_client::AmadeusClient;
//! use travel_tools::{default_registry, BookingService, TripLedger};
//!
//! let api = Arc::new(AmadeusClient::from_env()?);
//! let service = Arc::new(BookingService::new(api, Arc::new(TripLedger::new())));
//! let registry = default_registry(service);
//!
//! let output = registry
//!     .dispatch("get_trip_details", "{}")
//!     .await?;
//! println!("{}", output.content);
//! ```

pub mod booking;
mod error;
mod ledger;
mod registry;
mod tool;
pub mod tools;

use std::sync::Arc;

pub use booking::BookingService;
pub use error::ToolError;
pub use ledger::TripLedger;
pub use registry::ToolRegistry;
pub use tool::{Tool, ToolArgs, ToolName, ToolOutput};

/// Registry with all seven booking tools bound to one service.
pub fn default_registry(service: Arc<BookingService>) -> ToolRegistry {
    let mut registry = ToolRegistry::new();

    registry.register(tools::SearchFlights::new(Arc::clone(&service)));
    registry.register(tools::BookFlight::new(Arc::clone(&service)));
    registry.register(tools::SearchHotels::new(Arc::clone(&service)));
    registry.register(tools::BookHotel::new(Arc::clone(&service)));
    registry.register(tools::GetTripDetails::new(Arc::clone(&service)));
    registry.register(tools::SearchTransfers::new(Arc::clone(&service)));
    registry.register(tools::BookTransfer::new(service));

    registry
}
