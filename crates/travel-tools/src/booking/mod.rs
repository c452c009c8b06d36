//! Booking operations against the provider and the trip ledger.
//!
//! Every operation returns a result value; provider failures are folded into
//! the result's `error` field and never escape as `Err`.

mod envelope;
mod flights;
mod hotels;
pub mod messages;
mod transfers;
mod trips;

use std::sync::Arc;

use travel_core::BookingApi;

use crate::ledger::TripLedger;

/// The booking operations behind the tools.
pub struct BookingService {
    api: Arc<dyn BookingApi>,
    ledger: Arc<TripLedger>,
}

impl BookingService {
    pub fn new(api: Arc<dyn BookingApi>, ledger: Arc<TripLedger>) -> Self {
        Self { api, ledger }
    }

    pub fn ledger(&self) -> &Arc<TripLedger> {
        &self.ledger
    }
}
