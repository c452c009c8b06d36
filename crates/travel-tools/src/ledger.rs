//! In-memory trip ledger.
//!
//! Trips are keyed by the calendar day a booking was confirmed
//! (`TRIP_YYYYMMDD`), so every booking made on one day lands in the same
//! trip whichever conversation made it. Nothing is persisted.

use chrono::{Local, NaiveDate};
use indexmap::IndexMap;
use tokio::sync::RwLock;
use tracing::debug;
use travel_core::trip::{trip_id_for, BookingRecord, TripBooking, TripDetails};

/// Confirmed bookings grouped by day, in the order they were recorded.
#[derive(Debug, Default)]
pub struct TripLedger {
    trips: RwLock<IndexMap<String, TripDetails>>,
}

impl TripLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a confirmed booking under today's trip, returning the trip id.
    pub async fn record(&self, record: BookingRecord) -> String {
        self.record_on(Local::now().date_naive(), record).await
    }

    /// Record a confirmed booking under the trip for `date`.
    pub async fn record_on(&self, date: NaiveDate, record: BookingRecord) -> String {
        let trip_id = trip_id_for(date);
        let kind = record.kind();

        let mut trips = self.trips.write().await;
        let trip = trips
            .entry(trip_id.clone())
            .or_insert_with(|| TripDetails::new(trip_id.clone()));
        trip.bookings.push(TripBooking::new(record, date));

        debug!(
            "Recorded {} booking, {} now has {} bookings",
            kind,
            trip_id,
            trip.bookings.len()
        );
        trip_id
    }

    pub async fn trip(&self, trip_id: &str) -> Option<TripDetails> {
        self.trips.read().await.get(trip_id).cloned()
    }

    /// Every trip, oldest first.
    pub async fn trips(&self) -> Vec<TripDetails> {
        self.trips.read().await.values().cloned().collect()
    }

    pub async fn len(&self) -> usize {
        self.trips.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.trips.read().await.is_empty()
    }
}
