use travel_core::trip::{GetTripDetailsParams, TripDetailsResponse};

use super::BookingService;

impl BookingService {
    /// One trip by id, or every trip when the id is absent or empty.
    pub async fn get_trip_details(&self, params: &GetTripDetailsParams) -> TripDetailsResponse {
        match params.trip_id.as_deref().filter(|id| !id.is_empty()) {
            Some(trip_id) => match self.ledger.trip(trip_id).await {
                Some(trip) => TripDetailsResponse::trips(vec![trip]),
                None => TripDetailsResponse::not_found(trip_id),
            },
            None => TripDetailsResponse::trips(self.ledger.trips().await),
        }
    }
}
