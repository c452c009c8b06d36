//! Trip records accumulated from confirmed bookings.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::flight::BookingResult;
use crate::hotel::HotelBookingResult;
use crate::outcome::ToolOutcome;
use crate::transfer::TransferBookingResult;

/// Trip id for every booking confirmed on `date`: `TRIP_YYYYMMDD`.
///
/// All bookings confirmed on the same calendar day share one trip,
/// whichever conversation made them.
pub fn trip_id_for(date: NaiveDate) -> String {
    format!("TRIP_{}", date.format("%Y%m%d"))
}

/// Exactly one confirmed booking, tagged by kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "booking_type", rename_all = "lowercase")]
pub enum BookingRecord {
    Flight { flight_booking: BookingResult },
    Hotel { hotel_booking: HotelBookingResult },
    Transfer { transfer_booking: TransferBookingResult },
}

impl BookingRecord {
    pub fn kind(&self) -> &'static str {
        match self {
            BookingRecord::Flight { .. } => "flight",
            BookingRecord::Hotel { .. } => "hotel",
            BookingRecord::Transfer { .. } => "transfer",
        }
    }
}

impl From<BookingResult> for BookingRecord {
    fn from(flight_booking: BookingResult) -> Self {
        BookingRecord::Flight { flight_booking }
    }
}

impl From<HotelBookingResult> for BookingRecord {
    fn from(hotel_booking: HotelBookingResult) -> Self {
        BookingRecord::Hotel { hotel_booking }
    }
}

impl From<TransferBookingResult> for BookingRecord {
    fn from(transfer_booking: TransferBookingResult) -> Self {
        BookingRecord::Transfer { transfer_booking }
    }
}

/// A booking as stored in a trip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripBooking {
    #[serde(flatten)]
    pub record: BookingRecord,
    /// `YYYY-MM-DD` the booking was recorded.
    pub booking_date: String,
}

impl TripBooking {
    pub fn new(record: BookingRecord, recorded_on: NaiveDate) -> Self {
        Self {
            record,
            booking_date: recorded_on.format("%Y-%m-%d").to_string(),
        }
    }
}

/// A trip and its bookings in the order they were confirmed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripDetails {
    pub trip_id: String,
    pub bookings: Vec<TripBooking>,
}

impl TripDetails {
    pub fn new(trip_id: impl Into<String>) -> Self {
        Self {
            trip_id: trip_id.into(),
            bookings: Vec::new(),
        }
    }
}

/// Arguments of the `get_trip_details` tool.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GetTripDetailsParams {
    #[serde(default)]
    pub trip_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripDetailsResponse {
    pub trips: Vec<TripDetails>,
    pub error: Option<String>,
}

impl TripDetailsResponse {
    pub fn trips(trips: Vec<TripDetails>) -> Self {
        Self { trips, error: None }
    }

    /// Empty trip list with a "not found" message.
    pub fn not_found(trip_id: &str) -> Self {
        Self {
            trips: Vec::new(),
            error: Some(format!("Trip {} not found", trip_id)),
        }
    }
}

impl ToolOutcome for TripDetailsResponse {
    fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hotel::HotelBookingParams;
    use crate::value::{Address, Money};

    #[test]
    fn test_trip_id_format() {
        let date = NaiveDate::from_ymd_opt(2030, 1, 5).unwrap();
        assert_eq!(trip_id_for(date), "TRIP_20300105");
    }

    #[test]
    fn test_trip_booking_serializes_with_type_tag() {
        let hotel = HotelBookingResult::confirmed(HotelBookingParams {
            hotel_name: "Hotel Lutetia".to_string(),
            address: Address::default(),
            check_in: "2030-06-01".to_string(),
            check_out: "2030-06-04".to_string(),
            price: Money::new("420.00", "EUR"),
            guests: vec![],
        });
        let booking = TripBooking::new(hotel.into(), NaiveDate::from_ymd_opt(2030, 5, 20).unwrap());
        let json = serde_json::to_value(&booking).unwrap();

        assert_eq!(json["booking_type"], "hotel");
        assert_eq!(json["booking_date"], "2030-05-20");
        assert_eq!(json["hotel_booking"]["hotel_name"], "Hotel Lutetia");
        assert_eq!(json["hotel_booking"]["status"], "confirmed");
    }

    #[test]
    fn test_not_found_response() {
        let response = TripDetailsResponse::not_found("TRIP_19990101");
        assert!(response.trips.is_empty());
        assert_eq!(response.error_message(), Some("Trip TRIP_19990101 not found"));
    }
}
