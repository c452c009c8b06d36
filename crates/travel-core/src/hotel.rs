//! Hotel search and booking records.

use serde::{Deserialize, Serialize};

use crate::flight::BookingStatus;
use crate::outcome::ToolOutcome;
use crate::value::{Address, Money};

/// Arguments of the `search_hotels` tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHotelParams {
    /// City IATA code, e.g. `PAR`.
    pub city_code: String,
    /// Radius in kilometres; the provider lookup uses 5 when absent.
    #[serde(default)]
    pub radius: Option<u32>,
    #[serde(default)]
    pub chain_codes: Option<Vec<String>>,
    #[serde(default)]
    pub rating: Option<Vec<String>>,
}

/// One bookable room offer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomDetails {
    #[serde(rename = "type")]
    pub room_type: String,
    pub description: String,
    pub bed_type: String,
    pub price: Money,
    pub refundable: bool,
    pub cancellation_policy: String,
}

/// A hotel with its room offers and headline (cheapest) price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelBasicInfo {
    pub hotel_id: String,
    pub name: String,
    pub rating: String,
    pub address: Address,
    pub amenities: Option<Vec<String>>,
    pub description: Option<String>,
    pub rooms: Option<Vec<RoomDetails>>,
    pub price: Money,
}

/// Outcome of a hotel search: either hotels or an error, never both.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HotelSearchResult {
    hotels: Option<Vec<HotelBasicInfo>>,
    error: Option<String>,
}

impl HotelSearchResult {
    pub fn found(hotels: Vec<HotelBasicInfo>) -> Self {
        Self {
            hotels: Some(hotels),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            hotels: None,
            error: Some(error.into()),
        }
    }

    pub fn hotels(&self) -> &[HotelBasicInfo] {
        self.hotels.as_deref().unwrap_or_default()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl ToolOutcome for HotelSearchResult {
    fn error_message(&self) -> Option<&str> {
        self.error()
    }
}

/// A guest named on a hotel booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HotelGuest {
    pub tid: u32,
    pub title: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
}

impl Default for HotelGuest {
    fn default() -> Self {
        Self {
            tid: 1,
            title: "MR".to_string(),
            first_name: "John".to_string(),
            last_name: "Smith".to_string(),
            phone: "+33679278416".to_string(),
            email: "bob.smith@email.com".to_string(),
        }
    }
}

fn default_guests() -> Vec<HotelGuest> {
    vec![HotelGuest::default()]
}

/// Arguments of the `book_hotel` tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotelBookingParams {
    pub hotel_name: String,
    pub address: Address,
    /// `YYYY-MM-DD`.
    pub check_in: String,
    /// `YYYY-MM-DD`.
    pub check_out: String,
    pub price: Money,
    #[serde(default = "default_guests")]
    pub guests: Vec<HotelGuest>,
}

/// Outcome of a hotel booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HotelBookingResult {
    booking_id: Option<String>,
    status: BookingStatus,
    error: Option<String>,
    hotel_name: Option<String>,
    address: Option<Address>,
    check_in: Option<String>,
    check_out: Option<String>,
    room_type: Option<String>,
    price: Option<Money>,
    guest_info: Option<Vec<HotelGuest>>,
}

impl HotelBookingResult {
    /// A confirmation echoing the requested stay.
    pub fn confirmed(params: HotelBookingParams) -> Self {
        Self {
            booking_id: None,
            status: BookingStatus::Confirmed,
            error: None,
            hotel_name: Some(params.hotel_name),
            address: Some(params.address),
            check_in: Some(params.check_in),
            check_out: Some(params.check_out),
            room_type: None,
            price: Some(params.price),
            guest_info: Some(params.guests),
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            booking_id: None,
            status: BookingStatus::Error,
            error: Some(error.into()),
            hotel_name: None,
            address: None,
            check_in: None,
            check_out: None,
            room_type: None,
            price: None,
            guest_info: None,
        }
    }

    pub fn is_confirmed(&self) -> bool {
        self.status == BookingStatus::Confirmed
    }

    pub fn hotel_name(&self) -> Option<&str> {
        self.hotel_name.as_deref()
    }

    pub fn check_in(&self) -> Option<&str> {
        self.check_in.as_deref()
    }

    pub fn check_out(&self) -> Option<&str> {
        self.check_out.as_deref()
    }

    pub fn price(&self) -> Option<&Money> {
        self.price.as_ref()
    }

    pub fn guest_info(&self) -> &[HotelGuest] {
        self.guest_info.as_deref().unwrap_or_default()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl ToolOutcome for HotelBookingResult {
    fn error_message(&self) -> Option<&str> {
        self.error()
    }
}
