//! Flight search and booking records.
//!
//! Traveler, document and payment records carry the default literals used
//! whenever the model omits them, so a booking can always be submitted with
//! a complete traveler payload.

use serde::{Deserialize, Serialize};

use crate::outcome::ToolOutcome;
use crate::value::Money;

/// Arguments of the `search_flights` tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightSearchParams {
    /// Origin airport IATA code.
    pub origin: String,
    /// Destination airport IATA code.
    pub destination: String,
    /// `YYYY-MM-DD`.
    pub departure_date: String,
}

/// One end of a flight segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentEndpoint {
    pub time: String,
    pub airport: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightSegment {
    pub carrier: String,
    pub number: String,
    pub departure: SegmentEndpoint,
    pub arrival: SegmentEndpoint,
}

/// The itinerary of an offer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightInfo {
    pub segments: Vec<FlightSegment>,
    pub total_duration: String,
    /// Always `segments.len() - 1`.
    pub stops: usize,
}

impl FlightInfo {
    pub fn new(segments: Vec<FlightSegment>, total_duration: impl Into<String>) -> Self {
        let stops = segments.len().saturating_sub(1);
        Self {
            segments,
            total_duration: total_duration.into(),
            stops,
        }
    }
}

pub type FlightPrice = Money;

/// A priced flight offer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flight {
    pub price: FlightPrice,
    pub flight: FlightInfo,
}

/// Outcome of a flight search: either flights or an error, never both.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlightSearchResult {
    flights: Option<Vec<Flight>>,
    error: Option<String>,
}

impl FlightSearchResult {
    pub fn found(flights: Vec<Flight>) -> Self {
        Self {
            flights: Some(flights),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            flights: None,
            error: Some(error.into()),
        }
    }

    pub fn flights(&self) -> &[Flight] {
        self.flights.as_deref().unwrap_or_default()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl ToolOutcome for FlightSearchResult {
    fn error_message(&self) -> Option<&str> {
        self.error()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelerName {
    pub first_name: String,
    pub last_name: String,
}

fn mobile() -> String {
    "MOBILE".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Phone {
    #[serde(default = "mobile")]
    pub device_type: String,
    pub country_calling_code: String,
    pub number: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub email_address: String,
    pub phones: Vec<Phone>,
}

/// Identity document sent with a flight order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Document {
    pub document_type: String,
    pub birth_place: String,
    pub issuance_location: String,
    pub issuance_date: String,
    pub number: String,
    pub expiry_date: String,
    pub issuance_country: String,
    pub validity_country: String,
    pub nationality: String,
    pub holder: String,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            document_type: "PASSPORT".to_string(),
            birth_place: "Boston".to_string(),
            issuance_location: "Boston".to_string(),
            issuance_date: "2020-03-12".to_string(),
            number: "00000000".to_string(),
            expiry_date: "2030-04-14".to_string(),
            issuance_country: "US".to_string(),
            validity_country: "US".to_string(),
            nationality: "US".to_string(),
            holder: "true".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardInfo {
    pub vendor_code: String,
    pub card_number: String,
    /// `YYYY-MM`.
    pub expiry_date: String,
    pub security_code: String,
    pub holder_name: String,
}

impl Default for CardInfo {
    fn default() -> Self {
        Self {
            vendor_code: "VI".to_string(),
            card_number: "4111111111111111".to_string(),
            expiry_date: "2025-12".to_string(),
            security_code: "123".to_string(),
            holder_name: "John Smith".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BillingAddress {
    pub lines: Vec<String>,
    pub postal_code: String,
    pub city_name: String,
    pub country_code: String,
    pub state_code: Option<String>,
}

impl Default for BillingAddress {
    fn default() -> Self {
        Self {
            lines: vec!["123 Main St".to_string()],
            postal_code: "12345".to_string(),
            city_name: "Boston".to_string(),
            country_code: "US".to_string(),
            state_code: Some("MA".to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentInfo {
    pub method: String,
    pub card: CardInfo,
    pub billing_address: BillingAddress,
}

impl Default for PaymentInfo {
    fn default() -> Self {
        Self {
            method: "creditCard".to_string(),
            card: CardInfo::default(),
            billing_address: BillingAddress::default(),
        }
    }
}

/// The passenger on a flight order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Traveler {
    pub id: String,
    pub date_of_birth: String,
    pub name: TravelerName,
    /// `MALE` or `FEMALE`, passed to the provider as given.
    pub gender: String,
    pub contact: Contact,
    pub documents: Vec<Document>,
    pub payment: PaymentInfo,
}

impl Default for Traveler {
    fn default() -> Self {
        Self {
            id: "1".to_string(),
            date_of_birth: "2000-01-16".to_string(),
            name: TravelerName {
                first_name: "John".to_string(),
                last_name: "Smith".to_string(),
            },
            gender: "MALE".to_string(),
            contact: Contact {
                email_address: "john@smith.com".to_string(),
                phones: vec![Phone {
                    device_type: mobile(),
                    country_calling_code: "1".to_string(),
                    number: "4792781794".to_string(),
                }],
            },
            documents: vec![Document::default()],
            payment: PaymentInfo::default(),
        }
    }
}

/// Arguments of the `book_flight` tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookFlightParams {
    /// Offer id from a previous search.
    pub flight_id: String,
    pub origin: String,
    pub destination: String,
    pub departure_date: String,
    #[serde(default)]
    pub traveler: Traveler,
}

/// A segment of a confirmed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookedSegment {
    /// Carrier code followed by the flight number, e.g. `AA100`.
    pub flight_number: String,
    pub departure: String,
    pub arrival: String,
    pub origin: String,
    pub destination: String,
}

/// Normalized summary of a confirmed flight order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightDetails {
    pub segments: Vec<BookedSegment>,
    pub total_segments: usize,
    /// First segment's departure airport.
    pub origin: String,
    /// Last segment's arrival airport.
    pub destination: String,
    pub departure: String,
    pub arrival: String,
}

impl FlightDetails {
    /// Summarize an ordered, non-empty segment list.
    pub fn from_segments(segments: Vec<BookedSegment>) -> Option<Self> {
        let first = segments.first()?;
        let last = segments.last()?;
        Some(Self {
            total_segments: segments.len(),
            origin: first.origin.clone(),
            destination: last.destination.clone(),
            departure: first.departure.clone(),
            arrival: last.arrival.clone(),
            segments,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Confirmed,
    Error,
}

/// Provider call of the three-step flight booking that failed.
///
/// Completed steps are never rolled back; this only reports where the
/// sequence stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStep {
    Search,
    Pricing,
    Order,
}

/// Outcome of a flight booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingResult {
    booking_reference: Option<String>,
    status: BookingStatus,
    error: Option<String>,
    price: Option<String>,
    flight_details: Option<FlightDetails>,
    traveler_info: Option<Traveler>,
    #[serde(skip_serializing_if = "Option::is_none")]
    failed_step: Option<BookingStep>,
}

impl BookingResult {
    pub fn confirmed(
        booking_reference: impl Into<String>,
        price: impl Into<String>,
        flight_details: FlightDetails,
        traveler: Traveler,
    ) -> Self {
        Self {
            booking_reference: Some(booking_reference.into()),
            status: BookingStatus::Confirmed,
            error: None,
            price: Some(price.into()),
            flight_details: Some(flight_details),
            traveler_info: Some(traveler),
            failed_step: None,
        }
    }

    pub fn failed(step: BookingStep, error: impl Into<String>) -> Self {
        Self {
            booking_reference: None,
            status: BookingStatus::Error,
            error: Some(error.into()),
            price: None,
            flight_details: None,
            traveler_info: None,
            failed_step: Some(step),
        }
    }

    pub fn status(&self) -> BookingStatus {
        self.status
    }

    pub fn is_confirmed(&self) -> bool {
        self.status == BookingStatus::Confirmed
    }

    pub fn booking_reference(&self) -> Option<&str> {
        self.booking_reference.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn price(&self) -> Option<&str> {
        self.price.as_deref()
    }

    pub fn flight_details(&self) -> Option<&FlightDetails> {
        self.flight_details.as_ref()
    }

    pub fn traveler_info(&self) -> Option<&Traveler> {
        self.traveler_info.as_ref()
    }

    pub fn failed_step(&self) -> Option<BookingStep> {
        self.failed_step
    }
}

impl ToolOutcome for BookingResult {
    fn error_message(&self) -> Option<&str> {
        self.error()
    }
}
