//! Airport transfer search and booking records.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::flight::BookingStatus;
use crate::outcome::ToolOutcome;
use crate::value::Money;

/// Error value telling the model to repeat the search with `endGeoCode`.
pub const GEOCODES_REQUIRED: &str = "GEOCODES_REQUIRED";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentStop {
    pub local_date_time: String,
    pub iata_code: String,
}

fn flight_transport() -> String {
    "FLIGHT".to_string()
}

/// The inbound flight a transfer connects to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportSegment {
    #[serde(default = "flight_transport")]
    pub transportation_type: String,
    pub transportation_number: String,
    pub departure: SegmentStop,
    pub arrival: SegmentStop,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PassengerCharacteristic {
    pub passenger_type_code: String,
    pub age: u32,
}

impl Default for PassengerCharacteristic {
    fn default() -> Self {
        Self {
            passenger_type_code: "ADT".to_string(),
            age: 20,
        }
    }
}

fn private_transfer() -> String {
    "PRIVATE".to_string()
}

/// Arguments of the `search_transfers` tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferSearchParams {
    /// Airport IATA code.
    pub start_location_code: String,
    pub end_address_line: String,
    pub end_city_name: String,
    pub end_zip_code: String,
    pub end_country_code: String,
    /// Hotel name.
    pub end_name: String,
    #[serde(default = "private_transfer")]
    pub transfer_type: String,
    /// ISO-8601 local time.
    pub start_date_time: String,
    pub passengers: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// `latitude,longitude`, passed to the provider as given.
    pub end_geo_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_connected_segment: Option<TransportSegment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passenger_characteristics: Option<Vec<PassengerCharacteristic>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    #[serde(rename = "type")]
    pub vehicle_type: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferProvider {
    pub name: String,
    pub code: String,
}

/// A priced transfer offer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferOption {
    pub id: String,
    /// Wall-clock time between pickup and drop-off, e.g. `0:45:00`.
    pub duration: String,
    pub price: Money,
    pub vehicle: Vehicle,
    pub provider: TransferProvider,
}

/// Outcome of a transfer search: either offers or an error, never both.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransferSearchResult {
    transfers: Option<Vec<TransferOption>>,
    error: Option<String>,
}

impl TransferSearchResult {
    pub fn found(transfers: Vec<TransferOption>) -> Self {
        Self {
            transfers: Some(transfers),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            transfers: None,
            error: Some(error.into()),
        }
    }

    /// The provider needs coordinates for the drop-off address.
    pub fn geocodes_required() -> Self {
        Self::failed(GEOCODES_REQUIRED)
    }

    pub fn transfers(&self) -> &[TransferOption] {
        self.transfers.as_deref().unwrap_or_default()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl ToolOutcome for TransferSearchResult {
    fn error_message(&self) -> Option<&str> {
        self.error()
    }
}

/// Arguments of the `book_transfer` tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferBookingParams {
    pub transfer_id: String,
    /// Airport IATA code.
    pub start_location: String,
    /// Hotel name and address.
    pub end_location: String,
    pub start_time: String,
    pub passengers: u32,
    pub price: Money,
    pub vehicle_type: String,
    pub provider_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferDetails {
    pub transfer_id: String,
    pub start_location: String,
    pub end_location: String,
    pub start_time: String,
    pub vehicle_type: String,
    pub provider: String,
}

/// Outcome of a transfer booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransferBookingResult {
    booking_id: Option<String>,
    status: BookingStatus,
    error: Option<String>,
    transfer_details: Option<TransferDetails>,
    price: Option<Money>,
}

impl TransferBookingResult {
    pub fn confirmed(booking_id: impl Into<String>, params: TransferBookingParams) -> Self {
        let details = TransferDetails {
            transfer_id: params.transfer_id,
            start_location: params.start_location,
            end_location: params.end_location,
            start_time: params.start_time,
            vehicle_type: params.vehicle_type,
            provider: params.provider_name,
        };
        Self {
            booking_id: Some(booking_id.into()),
            status: BookingStatus::Confirmed,
            error: None,
            transfer_details: Some(details),
            price: Some(params.price),
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            booking_id: None,
            status: BookingStatus::Error,
            error: Some(error.into()),
            transfer_details: None,
            price: None,
        }
    }

    pub fn is_confirmed(&self) -> bool {
        self.status == BookingStatus::Confirmed
    }

    pub fn booking_id(&self) -> Option<&str> {
        self.booking_id.as_deref()
    }

    pub fn transfer_details(&self) -> Option<&TransferDetails> {
        self.transfer_details.as_ref()
    }

    pub fn price(&self) -> Option<&Money> {
        self.price.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl ToolOutcome for TransferBookingResult {
    fn error_message(&self) -> Option<&str> {
        self.error()
    }
}

const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
];

/// Parse a provider timestamp as naive local time, ignoring a `Z` suffix.
pub fn parse_naive_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let cleaned = raw.replace('Z', "");
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(&cleaned, fmt).ok())
}

/// Render a duration as `[D day[s], ]H:MM:SS[.ffffff]`.
pub fn format_elapsed(delta: Duration) -> String {
    const MICROS_PER_DAY: i64 = 86_400_000_000;

    let total = delta
        .num_microseconds()
        .unwrap_or_else(|| delta.num_seconds().saturating_mul(1_000_000));
    let days = total.div_euclid(MICROS_PER_DAY);
    let rest = total.rem_euclid(MICROS_PER_DAY);
    let seconds = rest / 1_000_000;
    let micros = rest % 1_000_000;

    let mut out = String::new();
    if days != 0 {
        let plural = if days.abs() == 1 { "" } else { "s" };
        out.push_str(&format!("{} day{}, ", days, plural));
    }
    out.push_str(&format!(
        "{}:{:02}:{:02}",
        seconds / 3600,
        seconds % 3600 / 60,
        seconds % 60
    ));
    if micros != 0 {
        out.push_str(&format!(".{:06}", micros));
    }
    out
}

/// Wall-clock difference between two provider timestamps, no timezone
/// normalization.
pub fn elapsed_between(start: &str, end: &str) -> Option<String> {
    let start = parse_naive_timestamp(start)?;
    let end = parse_naive_timestamp(end)?;
    Some(format_elapsed(end - start))
}
