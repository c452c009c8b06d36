//! Airport transfer tools.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};
use travel_core::transfer::{TransferBookingParams, TransferSearchParams};

use crate::booking::BookingService;
use crate::error::ToolError;
use crate::tool::{Tool, ToolArgs, ToolName, ToolOutput};

/// Search transfers from an airport to a hotel address.
///
/// Answers `GEOCODES_REQUIRED` when the provider cannot place the address;
/// the model is expected to retry with `endGeoCode`.
pub struct SearchTransfers {
    service: Arc<BookingService>,
}

impl SearchTransfers {
    pub fn new(service: Arc<BookingService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl Tool for SearchTransfers {
    fn name(&self) -> ToolName {
        ToolName::SearchTransfers
    }

    fn description(&self) -> &str {
        "Search for available transfers from airport to hotel"
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "startLocationCode": {
                    "type": "string",
                    "description": "Airport IATA code (e.g., 'CDG')"
                },
                "endAddressLine": {
                    "type": "string",
                    "description": "Hotel street address"
                },
                "endCityName": {
                    "type": "string",
                    "description": "Hotel city"
                },
                "endZipCode": {
                    "type": "string",
                    "description": "Hotel postal code"
                },
                "endCountryCode": {
                    "type": "string",
                    "description": "Hotel country code (e.g., 'FR')"
                },
                "endName": {
                    "type": "string",
                    "description": "Hotel name"
                },
                "startDateTime": {
                    "type": "string",
                    "description": "Transfer start time in ISO format (YYYY-MM-DDTHH:mm:ss)"
                },
                "passengers": {
                    "type": "integer",
                    "description": "Number of passengers"
                },
                "endGeoCode": {
                    "type": "string",
                    "description": "Hotel coordinates in 'latitude,longitude' format (e.g., '34.0522,-118.2437')",
                    "pattern": "^-?\\d+\\.\\d+,-?\\d+\\.\\d+$"
                }
            },
            "required": [
                "startLocationCode", "endAddressLine", "endCityName", "endZipCode",
                "endCountryCode", "endName", "startDateTime", "passengers"
            ]
        })
    }

    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError> {
        let params: TransferSearchParams = args.parse()?;
        ToolOutput::from_outcome(&self.service.search_transfers(&params).await)
    }
}

pub struct BookTransfer {
    service: Arc<BookingService>,
}

impl BookTransfer {
    pub fn new(service: Arc<BookingService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl Tool for BookTransfer {
    fn name(&self) -> ToolName {
        ToolName::BookTransfer
    }

    fn description(&self) -> &str {
        "Book an airport transfer service"
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "transfer_id": {
                    "type": "string",
                    "description": "ID of the selected transfer offer"
                },
                "start_location": {
                    "type": "string",
                    "description": "Airport IATA code"
                },
                "end_location": {
                    "type": "string",
                    "description": "Hotel name and address"
                },
                "start_time": {
                    "type": "string",
                    "description": "Transfer start time in ISO format"
                },
                "passengers": {
                    "type": "integer",
                    "description": "Number of passengers"
                },
                "price": {
                    "type": "object",
                    "properties": {
                        "amount": {"type": "string"},
                        "currency": {"type": "string"}
                    }
                },
                "vehicle_type": {
                    "type": "string",
                    "description": "Type of vehicle"
                },
                "provider_name": {
                    "type": "string",
                    "description": "Name of the transfer service provider"
                }
            },
            "required": [
                "transfer_id", "start_location", "end_location", "start_time",
                "passengers", "price", "vehicle_type", "provider_name"
            ]
        })
    }

    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError> {
        let params: TransferBookingParams = args.parse()?;
        ToolOutput::from_outcome(&self.service.book_transfer(params).await)
    }
}
