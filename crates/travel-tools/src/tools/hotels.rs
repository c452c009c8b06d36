//! Hotel search and booking tools.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};
use travel_core::hotel::{HotelBookingParams, SearchHotelParams};

use crate::booking::BookingService;
use crate::error::ToolError;
use crate::tool::{Tool, ToolArgs, ToolName, ToolOutput};

pub struct SearchHotels {
    service: Arc<BookingService>,
}

impl SearchHotels {
    pub fn new(service: Arc<BookingService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl Tool for SearchHotels {
    fn name(&self) -> ToolName {
        ToolName::SearchHotels
    }

    fn description(&self) -> &str {
        "Search for available hotels in a city"
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "cityCode": {
                    "type": "string",
                    "description": "City IATA code (e.g., 'PAR' for Paris)"
                },
                "radius": {
                    "type": "integer",
                    "description": "Search radius in KM from city center",
                    "default": 5
                },
                "chainCodes": {
                    "type": "array",
                    "items": {"type": "string"},
                    "description": "List of hotel chain codes to filter by"
                },
                "rating": {
                    "type": "array",
                    "items": {"type": "string"},
                    "description": "List of hotel ratings to filter by"
                }
            },
            "required": ["cityCode"]
        })
    }

    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError> {
        let params: SearchHotelParams = args.parse()?;
        ToolOutput::from_outcome(&self.service.search_hotels(&params).await)
    }
}

pub struct BookHotel {
    service: Arc<BookingService>,
}

impl BookHotel {
    pub fn new(service: Arc<BookingService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl Tool for BookHotel {
    fn name(&self) -> ToolName {
        ToolName::BookHotel
    }

    fn description(&self) -> &str {
        "Book a hotel. Requires check-in and check-out dates. Requires hotel details from search results."
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "hotel_name": {
                    "type": "string",
                    "description": "Name of the hotel from search results"
                },
                "address": {
                    "type": "object",
                    "description": "Full address of the hotel from search results",
                    "properties": {
                        "cityName": {"type": "string"},
                        "countryCode": {"type": "string"},
                        "stateCode": {"type": "string"},
                        "postalCode": {"type": "string"},
                        "address": {"type": "string"}
                    }
                },
                "check_in": {
                    "type": "string",
                    "description": "Check-in date in YYYY-MM-DD format"
                },
                "check_out": {
                    "type": "string",
                    "description": "Check-out date in YYYY-MM-DD format"
                },
                "price": {
                    "type": "object",
                    "properties": {
                        "amount": {"type": "string"},
                        "currency": {"type": "string"}
                    }
                },
                "guests": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "firstName": {"type": "string"},
                            "lastName": {"type": "string"}
                        }
                    }
                }
            },
            "required": ["hotel_name", "address", "check_in", "check_out", "price", "guests"]
        })
    }

    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError> {
        let params: HotelBookingParams = args.parse()?;
        ToolOutput::from_outcome(&self.service.book_hotel(params).await)
    }
}
