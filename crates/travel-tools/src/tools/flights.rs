//! Flight search and booking tools.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::debug;
use travel_core::flight::{BookFlightParams, FlightSearchParams};

use crate::booking::BookingService;
use crate::error::ToolError;
use crate::tool::{Tool, ToolArgs, ToolName, ToolOutput};

/// Search flight offers between two airports on a date.
pub struct SearchFlights {
    service: Arc<BookingService>,
}

impl SearchFlights {
    pub fn new(service: Arc<BookingService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl Tool for SearchFlights {
    fn name(&self) -> ToolName {
        ToolName::SearchFlights
    }

    fn description(&self) -> &str {
        "Search for available flights between airports using IATA codes"
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "origin": {
                    "type": "string",
                    "description": "Origin airport IATA code (3 letters, e.g., 'LAX' for Los Angeles)"
                },
                "destination": {
                    "type": "string",
                    "description": "Destination airport IATA code (3 letters, e.g., 'JFK' for New York)"
                },
                "departure_date": {
                    "type": "string",
                    "description": "Departure date in YYYY-MM-DD format"
                }
            },
            "required": ["origin", "destination", "departure_date"]
        })
    }

    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError> {
        let params: FlightSearchParams = args.parse()?;
        debug!(
            "Searching flights {} -> {} on {}",
            params.origin, params.destination, params.departure_date
        );
        ToolOutput::from_outcome(&self.service.search_flights(&params).await)
    }
}

/// Book a previously found flight offer.
pub struct BookFlight {
    service: Arc<BookingService>,
}

impl BookFlight {
    pub fn new(service: Arc<BookingService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl Tool for BookFlight {
    fn name(&self) -> ToolName {
        ToolName::BookFlight
    }

    fn description(&self) -> &str {
        "Book a flight for a traveler"
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "flight_id": {
                    "type": "string",
                    "description": "ID of the selected flight"
                },
                "origin": {
                    "type": "string",
                    "description": "Origin airport IATA code"
                },
                "destination": {
                    "type": "string",
                    "description": "Destination airport IATA code"
                },
                "departure_date": {
                    "type": "string",
                    "description": "Departure date in YYYY-MM-DD format"
                },
                "traveler": {
                    "type": "object",
                    "properties": {
                        "dateOfBirth": {
                            "type": "string",
                            "description": "Date of birth in YYYY-MM-DD format"
                        },
                        "name": {
                            "type": "object",
                            "properties": {
                                "firstName": {
                                    "type": "string",
                                    "description": "Traveler's first name"
                                },
                                "lastName": {
                                    "type": "string",
                                    "description": "Traveler's last name"
                                }
                            },
                            "required": ["firstName", "lastName"]
                        },
                        "gender": {
                            "type": "string",
                            "description": "Traveler's gender (MALE or FEMALE)",
                            "enum": ["MALE", "FEMALE"]
                        },
                        "contact": {
                            "type": "object",
                            "properties": {
                                "emailAddress": {
                                    "type": "string",
                                    "description": "Traveler's email address"
                                },
                                "phones": {
                                    "type": "array",
                                    "items": {
                                        "type": "object",
                                        "properties": {
                                            "countryCallingCode": {
                                                "type": "string",
                                                "description": "Country calling code (e.g., '1' for USA)"
                                            },
                                            "number": {
                                                "type": "string",
                                                "description": "Phone number without country code"
                                            }
                                        },
                                        "required": ["countryCallingCode", "number"]
                                    }
                                }
                            },
                            "required": ["emailAddress", "phones"]
                        }
                    },
                    "required": ["dateOfBirth", "name", "gender", "contact"]
                }
            },
            "required": ["flight_id", "origin", "destination", "departure_date", "traveler"]
        })
    }

    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError> {
        let params: BookFlightParams = args.parse()?;
        debug!("Booking flight offer {}", params.flight_id);
        ToolOutput::from_outcome(&self.service.book_flight(params).await)
    }
}
