use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};
use travel_core::trip::GetTripDetailsParams;

use crate::booking::BookingService;
use crate::error::ToolError;
use crate::tool::{Tool, ToolArgs, ToolName, ToolOutput};

/// Read trips from the ledger.
pub struct GetTripDetails {
    service: Arc<BookingService>,
}

impl GetTripDetails {
    pub fn new(service: Arc<BookingService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl Tool for GetTripDetails {
    fn name(&self) -> ToolName {
        ToolName::GetTripDetails
    }

    fn description(&self) -> &str {
        "Get details of all booked flights, hotels, and transfers for a trip"
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "trip_id": {
                    "type": "string",
                    "description": "Optional trip ID. If not provided, returns all trips."
                }
            }
        })
    }

    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError> {
        let params: GetTripDetailsParams = args.parse()?;
        ToolOutput::from_outcome(&self.service.get_trip_details(&params).await)
    }
}
