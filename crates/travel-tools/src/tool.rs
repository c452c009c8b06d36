//! Tool trait definition and types.

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use travel_core::{ToolOutcome, ToolSchema};

use crate::error::ToolError;

/// The closed set of tools the model may call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolName {
    SearchFlights,
    BookFlight,
    SearchHotels,
    BookHotel,
    GetTripDetails,
    SearchTransfers,
    BookTransfer,
}

impl ToolName {
    pub const ALL: [ToolName; 7] = [
        ToolName::SearchFlights,
        ToolName::BookFlight,
        ToolName::SearchHotels,
        ToolName::BookHotel,
        ToolName::GetTripDetails,
        ToolName::SearchTransfers,
        ToolName::BookTransfer,
    ];

    /// Wire name used in tool schemas and tool calls.
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolName::SearchFlights => "search_flights",
            ToolName::BookFlight => "book_flight",
            ToolName::SearchHotels => "search_hotels",
            ToolName::BookHotel => "book_hotel",
            ToolName::GetTripDetails => "get_trip_details",
            ToolName::SearchTransfers => "search_transfers",
            ToolName::BookTransfer => "book_transfer",
        }
    }
}

impl FromStr for ToolName {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ToolName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| ToolError::UnknownTool(s.to_string()))
    }
}

impl fmt::Display for ToolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw arguments of a tool call.
#[derive(Debug, Clone)]
pub struct ToolArgs {
    tool: ToolName,
    value: Value,
}

impl ToolArgs {
    /// Wrap an already-decoded argument object.
    pub fn new(tool: ToolName, value: Value) -> Self {
        Self { tool, value }
    }

    /// Decode the JSON argument string produced by the model.
    ///
    /// An empty string is treated as `{}`.
    pub fn from_json(tool: ToolName, arguments: &str) -> Result<Self, ToolError> {
        let trimmed = arguments.trim();
        let value = if trimmed.is_empty() {
            Value::Object(Default::default())
        } else {
            serde_json::from_str(trimmed).map_err(|e| ToolError::InvalidArguments {
                tool: tool.to_string(),
                reason: e.to_string(),
            })?
        };
        Ok(Self::new(tool, value))
    }

    /// Construct the typed parameter object for this tool.
    pub fn parse<T: DeserializeOwned>(&self) -> Result<T, ToolError> {
        T::deserialize(&self.value).map_err(|e| ToolError::InvalidArguments {
            tool: self.tool.to_string(),
            reason: e.to_string(),
        })
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}

/// Output from a tool execution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolOutput {
    /// The serialized result, fed back to the model as a tool message.
    pub content: String,
    /// User-facing error carried by the result, if any.
    pub error: Option<String>,
}

impl ToolOutput {
    /// Serialize a typed result, lifting its error message.
    pub fn from_outcome<R: ToolOutcome>(outcome: &R) -> Result<Self, ToolError> {
        Ok(Self {
            content: serde_json::to_string(outcome)?,
            error: outcome
                .error_message()
                .filter(|e| !e.is_empty())
                .map(str::to_string),
        })
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Trait for tools the model can call.
#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> ToolName;

    /// Human-readable description shown to the model.
    fn description(&self) -> &str;

    /// JSON schema of the tool's arguments.
    fn parameters(&self) -> Value;

    /// The tool definition advertised to the model.
    fn schema(&self) -> ToolSchema {
        ToolSchema::function(self.name().as_str(), self.description(), self.parameters())
    }

    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError>;
}
