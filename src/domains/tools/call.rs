//! Typed tool calls.
//!
//! A [`ToolCall`] is a `(name, arguments)` pair parsed into one variant per
//! tool, so argument shape is checked once before any engine runs.

use rmcp::model::CallToolResult;
use serde::Deserialize;
use tracing::debug;

use super::ToolError;
use super::definitions::{
    BookingStatusParams, BookingStatusTool, CheckAvailabilityParams, CheckAvailabilityTool,
    CreateBookingParams, CreateBookingTool, SearchToursParams, SearchToursTool, TourDetailsParams,
    TourDetailsTool,
};
use crate::domains::TourServices;

/// Names of every tool, in registration order.
pub const TOOL_NAMES: [&str; 5] = [
    SearchToursTool::NAME,
    TourDetailsTool::NAME,
    CreateBookingTool::NAME,
    CheckAvailabilityTool::NAME,
    BookingStatusTool::NAME,
];

/// A parsed call to one of the tools.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "name", content = "arguments", rename_all = "snake_case")]
pub enum ToolCall {
    SearchTours(SearchToursParams),
    #[serde(rename = "get_tour_details")]
    TourDetails(TourDetailsParams),
    CreateBooking(CreateBookingParams),
    CheckAvailability(CheckAvailabilityParams),
    #[serde(rename = "get_booking_status")]
    BookingStatus(BookingStatusParams),
}

impl ToolCall {
    /// Parse a tool name and its argument object.
    ///
    /// A missing or `null` argument object is treated as `{}`.
    pub fn parse(name: &str, arguments: serde_json::Value) -> Result<Self, ToolError> {
        if !TOOL_NAMES.contains(&name) {
            return Err(ToolError::not_found(name));
        }

        let arguments = if arguments.is_null() {
            serde_json::json!({})
        } else {
            arguments
        };

        serde_json::from_value(serde_json::json!({
            "name": name,
            "arguments": arguments,
        }))
        .map_err(|e| ToolError::invalid_arguments(format!("{}: {}", name, e)))
    }

    /// Name of the tool this call targets.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SearchTours(_) => SearchToursTool::NAME,
            Self::TourDetails(_) => TourDetailsTool::NAME,
            Self::CreateBooking(_) => CreateBookingTool::NAME,
            Self::CheckAvailability(_) => CheckAvailabilityTool::NAME,
            Self::BookingStatus(_) => BookingStatusTool::NAME,
        }
    }

    /// Run the call against the given services.
    pub fn execute(&self, services: &TourServices) -> CallToolResult {
        debug!("Executing tool call: {}", self.name());
        match self {
            Self::SearchTours(p) => SearchToursTool::execute(p, services),
            Self::TourDetails(p) => TourDetailsTool::execute(p, services),
            Self::CreateBooking(p) => CreateBookingTool::execute(p, services),
            Self::CheckAvailability(p) => CheckAvailabilityTool::execute(p, services),
            Self::BookingStatus(p) => BookingStatusTool::execute(p, services),
        }
    }
}
