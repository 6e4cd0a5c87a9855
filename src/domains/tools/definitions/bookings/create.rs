//! Create booking tool definition.
//!
//! Books a tour on behalf of a traveller. New bookings start as pending.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};

use super::super::common::{error_result, format_amount, structured_result};
use crate::domains::TourServices;
use crate::domains::bookings::{Booking, BookingError, BookingRequest};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the create booking tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateBookingParams {
    /// Tour ID to book.
    pub tour_id: String,

    /// Full name of the traveller.
    pub customer_name: String,

    /// Customer email address.
    #[schemars(email)]
    pub customer_email: String,

    /// Customer phone number.
    pub customer_phone: String,

    /// Desired travel date in YYYY-MM-DD format.
    pub travel_date: String,

    /// Number of people in the group.
    #[schemars(range(min = 1, max = 20))]
    pub party_size: u32,
}

impl From<CreateBookingParams> for BookingRequest {
    fn from(params: CreateBookingParams) -> Self {
        Self {
            tour_id: params.tour_id,
            customer_name: params.customer_name,
            customer_email: params.customer_email,
            customer_phone: params.customer_phone,
            travel_date: params.travel_date,
            party_size: params.party_size,
        }
    }
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Create booking tool.
pub struct CreateBookingTool;

impl CreateBookingTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "create_booking";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Create a new tour booking for a customer";

    #[instrument(skip_all, fields(tour_id = %params.tour_id))]
    pub fn execute(params: &CreateBookingParams, services: &TourServices) -> CallToolResult {
        info!("Create booking called");

        match services.bookings.create(params.clone().into()) {
            Ok(booking) => structured_result(render(&booking), &booking),
            Err(BookingError::TourNotFound(id)) => {
                error_result(&format!("Tour '{}' not found.", id))
            }
            Err(BookingError::InsufficientCapacity {
                requested,
                available,
                ..
            }) => error_result(&format!(
                "Sorry, only {} slots available for this tour but you need {}.",
                available, requested
            )),
            Err(BookingError::InvalidArgument(msg)) => {
                error_result(&format!("Invalid booking request: {}", msg))
            }
            Err(e) => error_result(&format!("Booking failed: {}", e)),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<CreateBookingParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    pub fn create_route<S>(services: Arc<TourServices>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let services = services.clone();
            async move {
                let params: CreateBookingParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &services))
            }
            .boxed()
        })
    }
}

fn render(booking: &Booking) -> String {
    format!(
        "✅ **Booking Created Successfully!**\n\n\
         📋 Booking ID: **{}**\n\
         🌴 Tour: {}\n\
         👤 Customer: {}\n\
         📧 Email: {}\n\
         📅 Travel Date: {}\n\
         👥 Party Size: {} pax\n\
         💰 Total Amount: {}\n\
         📊 Status: Pending confirmation\n\n\
         A confirmation email will be sent to {}.",
        booking.id,
        booking.tour_name,
        booking.customer_name,
        booking.customer_email,
        booking.travel_date,
        booking.party_size,
        format_amount(booking.total_amount),
        booking.customer_email
    )
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::bookings::BookingStatus;
    use crate::domains::tools::definitions::common::result_text;

    fn params(tour_id: &str, email: &str, party_size: u32) -> CreateBookingParams {
        CreateBookingParams {
            tour_id: tour_id.to_string(),
            customer_name: "Jose Rizal".to_string(),
            customer_email: email.to_string(),
            customer_phone: "+63 917 123 4567".to_string(),
            travel_date: "2026-12-30".to_string(),
            party_size,
        }
    }

    #[test]
    fn test_create_booking_success() {
        let services = TourServices::in_memory();
        let result = CreateBookingTool::execute(&params("t2", "jose@example.com", 3), &services);
        assert_eq!(result.is_error, Some(false));

        let text = result_text(&result);
        assert!(text.contains("Booking Created Successfully"));
        assert!(text.contains("🌴 Tour: Boracay Beach Escape"));
        assert!(text.contains("💰 Total Amount: ₱38,400"));
        assert!(text.contains("Party Size: 3 pax"));

        let booking: Booking =
            serde_json::from_value(result.structured_content.unwrap()).unwrap();
        assert_eq!(booking.total_amount, 38400);
        assert_eq!(booking.status, BookingStatus::Pending);
    }

    #[test]
    fn test_create_booking_unknown_tour() {
        let services = TourServices::in_memory();
        let result = CreateBookingTool::execute(&params("t99", "jose@example.com", 1), &services);
        assert_eq!(result.is_error, Some(true));
        assert_eq!(result_text(&result), "Tour 't99' not found.");
    }

    #[test]
    fn test_create_booking_over_capacity() {
        let services = TourServices::in_memory();
        let result = CreateBookingTool::execute(&params("t3", "jose@example.com", 9), &services);
        assert_eq!(result.is_error, Some(true));
        assert_eq!(
            result_text(&result),
            "Sorry, only 8 slots available for this tour but you need 9."
        );
    }

    #[test]
    fn test_create_booking_invalid_email() {
        let services = TourServices::in_memory();
        let result = CreateBookingTool::execute(&params("t1", "jose-at-example", 2), &services);
        assert_eq!(result.is_error, Some(true));
        assert!(result_text(&result).starts_with("Invalid booking request: customer_email"));
    }

    #[test]
    fn test_params_reject_negative_party_size() {
        let json = serde_json::json!({
            "tour_id": "t1",
            "customer_name": "A",
            "customer_email": "a@example.com",
            "customer_phone": "1",
            "travel_date": "2026-12-30",
            "party_size": -2
        });
        assert!(serde_json::from_value::<CreateBookingParams>(json).is_err());
    }
}
