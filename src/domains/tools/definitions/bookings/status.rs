//! Booking status tool definition.

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
use crate::domains::bookings::Booking;

/// Parameters for the booking status tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct BookingStatusParams {
    /// The booking ID (e.g. BK1234567890).
    pub booking_id: String,
}

/// Booking status tool - looks up an existing booking.
pub struct BookingStatusTool;

impl BookingStatusTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_booking_status";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Look up the status of an existing booking";

    #[instrument(skip_all, fields(booking_id = %params.booking_id))]
    pub fn execute(params: &BookingStatusParams, services: &TourServices) -> CallToolResult {
        info!("Booking status requested");

        match services.queries.get_booking_status(&params.booking_id) {
            Ok(booking) => structured_result(render(&booking), &booking),
            Err(_) => error_result(&format!(
                "No booking found with ID '{}'. Please check the ID and try again.",
                params.booking_id
            )),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<BookingStatusParams>(),
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
                let params: BookingStatusParams =
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
        "📋 **Booking Status**\n\n\
         ID: {}\n\
         Tour: {}\n\
         Customer: {}\n\
         Travel Date: {}\n\
         Party Size: {} pax\n\
         Total: {}\n\
         Status: {}\n\
         Booked on: {}",
        booking.id,
        booking.tour_name,
        booking.customer_name,
        booking.travel_date,
        booking.party_size,
        format_amount(booking.total_amount),
        booking.status.as_str().to_uppercase(),
        booking.created_at.format("%B %-d, %Y")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::bookings::BookingRequest;
    use crate::domains::tools::definitions::common::result_text;

    #[test]
    fn test_status_after_create() {
        let services = TourServices::in_memory();
        let booking = services
            .bookings
            .create(BookingRequest {
                tour_id: "t1".to_string(),
                customer_name: "Gabriela Silang".to_string(),
                customer_email: "gabriela@example.com".to_string(),
                customer_phone: "0917".to_string(),
                travel_date: "2027-02-14".to_string(),
                party_size: 2,
            })
            .unwrap();

        let params = BookingStatusParams {
            booking_id: booking.id.clone(),
        };
        let result = BookingStatusTool::execute(&params, &services);
        assert_eq!(result.is_error, Some(false));

        let text = result_text(&result);
        assert!(text.contains(&format!("ID: {}", booking.id)));
        assert!(text.contains("Tour: Palawan Island Hopper"));
        assert!(text.contains("Total: ₱37,000"));
        assert!(text.contains("Status: PENDING"));

        let structured = result.structured_content.unwrap();
        assert_eq!(structured["status"], "pending");
        assert_eq!(structured["total_amount"], 37000);
    }

    #[test]
    fn test_status_unknown_booking() {
        let services = TourServices::in_memory();
        let params = BookingStatusParams {
            booking_id: "BK123".to_string(),
        };
        let result = BookingStatusTool::execute(&params, &services);
        assert_eq!(result.is_error, Some(true));
        assert!(result_text(&result).starts_with("No booking found with ID 'BK123'"));
    }
}
