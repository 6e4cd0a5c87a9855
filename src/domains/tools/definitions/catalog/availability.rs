//! Check availability tool definition.
//!
//! Compares a party size against a tour's remaining slots. The travel date is
//! echoed back but does not affect the answer.

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
use crate::domains::query::Availability;

/// Parameters for the check availability tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CheckAvailabilityParams {
    /// Tour ID to check.
    pub tour_id: String,

    /// Date to check in YYYY-MM-DD format.
    pub travel_date: String,

    /// Number of people.
    pub party_size: u32,
}

/// Check availability tool.
pub struct CheckAvailabilityTool;

impl CheckAvailabilityTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "check_availability";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Check if a tour package has available slots for a specific date and group size";

    #[instrument(skip_all, fields(tour_id = %params.tour_id, party_size = params.party_size))]
    pub fn execute(params: &CheckAvailabilityParams, services: &TourServices) -> CallToolResult {
        info!("Availability check for {}", params.travel_date);

        match services.queries.check_availability(
            &params.tour_id,
            &params.travel_date,
            params.party_size,
        ) {
            Ok(availability) => structured_result(render(&availability), &availability),
            Err(_) => error_result(&format!("Tour '{}' not found.", params.tour_id)),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<CheckAvailabilityParams>(),
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
                let params: CheckAvailabilityParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &services))
            }
            .boxed()
        })
    }
}

fn render(availability: &Availability) -> String {
    let tour = &availability.tour;
    if availability.available {
        format!(
            "✅ **Available!** {} has {} slots on {}. Your group of {} can be accommodated.\n\nTotal cost: {}",
            tour.name,
            tour.slots,
            availability.travel_date,
            availability.party_size,
            format_amount(availability.computed_total)
        )
    } else {
        format!(
            "❌ **Not enough slots.** {} only has {} slots available, but you need {}. Consider a smaller group or a different date.",
            tour.name, tour.slots, availability.party_size
        )
    }
}
