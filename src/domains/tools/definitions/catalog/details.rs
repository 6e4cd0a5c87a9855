//! Tour details tool definition.

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
use crate::domains::catalog::TourPackage;

/// Parameters for the tour details tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TourDetailsParams {
    /// The tour ID (e.g. t1, t2).
    pub tour_id: String,
}

/// Tour details tool - full information about one tour package.
pub struct TourDetailsTool;

impl TourDetailsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_tour_details";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Get complete details about a specific tour package";

    #[instrument(skip_all, fields(tour_id = %params.tour_id))]
    pub fn execute(params: &TourDetailsParams, services: &TourServices) -> CallToolResult {
        info!("Tour details requested");

        match services.queries.get_details(&params.tour_id) {
            Ok(tour) => structured_result(render(&tour), &tour),
            Err(_) => error_result(&format!("Tour with ID '{}' not found.", params.tour_id)),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<TourDetailsParams>(),
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
                let params: TourDetailsParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &services))
            }
            .boxed()
        })
    }
}

fn render(tour: &TourPackage) -> String {
    let highlights: Vec<String> = tour
        .highlights
        .iter()
        .map(|h| format!("   • {}", h))
        .collect();

    format!(
        "🌴 **{}**\n\n📅 Duration: {}\n💰 Price: {} per person\n📍 Destination: {}\n👥 Available slots: {}\n✨ Highlights:\n{}\n\nTo book this tour, use the create_booking tool with tour_id: {}",
        tour.name,
        tour.duration,
        format_amount(tour.price),
        tour.destination,
        tour.slots,
        highlights.join("\n"),
        tour.id
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::common::result_text;

    #[test]
    fn test_details_found() {
        let services = TourServices::in_memory();
        let params = TourDetailsParams {
            tour_id: "t4".to_string(),
        };
        let result = TourDetailsTool::execute(&params, &services);
        assert_eq!(result.is_error, Some(false));

        let text = result_text(&result);
        assert!(text.contains("Batanes Heritage Tour"));
        assert!(text.contains("💰 Price: ₱22,000 per person"));
        assert!(text.contains("   • Sabtang"));
        assert!(text.ends_with("tour_id: t4"));
        assert_eq!(result.structured_content.unwrap()["slots"], 10);
    }

    #[test]
    fn test_details_not_found() {
        let services = TourServices::in_memory();
        let params = TourDetailsParams {
            tour_id: "nonexistent-id".to_string(),
        };
        let result = TourDetailsTool::execute(&params, &services);
        assert_eq!(result.is_error, Some(true));
        assert_eq!(
            result_text(&result),
            "Tour with ID 'nonexistent-id' not found."
        );
    }

    #[test]
    fn test_params_require_tour_id() {
        let parsed: Result<TourDetailsParams, _> = serde_json::from_str("{}");
        assert!(parsed.is_err());
    }
}
