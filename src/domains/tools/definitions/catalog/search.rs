//! Search tours tool definition.
//!
//! Filters the catalog by destination, budget and duration.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument};

use super::super::common::{format_amount, structured_result};
use crate::domains::TourServices;
use crate::domains::catalog::TourPackage;
use crate::domains::query::TourSearch;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the search tours tool.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct SearchToursParams {
    /// Island or location (e.g. Palawan, Boracay, Siargao).
    #[serde(default)]
    pub destination: Option<String>,

    /// Maximum price per person in Philippine pesos.
    #[serde(default)]
    pub max_price: Option<f64>,

    /// Trip duration, e.g. '4D3N' or '5D4N'.
    #[serde(default)]
    pub duration: Option<String>,
}

impl From<&SearchToursParams> for TourSearch {
    fn from(params: &SearchToursParams) -> Self {
        Self {
            destination: params.destination.clone(),
            max_price: params.max_price,
            duration: params.duration.clone(),
        }
    }
}

/// Structured output for search results.
#[derive(Debug, Clone, Serialize)]
pub struct SearchToursResult {
    pub tours: Vec<TourPackage>,
    pub total_count: usize,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Search tours tool - lists tour packages matching optional filters.
pub struct SearchToursTool;

impl SearchToursTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "search_tours";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Search tour packages by destination, budget, or duration";

    /// Execute the tool logic.
    #[instrument(skip_all)]
    pub fn execute(params: &SearchToursParams, services: &TourServices) -> CallToolResult {
        info!("Search tours called with {:?}", params);

        let tours = services.queries.search(&TourSearch::from(params));
        let text = render(&tours);

        structured_result(
            text,
            &SearchToursResult {
                total_count: tours.len(),
                tours,
            },
        )
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<SearchToursParams>(),
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
                let params: SearchToursParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &services))
            }
            .boxed()
        })
    }
}

/// Render search results as text. An empty list is a normal outcome.
fn render(tours: &[TourPackage]) -> String {
    if tours.is_empty() {
        return "No tours found matching your criteria. Try adjusting your filters.".to_string();
    }

    let formatted: Vec<String> = tours
        .iter()
        .map(|t| {
            format!(
                "📍 **{}**\n   Duration: {} | Price: {} per person\n   Slots available: {}\n   Highlights: {}\n   Tour ID: {}",
                t.name,
                t.duration,
                format_amount(t.price),
                t.slots,
                t.highlights.join(", "),
                t.id
            )
        })
        .collect();

    format!(
        "Found {} tour(s):\n\n{}",
        tours.len(),
        formatted.join("\n\n")
    )
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::common::result_text;

    #[test]
    fn test_search_all() {
        let services = TourServices::in_memory();
        let result = SearchToursTool::execute(&SearchToursParams::default(), &services);
        assert_eq!(result.is_error, Some(false));

        let text = result_text(&result);
        assert!(text.starts_with("Found 4 tour(s):"));
        assert!(text.contains("Price: ₱18,500 per person"));
        assert!(text.contains("Highlights: El Nido, Coron, Underground River"));

        let structured = result.structured_content.unwrap();
        assert_eq!(structured["total_count"], 4);
    }

    #[test]
    fn test_search_by_duration() {
        let services = TourServices::in_memory();
        let params = SearchToursParams {
            duration: Some("4D3N".to_string()),
            ..Default::default()
        };
        let result = SearchToursTool::execute(&params, &services);
        let text = result_text(&result);
        assert!(text.starts_with("Found 1 tour(s):"));
        assert!(text.contains("Boracay Beach Escape"));
        assert_eq!(result.structured_content.unwrap()["tours"][0]["id"], "t2");
    }

    #[test]
    fn test_search_no_match_is_not_error() {
        let services = TourServices::in_memory();
        let params = SearchToursParams {
            max_price: Some(1000.0),
            ..Default::default()
        };
        let result = SearchToursTool::execute(&params, &services);
        assert_eq!(result.is_error, Some(false));
        assert!(result_text(&result).starts_with("No tours found"));
    }

    #[test]
    fn test_params_accept_fractional_max_price() {
        let params: SearchToursParams =
            serde_json::from_value(serde_json::json!({"max_price": 15000.5})).unwrap();
        let services = TourServices::in_memory();
        let result = SearchToursTool::execute(&params, &services);
        assert_eq!(result.is_error, Some(false));
        assert_eq!(result.structured_content.unwrap()["total_count"], 1);
    }

    #[test]
    fn test_params_all_optional() {
        let params: SearchToursParams = serde_json::from_str("{}").unwrap();
        assert!(params.destination.is_none());
        assert!(params.max_price.is_none());
        assert!(params.duration.is_none());
    }
}
