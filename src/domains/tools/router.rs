//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! Each tool knows how to create its own route for STDIO/TCP transport.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use super::definitions::{
    BookingStatusTool, CheckAvailabilityTool, CreateBookingTool, SearchToursTool, TourDetailsTool,
};
use crate::domains::TourServices;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(services: Arc<TourServices>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(SearchToursTool::create_route(services.clone()))
        .with_route(TourDetailsTool::create_route(services.clone()))
        .with_route(CreateBookingTool::create_route(services.clone()))
        .with_route(CheckAvailabilityTool::create_route(services.clone()))
        .with_route(BookingStatusTool::create_route(services))
}
