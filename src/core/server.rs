//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating tool calls to the tour and booking engines.
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/` with one file per tool.
//! Each tool defines:
//! - Parameters struct (for rmcp)
//! - `execute()` method (core logic)
//! - `create_route()` method (STDIO/TCP routing)
//!
//! The ToolRouter is built dynamically in `domains/tools/router.rs`; HTTP
//! calls go through the `ToolRegistry`.

use rmcp::{ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler};
use std::sync::Arc;
use tracing::info;

use super::config::Config;
use crate::domains::{
    TourServices,
    tools::{ToolError, ToolRegistry, build_tool_router},
};

const INSTRUCTIONS: &str = "Tour booking assistant. Use search_tours to find tour packages, \
     get_tour_details for a full itinerary, check_availability before booking, \
     create_booking to reserve on behalf of a traveller, and get_booking_status \
     to look up an existing booking.";

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp and routes
/// tool calls to the shared [`TourServices`].
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Query and booking engines shared by every tool.
    services: Arc<TourServices>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    ///
    /// Fails if the configured catalog seed file cannot be loaded.
    pub fn new(config: Config) -> super::error::Result<Self> {
        let services = TourServices::from_config(&config.catalog)?;
        Ok(Self::with_services(config, services))
    }

    /// Create a server over pre-built services.
    pub fn with_services(config: Config, services: TourServices) -> Self {
        let services = Arc::new(services);
        Self {
            tool_router: build_tool_router::<Self>(services.clone()),
            config: Arc::new(config),
            services,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Instructions sent to clients on initialize.
    pub fn instructions(&self) -> &'static str {
        INSTRUCTIONS
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools (for HTTP transport).
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// Call a tool by name (for HTTP transport).
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        info!("Calling tool: {}", name);
        ToolRegistry::new(self.services.clone()).call_tool(name, arguments)
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
