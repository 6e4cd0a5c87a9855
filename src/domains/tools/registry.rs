//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - Typed dispatch for tool calls arriving over the HTTP transport
//! - Tool metadata for listing

use std::sync::Arc;

use rmcp::model::Tool;
use tracing::warn;

use super::ToolError;
use super::call::{TOOL_NAMES, ToolCall};
use super::definitions::common::result_to_json;
use super::definitions::{
    BookingStatusTool, CheckAvailabilityTool, CreateBookingTool, SearchToursTool, TourDetailsTool,
};
use crate::domains::TourServices;

/// Tool registry - manages all available tools.
pub struct ToolRegistry {
    services: Arc<TourServices>,
}

impl ToolRegistry {
    /// Create a new tool registry over the given services.
    pub fn new(services: Arc<TourServices>) -> Self {
        Self { services }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        TOOL_NAMES.to_vec()
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            SearchToursTool::to_tool(),
            TourDetailsTool::to_tool(),
            CreateBookingTool::to_tool(),
            CheckAvailabilityTool::to_tool(),
            BookingStatusTool::to_tool(),
        ]
    }

    /// Dispatch a tool call by name.
    ///
    /// Unknown names and malformed arguments are rejected before any tool
    /// runs. Domain failures (unknown tour, no capacity, ...) come back as an
    /// `isError: true` result instead.
    pub fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        let call = ToolCall::parse(name, arguments).map_err(|e| {
            warn!("Rejected tool call: {}", e);
            e
        })?;
        Ok(result_to_json(call.execute(&self.services)))
    }
}
