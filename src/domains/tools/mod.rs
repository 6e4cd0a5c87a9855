//! Tools domain module.
//!
//! This module exposes the catalog and booking engines to MCP clients as
//! five tools: `search_tours`, `get_tour_details`, `create_booking`,
//! `check_availability` and `get_booking_status`.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `call.rs` - Typed `ToolCall` parsed from a name and argument object
//! - `router.rs` - Dynamic ToolRouter builder for STDIO/TCP transport
//! - `registry.rs` - Central tool registry and HTTP dispatch
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` with params, `execute()` and `create_route()`
//! 2. Export in `definitions/mod.rs`
//! 3. Add a variant to `ToolCall` and its name to `TOOL_NAMES`
//! 4. Add route in `router.rs` and metadata in `registry.rs`

mod call;
pub mod definitions;
mod error;
mod registry;
pub mod router;

pub use call::{TOOL_NAMES, ToolCall};
pub use error::ToolError;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
