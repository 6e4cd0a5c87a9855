//! Tour Booking MCP Server
//!
//! A Model Context Protocol server that lets an AI assistant browse a
//! catalog of tour packages, check availability, take bookings and look
//! them up again.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the MCP server handler and transports
//! - **domains**: business logic organized by bounded contexts
//!   - **catalog**: tour packages and the catalog store
//!   - **bookings**: booking records, id generation and the booking engine
//!   - **query**: read-only search, details, availability and status lookups
//!   - **tools**: the five MCP tools wrapping the engines
//!
//! # Example
//!
//! ```rust,no_run
//! use tour_booking_mcp_server::{Config, McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config)?;
//!     // Hand the server to a TransportService...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
