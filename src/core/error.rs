//! Error types and handling for the MCP server.
//!
//! A single error type wraps the failures of every domain plus the transport
//! layer, so startup code can propagate any of them with `?`.

use thiserror::Error;

use super::transport::TransportError;
use crate::domains::{bookings::BookingError, catalog::CatalogError, tools::ToolError};

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the tools domain.
    #[error("Tool error: {0}")]
    Tool(#[from] ToolError),

    /// The catalog could not be built or queried.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Error originating from the bookings domain.
    #[error("Booking error: {0}")]
    Booking(#[from] BookingError),

    /// The transport failed to start or stopped unexpectedly.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),
}
