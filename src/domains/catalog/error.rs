//! Catalog-specific error types.

use thiserror::Error;

/// Errors that can occur while loading or reading the tour catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No tour has the requested id.
    #[error("Tour '{0}' not found")]
    TourNotFound(String),

    /// A reservation asked for more slots than the tour has left.
    #[error("Only {available} slots available for tour '{tour_id}' but {requested} requested")]
    SlotsExhausted {
        tour_id: String,
        requested: u32,
        available: u32,
    },

    /// The seed data violates a catalog invariant.
    #[error("Invalid catalog seed: {0}")]
    InvalidSeed(String),

    /// An I/O error occurred while reading a seed file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The seed file is not valid JSON for a list of tours.
    #[error("Malformed seed file: {0}")]
    Json(#[from] serde_json::Error),
}

impl CatalogError {
    /// Create a new "tour not found" error.
    pub fn tour_not_found(id: impl Into<String>) -> Self {
        Self::TourNotFound(id.into())
    }

    /// Create a new "invalid seed" error.
    pub fn invalid_seed(msg: impl Into<String>) -> Self {
        Self::InvalidSeed(msg.into())
    }
}
