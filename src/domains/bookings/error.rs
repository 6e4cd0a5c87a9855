//! Booking-specific error types.

use thiserror::Error;
use validator::ValidationErrors;

use super::model::{MAX_PARTY_SIZE, MIN_PARTY_SIZE};
use crate::domains::catalog::CatalogError;

/// Errors that can occur while creating or looking up bookings.
#[derive(Debug, Error)]
pub enum BookingError {
    /// The booking references a tour that does not exist.
    #[error("Tour '{0}' not found")]
    TourNotFound(String),

    /// No booking has the requested id.
    #[error("No booking found with ID '{0}'")]
    BookingNotFound(String),

    /// The party is larger than the tour's remaining slots.
    #[error("Only {available} slots available for {tour} but {requested} requested")]
    InsufficientCapacity {
        tour: String,
        requested: u32,
        available: u32,
    },

    /// The request failed field validation.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A booking with this id is already stored.
    #[error("Booking '{0}' already exists")]
    DuplicateId(String),

    /// The backing store failed.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl BookingError {
    /// Whether the error is a missing tour or booking.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::TourNotFound(_) | Self::BookingNotFound(_))
    }
}

impl From<CatalogError> for BookingError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::TourNotFound(id) => Self::TourNotFound(id),
            CatalogError::SlotsExhausted {
                tour_id,
                requested,
                available,
            } => Self::InsufficientCapacity {
                tour: tour_id,
                requested,
                available,
            },
            other => Self::Storage(other.to_string()),
        }
    }
}

impl From<ValidationErrors> for BookingError {
    fn from(errors: ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| match &*e.code {
                    "email" => format!("{} must be a valid email address", field),
                    "range" => format!(
                        "{} must be between {} and {}",
                        field, MIN_PARTY_SIZE, MAX_PARTY_SIZE
                    ),
                    code => format!("{} is invalid ({})", field, code),
                })
            })
            .collect();
        messages.sort();
        Self::InvalidArgument(messages.join("; "))
    }
}
