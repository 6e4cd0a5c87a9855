//! Catalog tools: search, details and availability.

pub mod availability;
pub mod details;
pub mod search;

pub use availability::{CheckAvailabilityParams, CheckAvailabilityTool};
pub use details::{TourDetailsParams, TourDetailsTool};
pub use search::{SearchToursParams, SearchToursTool};
