//! Booking tools: creation and status lookup.

pub mod create;
pub mod status;

pub use create::{CreateBookingParams, CreateBookingTool};
pub use status::{BookingStatusParams, BookingStatusTool};
