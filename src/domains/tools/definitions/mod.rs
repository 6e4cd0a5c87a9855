//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod bookings;
pub mod catalog;
pub mod common;

pub use bookings::{BookingStatusParams, BookingStatusTool, CreateBookingParams, CreateBookingTool};
pub use catalog::{
    CheckAvailabilityParams, CheckAvailabilityTool, SearchToursParams, SearchToursTool,
    TourDetailsParams, TourDetailsTool,
};
