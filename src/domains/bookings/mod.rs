//! Bookings domain module.
//!
//! Bookings are created by the [`BookingEngine`] and live only as long as the
//! process. They are never mutated or deleted once stored.

mod engine;
mod error;
mod id;
mod model;
mod store;

pub use engine::BookingEngine;
pub use error::BookingError;
pub use id::BookingIdGenerator;
pub use model::{Booking, BookingRequest, BookingStatus, MAX_PARTY_SIZE, MIN_PARTY_SIZE};
pub use store::{BookingStore, InMemoryBookingStore};
