//! Booking records and booking requests.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Smallest party a booking may carry.
pub const MIN_PARTY_SIZE: u32 = 1;

/// Largest party a booking may carry.
pub const MAX_PARTY_SIZE: u32 = 20;

/// Lifecycle state of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A customer's reservation against a tour package.
///
/// Created once by the booking engine and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub tour_id: String,
    /// Tour display name at the time of booking.
    pub tour_name: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    /// `YYYY-MM-DD`, kept as given.
    pub travel_date: String,
    pub party_size: u32,
    /// `price * party_size` at creation time.
    pub total_amount: u64,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

/// Validated input for creating a booking.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct BookingRequest {
    pub tour_id: String,
    pub customer_name: String,
    #[validate(email)]
    pub customer_email: String,
    pub customer_phone: String,
    pub travel_date: String,
    #[validate(range(min = 1, max = 20))]
    pub party_size: u32,
}
