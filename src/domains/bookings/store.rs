//! Booking storage.

use std::collections::HashMap;

use parking_lot::RwLock;

use super::error::BookingError;
use super::model::Booking;

/// Append-only storage for bookings.
pub trait BookingStore: Send + Sync {
    /// Store a new booking. Fails if the id is already taken.
    fn append(&self, booking: Booking) -> Result<(), BookingError>;

    /// Look up a booking by id.
    fn get(&self, id: &str) -> Option<Booking>;

    /// Number of stored bookings.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Default)]
struct Entries {
    bookings: Vec<Booking>,
    index: HashMap<String, usize>,
}

/// In-memory booking store, insertion-ordered and indexed by id.
#[derive(Debug, Default)]
pub struct InMemoryBookingStore {
    entries: RwLock<Entries>,
}

impl InMemoryBookingStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BookingStore for InMemoryBookingStore {
    fn append(&self, booking: Booking) -> Result<(), BookingError> {
        let mut entries = self.entries.write();
        if entries.index.contains_key(&booking.id) {
            return Err(BookingError::DuplicateId(booking.id));
        }
        let pos = entries.bookings.len();
        entries.index.insert(booking.id.clone(), pos);
        entries.bookings.push(booking);
        Ok(())
    }

    fn get(&self, id: &str) -> Option<Booking> {
        let entries = self.entries.read();
        entries
            .index
            .get(id)
            .and_then(|&pos| entries.bookings.get(pos))
            .cloned()
    }

    fn len(&self) -> usize {
        self.entries.read().bookings.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::bookings::model::BookingStatus;
    use chrono::Utc;

    fn booking(id: &str) -> Booking {
        Booking {
            id: id.to_string(),
            tour_id: "t1".to_string(),
            tour_name: "Palawan Island Hopper".to_string(),
            customer_name: "Maria Santos".to_string(),
            customer_email: "maria@example.com".to_string(),
            customer_phone: "0917".to_string(),
            travel_date: "2026-11-20".to_string(),
            party_size: 2,
            total_amount: 37000,
            status: BookingStatus::Pending,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_append_and_get() {
        let store = InMemoryBookingStore::new();
        assert!(store.is_empty());
        store.append(booking("BK1")).unwrap();
        store.append(booking("BK2")).unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.get("BK2").unwrap().id, "BK2");
        assert!(store.get("BK3").is_none());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let store = InMemoryBookingStore::new();
        store.append(booking("BK1")).unwrap();
        let err = store.append(booking("BK1")).unwrap_err();
        assert!(matches!(err, BookingError::DuplicateId(id) if id == "BK1"));
        assert_eq!(store.len(), 1);
    }
}
