//! Booking engine.
//!
//! Validates a [`BookingRequest`] against the catalog and appends the
//! resulting [`Booking`] to the store.

use std::sync::Arc;

use chrono::Utc;
use parking_lot::Mutex;
use tracing::{info, instrument, warn};
use validator::Validate;

use super::error::BookingError;
use super::id::BookingIdGenerator;
use super::model::{Booking, BookingRequest, BookingStatus};
use super::store::BookingStore;
use crate::domains::catalog::TourCatalog;

/// Creates bookings.
///
/// Creation is serialized so that the capacity check, the optional slot
/// deduction and the append happen as one step.
pub struct BookingEngine {
    catalog: Arc<dyn TourCatalog>,
    store: Arc<dyn BookingStore>,
    ids: BookingIdGenerator,
    track_capacity: bool,
    write_lock: Mutex<()>,
}

impl BookingEngine {
    /// Create an engine over the given stores.
    ///
    /// With `track_capacity` off, slots are checked but never deducted.
    pub fn new(
        catalog: Arc<dyn TourCatalog>,
        store: Arc<dyn BookingStore>,
        track_capacity: bool,
    ) -> Self {
        Self {
            catalog,
            store,
            ids: BookingIdGenerator::new(),
            track_capacity,
            write_lock: Mutex::new(()),
        }
    }

    /// Whether successful bookings deduct tour slots.
    pub fn tracks_capacity(&self) -> bool {
        self.track_capacity
    }

    /// Validate and record a new booking.
    #[instrument(skip_all, fields(tour_id = %request.tour_id, party_size = request.party_size))]
    pub fn create(&self, request: BookingRequest) -> Result<Booking, BookingError> {
        request.validate().map_err(|e| {
            let err = BookingError::from(e);
            warn!("Rejected booking request: {}", err);
            err
        })?;

        let _guard = self.write_lock.lock();

        let tour = self
            .catalog
            .get(&request.tour_id)
            .ok_or_else(|| BookingError::TourNotFound(request.tour_id.clone()))?;

        if !tour.can_accommodate(request.party_size) {
            warn!(
                "Insufficient capacity on {}: {} requested, {} available",
                tour.id, request.party_size, tour.slots
            );
            return Err(BookingError::InsufficientCapacity {
                tour: tour.name,
                requested: request.party_size,
                available: tour.slots,
            });
        }

        if self.track_capacity {
            self.catalog.reserve_slots(&tour.id, request.party_size)?;
        }

        let booking = Booking {
            id: self.ids.next_id(),
            total_amount: tour.total_for(request.party_size),
            tour_id: tour.id,
            tour_name: tour.name,
            customer_name: request.customer_name,
            customer_email: request.customer_email,
            customer_phone: request.customer_phone,
            travel_date: request.travel_date,
            party_size: request.party_size,
            status: BookingStatus::Pending,
            created_at: Utc::now(),
        };

        if let Err(e) = self.store.append(booking.clone()) {
            warn!("Failed to store booking {}: {}", booking.id, e);
            if self.track_capacity {
                self.catalog.release_slots(&booking.tour_id, booking.party_size)?;
            }
            return Err(e);
        }
        info!("Created booking {} ({} pax)", booking.id, booking.party_size);

        Ok(booking)
    }
}
