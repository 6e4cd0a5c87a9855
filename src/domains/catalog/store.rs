//! Tour catalog storage.
//!
//! The engines only see the [`TourCatalog`] trait, so a persistent store can
//! replace [`InMemoryCatalog`] without touching query or booking logic.

use std::collections::HashMap;

use parking_lot::RwLock;
use tracing::debug;

use super::error::CatalogError;
use super::model::TourPackage;
use super::seed::{default_tours, validate_tours};

/// Read access to the tour catalog, plus the one mutation bookings may need.
pub trait TourCatalog: Send + Sync {
    /// All tours in catalog order.
    fn list(&self) -> Vec<TourPackage>;

    /// Look up a tour by id.
    fn get(&self, id: &str) -> Option<TourPackage>;

    /// Atomically check and deduct `count` slots, returning the updated tour.
    fn reserve_slots(&self, id: &str, count: u32) -> Result<TourPackage, CatalogError>;

    /// Return `count` previously reserved slots to a tour.
    fn release_slots(&self, id: &str, count: u32) -> Result<TourPackage, CatalogError>;

    /// Number of tours in the catalog.
    fn len(&self) -> usize {
        self.list().len()
    }
}

/// In-memory catalog indexed by id, preserving seed order.
#[derive(Debug)]
pub struct InMemoryCatalog {
    tours: RwLock<Vec<TourPackage>>,
    index: HashMap<String, usize>,
}

impl InMemoryCatalog {
    /// Build a catalog from the given tours after checking invariants.
    pub fn new(tours: Vec<TourPackage>) -> Result<Self, CatalogError> {
        validate_tours(&tours)?;
        let index = tours
            .iter()
            .enumerate()
            .map(|(i, t)| (t.id.clone(), i))
            .collect();
        Ok(Self {
            tours: RwLock::new(tours),
            index,
        })
    }

    /// Build a catalog holding the default demo tours.
    pub fn with_default_seed() -> Self {
        let tours = default_tours();
        let index = tours
            .iter()
            .enumerate()
            .map(|(i, t)| (t.id.clone(), i))
            .collect();
        Self {
            tours: RwLock::new(tours),
            index,
        }
    }
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::with_default_seed()
    }
}

impl TourCatalog for InMemoryCatalog {
    fn list(&self) -> Vec<TourPackage> {
        self.tours.read().clone()
    }

    fn get(&self, id: &str) -> Option<TourPackage> {
        let pos = *self.index.get(id)?;
        self.tours.read().get(pos).cloned()
    }

    fn reserve_slots(&self, id: &str, count: u32) -> Result<TourPackage, CatalogError> {
        let pos = *self
            .index
            .get(id)
            .ok_or_else(|| CatalogError::tour_not_found(id))?;

        let mut tours = self.tours.write();
        let tour = &mut tours[pos];
        if tour.slots < count {
            return Err(CatalogError::SlotsExhausted {
                tour_id: id.to_string(),
                requested: count,
                available: tour.slots,
            });
        }
        tour.slots -= count;
        debug!("Reserved {} slots on {}, {} left", count, id, tour.slots);
        Ok(tour.clone())
    }

    fn release_slots(&self, id: &str, count: u32) -> Result<TourPackage, CatalogError> {
        let pos = *self
            .index
            .get(id)
            .ok_or_else(|| CatalogError::tour_not_found(id))?;

        let mut tours = self.tours.write();
        let tour = &mut tours[pos];
        tour.slots = tour.slots.saturating_add(count);
        debug!("Released {} slots on {}, {} left", count, id, tour.slots);
        Ok(tour.clone())
    }

    fn len(&self) -> usize {
        self.index.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_preserves_seed_order() {
        let catalog = InMemoryCatalog::with_default_seed();
        let ids: Vec<_> = catalog.list().into_iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["t1", "t2", "t3", "t4"]);
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn test_get_by_id() {
        let catalog = InMemoryCatalog::with_default_seed();
        assert_eq!(catalog.get("t3").unwrap().slots, 8);
        assert!(catalog.get("nonexistent-id").is_none());
    }

    #[test]
    fn test_new_rejects_duplicates() {
        let mut tours = default_tours();
        tours.push(tours[0].clone());
        assert!(InMemoryCatalog::new(tours).is_err());
    }

    #[test]
    fn test_reserve_slots_decrements() {
        let catalog = InMemoryCatalog::with_default_seed();
        let updated = catalog.reserve_slots("t3", 5).unwrap();
        assert_eq!(updated.slots, 3);
        assert_eq!(catalog.get("t3").unwrap().slots, 3);
    }

    #[test]
    fn test_reserve_slots_rejects_oversell() {
        let catalog = InMemoryCatalog::with_default_seed();
        let err = catalog.reserve_slots("t3", 9).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::SlotsExhausted {
                requested: 9,
                available: 8,
                ..
            }
        ));
        assert_eq!(catalog.get("t3").unwrap().slots, 8);
    }

    #[test]
    fn test_release_slots_restores_reservation() {
        let catalog = InMemoryCatalog::with_default_seed();
        catalog.reserve_slots("t3", 5).unwrap();
        let restored = catalog.release_slots("t3", 5).unwrap();
        assert_eq!(restored.slots, 8);
        assert!(catalog.release_slots("zz", 1).is_err());
    }

    #[test]
    fn test_reserve_slots_unknown_tour() {
        let catalog = InMemoryCatalog::with_default_seed();
        assert!(matches!(
            catalog.reserve_slots("zz", 1),
            Err(CatalogError::TourNotFound(_))
        ));
    }
}
