//! Query engine - read-only lookups over the catalog and booking stores.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use super::bookings::{Booking, BookingError, BookingStore};
use super::catalog::{CatalogError, TourCatalog, TourPackage};

/// Optional filters for a tour search. Unset filters do not constrain.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TourSearch {
    /// Case-insensitive substring of destination or name.
    pub destination: Option<String>,
    /// Inclusive price ceiling. Any JSON number is accepted; a negative
    /// ceiling matches nothing.
    pub max_price: Option<f64>,
    /// Exact duration label, e.g. `4D3N`.
    pub duration: Option<String>,
}

impl TourSearch {
    fn matches(&self, tour: &TourPackage) -> bool {
        non_empty(&self.destination).is_none_or(|d| tour.matches_place(d))
            && self.max_price.is_none_or(|max| tour.price as f64 <= max)
            && non_empty(&self.duration).is_none_or(|d| tour.duration == d)
    }
}

// Empty text filters count as absent.
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Outcome of an availability check.
#[derive(Debug, Clone, Serialize)]
pub struct Availability {
    pub available: bool,
    pub tour: TourPackage,
    pub travel_date: String,
    pub party_size: u32,
    /// Informational `price * party_size`.
    pub computed_total: u64,
}

/// Stateless lookups over the stores.
#[derive(Clone)]
pub struct QueryEngine {
    catalog: Arc<dyn TourCatalog>,
    bookings: Arc<dyn BookingStore>,
}

impl QueryEngine {
    pub fn new(catalog: Arc<dyn TourCatalog>, bookings: Arc<dyn BookingStore>) -> Self {
        Self { catalog, bookings }
    }

    /// Tours matching every supplied filter, in catalog order.
    pub fn search(&self, filter: &TourSearch) -> Vec<TourPackage> {
        let results: Vec<_> = self
            .catalog
            .list()
            .into_iter()
            .filter(|t| filter.matches(t))
            .collect();
        debug!("Search {:?} matched {} tours", filter, results.len());
        results
    }

    pub fn get_details(&self, tour_id: &str) -> Result<TourPackage, CatalogError> {
        self.catalog
            .get(tour_id)
            .ok_or_else(|| CatalogError::tour_not_found(tour_id))
    }

    /// Check whether a party fits. `travel_date` is carried through, not evaluated.
    pub fn check_availability(
        &self,
        tour_id: &str,
        travel_date: &str,
        party_size: u32,
    ) -> Result<Availability, CatalogError> {
        let tour = self.get_details(tour_id)?;
        Ok(Availability {
            available: tour.can_accommodate(party_size),
            computed_total: tour.total_for(party_size),
            travel_date: travel_date.to_string(),
            party_size,
            tour,
        })
    }

    pub fn get_booking_status(&self, booking_id: &str) -> Result<Booking, BookingError> {
        self.bookings
            .get(booking_id)
            .ok_or_else(|| BookingError::BookingNotFound(booking_id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::bookings::{BookingEngine, BookingRequest, BookingStatus, InMemoryBookingStore};
    use crate::domains::catalog::InMemoryCatalog;

    fn engine() -> QueryEngine {
        QueryEngine::new(
            Arc::new(InMemoryCatalog::with_default_seed()),
            Arc::new(InMemoryBookingStore::new()),
        )
    }

    fn ids(tours: &[TourPackage]) -> Vec<&str> {
        tours.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn test_search_without_filters_returns_catalog() {
        let q = engine();
        assert_eq!(ids(&q.search(&TourSearch::default())), vec!["t1", "t2", "t3", "t4"]);
    }

    #[test]
    fn test_search_by_each_destination_includes_tour() {
        let q = engine();
        for tour in q.search(&TourSearch::default()) {
            let filter = TourSearch {
                destination: Some(tour.destination.clone()),
                ..Default::default()
            };
            assert!(ids(&q.search(&filter)).contains(&tour.id.as_str()));
        }
    }

    #[test]
    fn test_search_destination_matches_name_case_insensitive() {
        let q = engine();
        let filter = TourSearch {
            destination: Some("surf".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&q.search(&filter)), vec!["t3"]);
    }

    #[test]
    fn test_search_max_price_is_inclusive() {
        let q = engine();
        for tour in q.search(&TourSearch::default()) {
            let filter = TourSearch {
                max_price: Some(tour.price as f64),
                ..Default::default()
            };
            let results = q.search(&filter);
            assert!(ids(&results).contains(&tour.id.as_str()));
            assert!(results.iter().all(|t| t.price <= tour.price));
        }
    }

    #[test]
    fn test_search_duration_exact() {
        let q = engine();
        let filter = TourSearch {
            duration: Some("4D3N".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&q.search(&filter)), vec!["t2"]);

        let filter = TourSearch {
            duration: Some("4d3n".to_string()),
            ..Default::default()
        };
        assert!(q.search(&filter).is_empty());
    }

    #[test]
    fn test_search_filters_combine() {
        let q = engine();
        let filter = TourSearch {
            destination: None,
            max_price: Some(16000.0),
            duration: Some("5D4N".to_string()),
        };
        assert_eq!(ids(&q.search(&filter)), vec!["t3"]);
    }

    #[test]
    fn test_search_no_match_is_empty() {
        let q = engine();
        let filter = TourSearch {
            destination: Some("Mars".to_string()),
            ..Default::default()
        };
        assert!(q.search(&filter).is_empty());
    }

    #[test]
    fn test_search_empty_strings_ignored() {
        let q = engine();
        let filter = TourSearch {
            destination: Some(String::new()),
            max_price: None,
            duration: Some(String::new()),
        };
        assert_eq!(q.search(&filter).len(), 4);
    }

    #[test]
    fn test_get_details_not_found() {
        let q = engine();
        assert!(matches!(
            q.get_details("nonexistent-id"),
            Err(CatalogError::TourNotFound(id)) if id == "nonexistent-id"
        ));
        assert_eq!(q.get_details("t4").unwrap().name, "Batanes Heritage Tour");
    }

    #[test]
    fn test_check_availability() {
        let q = engine();
        let unavailable = q.check_availability("t3", "2026-12-01", 9).unwrap();
        assert!(!unavailable.available);
        assert_eq!(unavailable.computed_total, 139500);

        let available = q.check_availability("t3", "2026-12-01", 8).unwrap();
        assert!(available.available);
        assert_eq!(available.travel_date, "2026-12-01");

        assert!(q.check_availability("zz", "2026-12-01", 1).is_err());
    }

    #[test]
    fn test_search_fractional_and_negative_max_price() {
        let q = engine();
        let ids = |max: f64| -> Vec<String> {
            q.search(&TourSearch {
                max_price: Some(max),
                ..Default::default()
            })
            .into_iter()
            .map(|t| t.id)
            .collect()
        };

        assert_eq!(ids(12800.5), vec!["t2"]);
        assert_eq!(ids(12799.99), Vec::<String>::new());
        assert!(ids(-1.0).is_empty());
    }

    #[test]
    fn test_check_availability_huge_party_from_seed_file() {
        let mut tours = crate::domains::catalog::seed::default_tours();
        tours[0].price = crate::domains::catalog::MAX_TOUR_PRICE;
        let q = QueryEngine::new(
            Arc::new(InMemoryCatalog::new(tours).unwrap()),
            Arc::new(InMemoryBookingStore::new()),
        );

        let result = q.check_availability("t1", "2026-12-01", u32::MAX).unwrap();
        assert!(!result.available);
        assert_eq!(
            result.computed_total,
            crate::domains::catalog::MAX_TOUR_PRICE * u64::from(u32::MAX)
        );
    }

    #[test]
    fn test_booking_status_roundtrip() {
        let catalog = Arc::new(InMemoryCatalog::with_default_seed());
        let store = Arc::new(InMemoryBookingStore::new());
        let bookings = BookingEngine::new(catalog.clone(), store.clone(), false);
        let q = QueryEngine::new(catalog, store);

        let created = bookings
            .create(BookingRequest {
                tour_id: "t2".to_string(),
                customer_name: "Liza".to_string(),
                customer_email: "liza@example.com".to_string(),
                customer_phone: "0918".to_string(),
                travel_date: "2027-01-05".to_string(),
                party_size: 3,
            })
            .unwrap();

        let found = q.get_booking_status(&created.id).unwrap();
        assert_eq!(found.status, BookingStatus::Pending);
        assert_eq!(found.total_amount, 12800 * 3);

        assert!(matches!(
            q.get_booking_status("BK0"),
            Err(BookingError::BookingNotFound(_))
        ));
    }
}
