//! Wiring of stores and engines shared by every tool.

use std::sync::Arc;

use tracing::info;

use super::bookings::{BookingEngine, BookingStore, InMemoryBookingStore};
use super::catalog::{CatalogError, InMemoryCatalog, TourCatalog, seed};
use super::query::QueryEngine;
use crate::core::config::CatalogConfig;

/// The query and booking engines over one pair of stores.
pub struct TourServices {
    pub queries: QueryEngine,
    pub bookings: BookingEngine,
}

impl TourServices {
    /// Build services over the given stores.
    pub fn new(
        catalog: Arc<dyn TourCatalog>,
        store: Arc<dyn BookingStore>,
        track_capacity: bool,
    ) -> Self {
        Self {
            queries: QueryEngine::new(catalog.clone(), store.clone()),
            bookings: BookingEngine::new(catalog, store, track_capacity),
        }
    }

    /// Build in-memory services from configuration.
    ///
    /// Loads the seed file when one is configured, otherwise the demo tours.
    pub fn from_config(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let catalog = match &config.seed_path {
            Some(path) => InMemoryCatalog::new(seed::load_tours(path)?)?,
            None => InMemoryCatalog::with_default_seed(),
        };

        info!(
            "Catalog ready with {} tours (capacity tracking {})",
            catalog.len(),
            if config.track_capacity { "on" } else { "off" }
        );

        Ok(Self::new(
            Arc::new(catalog),
            Arc::new(InMemoryBookingStore::new()),
            config.track_capacity,
        ))
    }

    /// In-memory services over the demo tours, capacity tracking off.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryCatalog::with_default_seed()),
            Arc::new(InMemoryBookingStore::new()),
            false,
        )
    }
}
