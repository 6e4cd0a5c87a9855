//! Default catalog seed and seed-file loading.

use std::collections::HashSet;
use std::path::Path;

use tracing::info;

use super::error::CatalogError;
use super::model::{MAX_TOUR_PRICE, TourPackage};

fn tour(
    id: &str,
    name: &str,
    duration: &str,
    price: u64,
    slots: u32,
    destination: &str,
    highlights: &[&str],
) -> TourPackage {
    TourPackage {
        id: id.to_string(),
        name: name.to_string(),
        duration: duration.to_string(),
        price,
        slots,
        destination: destination.to_string(),
        highlights: highlights.iter().map(|h| h.to_string()).collect(),
    }
}

/// The tours the server ships with when no seed file is configured.
pub fn default_tours() -> Vec<TourPackage> {
    vec![
        tour(
            "t1",
            "Palawan Island Hopper",
            "5D4N",
            18500,
            12,
            "Palawan",
            &["El Nido", "Coron", "Underground River"],
        ),
        tour(
            "t2",
            "Boracay Beach Escape",
            "4D3N",
            12800,
            20,
            "Boracay",
            &["White Beach", "Helmet Diving", "Island Hopping"],
        ),
        tour(
            "t3",
            "Siargao Surf & Chill",
            "5D4N",
            15500,
            8,
            "Siargao",
            &["Cloud 9 Surf", "Sugba Lagoon", "Magpupungko"],
        ),
        tour(
            "t4",
            "Batanes Heritage Tour",
            "6D5N",
            22000,
            10,
            "Batanes",
            &["Batan Island", "Sabtang", "Ivana Port"],
        ),
    ]
}

/// Load tours from a JSON file holding an array of tour records.
pub fn load_tours(path: &Path) -> Result<Vec<TourPackage>, CatalogError> {
    let raw = std::fs::read_to_string(path)?;
    let tours: Vec<TourPackage> = serde_json::from_str(&raw)?;
    validate_tours(&tours)?;
    info!("Loaded {} tours from {}", tours.len(), path.display());
    Ok(tours)
}

/// Check the catalog invariants: unique ids and prices in `1..=MAX_TOUR_PRICE`.
pub fn validate_tours(tours: &[TourPackage]) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for tour in tours {
        if tour.id.is_empty() {
            return Err(CatalogError::invalid_seed("tour id must not be empty"));
        }
        if !seen.insert(tour.id.as_str()) {
            return Err(CatalogError::invalid_seed(format!(
                "duplicate tour id '{}'",
                tour.id
            )));
        }
        if tour.price == 0 {
            return Err(CatalogError::invalid_seed(format!(
                "tour '{}' must have a positive price",
                tour.id
            )));
        }
        if tour.price > MAX_TOUR_PRICE {
            return Err(CatalogError::invalid_seed(format!(
                "tour '{}' price {} exceeds the maximum of {}",
                tour.id, tour.price, MAX_TOUR_PRICE
            )));
        }
    }
    Ok(())
}
