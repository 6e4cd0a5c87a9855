//! Tour package record.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Highest per-person price a catalog accepts.
///
/// Keeps `price * party_size` within `u64` for any `u32` party size.
pub const MAX_TOUR_PRICE: u64 = 1_000_000_000;

/// A sellable fixed-itinerary trip offering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TourPackage {
    /// Unique identifier (e.g. `t1`).
    pub id: String,

    /// Display name.
    pub name: String,

    /// Days/nights label such as `5D4N`. Compared verbatim, never parsed.
    pub duration: String,

    /// Price per person in pesos.
    pub price: u64,

    /// Remaining bookable capacity.
    pub slots: u32,

    /// Free-text location.
    pub destination: String,

    /// Ordered list of itinerary highlights.
    #[serde(default)]
    pub highlights: Vec<String>,
}

impl TourPackage {
    /// Total cost for a party of the given size, saturating at `u64::MAX`.
    pub fn total_for(&self, party_size: u32) -> u64 {
        self.price.saturating_mul(u64::from(party_size))
    }

    /// Whether the tour can take a party of the given size.
    pub fn can_accommodate(&self, party_size: u32) -> bool {
        self.slots >= party_size
    }

    /// Case-insensitive match of `needle` against destination or name.
    pub fn matches_place(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.destination.to_lowercase().contains(&needle)
            || self.name.to_lowercase().contains(&needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tour() -> TourPackage {
        TourPackage {
            id: "t2".to_string(),
            name: "Boracay Beach Escape".to_string(),
            duration: "4D3N".to_string(),
            price: 12800,
            slots: 20,
            destination: "Boracay".to_string(),
            highlights: vec!["White Beach".to_string()],
        }
    }

    #[test]
    fn test_total_for() {
        assert_eq!(tour().total_for(3), 38400);
        assert_eq!(tour().total_for(0), 0);
    }

    #[test]
    fn test_total_for_huge_party_does_not_overflow() {
        let mut tour = tour();
        tour.price = MAX_TOUR_PRICE;
        assert_eq!(tour.total_for(u32::MAX), MAX_TOUR_PRICE * u64::from(u32::MAX));

        tour.price = 5_000_000_000;
        assert_eq!(tour.total_for(u32::MAX), u64::MAX);
    }

    #[test]
    fn test_can_accommodate_boundary() {
        let tour = tour();
        assert!(tour.can_accommodate(20));
        assert!(!tour.can_accommodate(21));
    }

    #[test]
    fn test_matches_place_checks_name_and_destination() {
        let tour = tour();
        assert!(tour.matches_place("boracay"));
        assert!(tour.matches_place("BEACH"));
        assert!(!tour.matches_place("Palawan"));
    }

    #[test]
    fn test_highlights_default_when_missing() {
        let json = r#"{"id":"x","name":"X","duration":"2D1N","price":100,"slots":1,"destination":"Y"}"#;
        let tour: TourPackage = serde_json::from_str(json).unwrap();
        assert!(tour.highlights.is_empty());
    }
}
