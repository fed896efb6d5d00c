//! Bundled itinerary document.

use roteiro_core::{Itinerary, Result};

const ITINERARY_JSON: &str = include_str!("../assets/itinerary.json");

/// Parse the itinerary document compiled into the binary.
pub fn load_bundled_itinerary() -> Result<Itinerary> {
    Itinerary::from_json(ITINERARY_JSON)
}

#[cfg(test)]
mod tests {
    use super::*;
    use roteiro_core::plan_route;

    #[test]
    fn test_bundled_document_loads() {
        let itinerary = load_bundled_itinerary().unwrap();
        assert!(!itinerary.days.is_empty());
        assert_eq!(itinerary.trip_info.countries, 2);
    }

    #[test]
    fn test_bundled_document_is_mappable() {
        let itinerary = load_bundled_itinerary().unwrap();
        let plan = plan_route(&itinerary.days);
        assert!(plan.points.len() >= 2);
        assert!(plan.path.is_some());
    }
}
