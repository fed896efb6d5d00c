//! Route-to-city geocoding against a fixed known-city table.
//!
//! Route descriptions are free text ("Lisboa → Lagos", "Excursión por
//! Sevilla y alrededores"). Resolution is a pure function over the
//! compiled-in table below; there is no external geocoding service and a
//! lookup miss is a designed degradation, not an error.

/// WGS-84 coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

/// Known city → coordinate table for the itinerary region.
///
/// Callers rendering a different trip would extend this table; it is not
/// user-configurable at runtime.
pub const CITY_COORDINATES: &[(&str, Coordinate)] = &[
    ("Lisboa", Coordinate { lat: 38.7223, lon: -9.1393 }),
    ("Lagos", Coordinate { lat: 37.1028, lon: -8.6742 }),
    ("Sevilla", Coordinate { lat: 37.3886, lon: -5.9823 }),
    ("Granada", Coordinate { lat: 37.1773, lon: -3.5986 }),
    ("Valencia", Coordinate { lat: 39.4699, lon: -0.3763 }),
    ("Barcelona", Coordinate { lat: 41.3851, lon: 2.1734 }),
    ("Madrid", Coordinate { lat: 40.4168, lon: -3.7038 }),
];

/// Extract the candidate city name from a route description.
///
/// In order: the segment after " → " (falling back to the first segment
/// when the second is empty), the same for " - ", the first known city
/// occurring as a substring, and finally the unmodified route string.
///
/// When a separator is present but the chosen segment is not a known city,
/// there is deliberately no further fallback to the other segment or to
/// substring search.
pub fn extract_city(route: &str) -> &str {
    for separator in [" → ", " - "] {
        if route.contains(separator) {
            let mut segments = route.split(separator);
            let first = segments.next().unwrap_or(route);
            return match segments.next() {
                Some(second) if !second.is_empty() => second,
                _ => first,
            };
        }
    }

    for (city, _) in CITY_COORDINATES {
        if route.contains(city) {
            return city;
        }
    }

    route
}

/// Look up a city name in the known-city table.
pub fn lookup_city(name: &str) -> Option<Coordinate> {
    CITY_COORDINATES
        .iter()
        .find(|(city, _)| *city == name)
        .map(|(_, coordinate)| *coordinate)
}

/// Resolve a route description to a coordinate, or `None` when unresolved.
pub fn resolve_route(route: &str) -> Option<Coordinate> {
    lookup_city(extract_city(route))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_takes_second_segment() {
        assert_eq!(extract_city("Lisboa → Lagos"), "Lagos");
    }

    #[test]
    fn test_arrow_with_empty_second_falls_back_to_first() {
        assert_eq!(extract_city("Lisboa → "), "Lisboa");
    }

    #[test]
    fn test_dash_takes_second_segment() {
        assert_eq!(extract_city("Granada - Valencia"), "Valencia");
    }

    #[test]
    fn test_arrow_checked_before_dash() {
        assert_eq!(extract_city("A - B → Madrid"), "Madrid");
    }

    #[test]
    fn test_substring_match_without_separator() {
        assert_eq!(extract_city("Excursión por Sevilla y alrededores"), "Sevilla");
    }

    #[test]
    fn test_no_match_returns_raw_string() {
        assert_eq!(extract_city("Día libre en la playa"), "Día libre en la playa");
    }

    #[test]
    fn test_resolve_known_city() {
        let coordinate = resolve_route("Lisboa → Lagos").unwrap();
        assert_eq!(coordinate, Coordinate { lat: 37.1028, lon: -8.6742 });
    }

    #[test]
    fn test_resolve_unknown_city_is_unresolved() {
        assert!(resolve_route("Oporto → Braga").is_none());
        assert!(resolve_route("Día libre").is_none());
    }

    #[test]
    fn test_separator_segment_miss_has_no_fallback() {
        // "Madrid" appears as a substring, but the separator rule already
        // chose "Toledo"; no second chance is given.
        assert!(resolve_route("Madrid → Toledo").is_none());
    }

    #[test]
    fn test_resolution_is_deterministic() {
        for _ in 0..3 {
            assert_eq!(
                resolve_route("Excursión por Sevilla y alrededores"),
                lookup_city("Sevilla")
            );
        }
    }
}
