//! Route planning: ordered geographic points and the connecting path.

use crate::document::{Country, Day, Transport};
use crate::geocode::{self, Coordinate};

/// A day whose route description resolved to a known city.
///
/// Carries display fields copied from the [`Day`] record; days that do not
/// resolve produce no `GeoPoint` at all (they are skipped, not rendered as
/// degenerate points).
#[derive(Debug, Clone)]
pub struct GeoPoint {
    pub day: u32,
    pub city: String,
    pub coordinate: Coordinate,
    pub country: Country,
    pub route: String,
    pub flag: Option<String>,
    pub activities: String,
    pub transport: Option<Transport>,
    pub accommodation: Option<String>,
}

/// The plotted itinerary: markers plus the optional connecting path.
#[derive(Debug, Clone, Default)]
pub struct RoutePlan {
    /// Resolved points in day order; unresolved days leave no gap.
    pub points: Vec<GeoPoint>,
    /// Path coordinates, present only when there are at least two points.
    pub path: Option<Vec<Coordinate>>,
}

/// Derive the route plan from the ordered day sequence.
pub fn plan_route(days: &[Day]) -> RoutePlan {
    let mut points = Vec::new();

    for day in days {
        let city = geocode::extract_city(&day.route);
        match geocode::lookup_city(city) {
            Some(coordinate) => points.push(GeoPoint {
                day: day.day,
                city: city.to_string(),
                coordinate,
                country: day.country,
                route: day.route.clone(),
                flag: day.flag.clone(),
                activities: day.activities.clone(),
                transport: day.transport.clone(),
                accommodation: day.accommodation.clone(),
            }),
            None => {
                tracing::debug!(day = day.day, route = %day.route, "route unresolved, no map point");
            }
        }
    }

    let path = if points.len() >= 2 {
        Some(points.iter().map(|p| p.coordinate).collect())
    } else {
        None
    };

    RoutePlan { points, path }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(number: u32, route: &str) -> Day {
        Day {
            day: number,
            date: format!("Día {number}"),
            date_iso: None,
            route: route.to_string(),
            country: Country::Spain,
            flag: None,
            transport: None,
            activities: String::new(),
            accommodation: None,
            suggestions: Vec::new(),
        }
    }

    #[test]
    fn test_all_resolved_days_form_path_in_order() {
        let days = [
            day(1, "Lisboa"),
            day(2, "Lisboa → Lagos"),
            day(3, "Lagos → Sevilla"),
        ];
        let plan = plan_route(&days);

        assert_eq!(plan.points.len(), 3);
        assert_eq!(
            plan.points.iter().map(|p| p.day).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        let path = plan.path.unwrap();
        assert_eq!(path.len(), 3);
        assert_eq!(path[0], plan.points[0].coordinate);
        assert_eq!(path[2], plan.points[2].coordinate);
    }

    #[test]
    fn test_unresolved_day_is_skipped_without_breaking_sequence() {
        let days = [
            day(1, "Lisboa"),
            day(2, "Día libre en la playa"),
            day(3, "Lagos"),
        ];
        let plan = plan_route(&days);

        assert_eq!(
            plan.points.iter().map(|p| p.day).collect::<Vec<_>>(),
            vec![1, 3]
        );
        assert_eq!(plan.path.as_ref().map(Vec::len), Some(2));
    }

    #[test]
    fn test_single_point_yields_no_path() {
        let plan = plan_route(&[day(1, "Madrid")]);
        assert_eq!(plan.points.len(), 1);
        assert!(plan.path.is_none());
    }

    #[test]
    fn test_no_points_yields_no_path_and_no_markers() {
        let plan = plan_route(&[day(1, "Oporto"), day(2, "Braga")]);
        assert!(plan.points.is_empty());
        assert!(plan.path.is_none());
    }

    #[test]
    fn test_point_carries_display_fields() {
        let mut source = day(1, "Sevilla → Granada");
        source.flag = Some("🇪🇸".to_string());
        source.activities = "Alhambra".to_string();

        let plan = plan_route(&[source]);
        let point = &plan.points[0];
        assert_eq!(point.city, "Granada");
        assert_eq!(point.flag.as_deref(), Some("🇪🇸"));
        assert_eq!(point.activities, "Alhambra");
        assert_eq!(point.country, Country::Spain);
    }
}
