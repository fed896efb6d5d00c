//! Itinerary document: JSON schema and loading.
//!
//! Field names follow the source document (camelCase, lowercase string
//! enums). The document is parsed once at startup, validated, and never
//! mutated afterwards.

use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::suggestion::SuggestionStatus;

/// One endpoint of the trip (departure or return).
#[derive(Debug, Clone, Deserialize)]
pub struct TripEndpoint {
    pub city: String,
    pub date: String,
    pub time: String,
}

/// Trip-level metadata shown in the header and footer.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripInfo {
    pub title: String,
    pub subtitle: String,
    pub departure: TripEndpoint,
    #[serde(rename = "return")]
    pub return_trip: TripEndpoint,
    pub duration: String,
    pub countries: u32,
    pub cities: u32,
}

/// Country classification, used for color-coding and grouping only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Country {
    Portugal,
    Spain,
}

impl Country {
    pub fn name(&self) -> &'static str {
        match self {
            Country::Portugal => "Portugal",
            Country::Spain => "España",
        }
    }
}

/// Transport descriptor for a day. Duration and distance are independent
/// optionals; either, both, or neither may be present.
#[derive(Debug, Clone, Deserialize)]
pub struct Transport {
    #[serde(rename = "type")]
    pub mode: String,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub distance: Option<String>,
}

impl Transport {
    /// Single-line summary: mode • time • distance, absent parts omitted.
    pub fn summary(&self) -> String {
        let mut parts = vec![self.mode.as_str()];
        if let Some(time) = &self.time {
            parts.push(time);
        }
        if let Some(distance) = &self.distance {
            parts.push(distance);
        }
        parts.join(" • ")
    }
}

/// Category tag of a suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    #[serde(rename = "transport")]
    TransportNote,
    Warning,
    Tip,
}

/// A per-day suggestion. The optional `status` only seeds the session
/// checklist; completion state lives in [`crate::suggestion::Checklist`].
#[derive(Debug, Clone, Deserialize)]
pub struct Suggestion {
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub status: Option<SuggestionStatus>,
}

/// One itinerary day.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Day {
    /// Ordinal day number: unique, 1-based, in itinerary order.
    pub day: u32,
    pub date: String,
    #[serde(default, rename = "dateISO")]
    pub date_iso: Option<String>,
    /// Free-text route description, e.g. "Lisboa → Lagos".
    pub route: String,
    pub country: Country,
    #[serde(default)]
    pub flag: Option<String>,
    #[serde(default)]
    pub transport: Option<Transport>,
    pub activities: String,
    #[serde(default)]
    pub accommodation: Option<String>,
    #[serde(default)]
    pub suggestions: Vec<Suggestion>,
}

/// The full static itinerary document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Itinerary {
    pub trip_info: TripInfo,
    pub days: Vec<Day>,
    #[serde(default)]
    pub general_recommendations: Vec<String>,
}

impl Itinerary {
    /// Parse and validate an itinerary document from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let itinerary: Itinerary = serde_json::from_str(json)?;
        itinerary.validate()?;
        tracing::debug!(days = itinerary.days.len(), "itinerary document parsed");
        Ok(itinerary)
    }

    /// Load an itinerary document from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Look up a day by its ordinal number.
    pub fn day(&self, number: u32) -> Option<&Day> {
        self.days.iter().find(|d| d.day == number)
    }

    fn validate(&self) -> Result<()> {
        if self.days.is_empty() {
            return Err(Error::EmptyItinerary);
        }
        for (position, day) in self.days.iter().enumerate() {
            if day.day != position as u32 + 1 {
                return Err(Error::DayOutOfSequence {
                    position,
                    found: day.day,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_doc(days: &str) -> String {
        format!(
            r#"{{
                "tripInfo": {{
                    "title": "t", "subtitle": "s",
                    "departure": {{"city": "a", "date": "d", "time": "h"}},
                    "return": {{"city": "a", "date": "d", "time": "h"}},
                    "duration": "1 día", "countries": 1, "cities": 1
                }},
                "days": {days},
                "generalRecommendations": []
            }}"#
        )
    }

    fn day_json(n: u32) -> String {
        format!(
            r#"{{"day": {n}, "date": "d", "route": "Lisboa", "country": "portugal", "activities": "a"}}"#
        )
    }

    #[test]
    fn test_parse_minimal() {
        let doc = minimal_doc(&format!("[{}]", day_json(1)));
        let itinerary = Itinerary::from_json(&doc).unwrap();
        assert_eq!(itinerary.days.len(), 1);
        assert_eq!(itinerary.days[0].country, Country::Portugal);
        assert!(itinerary.days[0].transport.is_none());
        assert!(itinerary.days[0].suggestions.is_empty());
    }

    #[test]
    fn test_empty_days_rejected() {
        let doc = minimal_doc("[]");
        assert!(matches!(
            Itinerary::from_json(&doc),
            Err(Error::EmptyItinerary)
        ));
    }

    #[test]
    fn test_out_of_sequence_rejected() {
        let doc = minimal_doc(&format!("[{}, {}]", day_json(1), day_json(3)));
        assert!(matches!(
            Itinerary::from_json(&doc),
            Err(Error::DayOutOfSequence {
                position: 1,
                found: 3
            })
        ));
    }

    #[test]
    fn test_duplicate_day_rejected() {
        let doc = minimal_doc(&format!("[{}, {}]", day_json(1), day_json(1)));
        assert!(Itinerary::from_json(&doc).is_err());
    }

    #[test]
    fn test_transport_summary() {
        let full = Transport {
            mode: "Autobús".into(),
            time: Some("3h".into()),
            distance: Some("300 km".into()),
        };
        assert_eq!(full.summary(), "Autobús • 3h • 300 km");

        let bare = Transport {
            mode: "Tren".into(),
            time: None,
            distance: None,
        };
        assert_eq!(bare.summary(), "Tren");

        let distance_only = Transport {
            mode: "Coche".into(),
            time: None,
            distance: Some("80 km".into()),
        };
        assert_eq!(distance_only.summary(), "Coche • 80 km");
    }

    #[test]
    fn test_day_lookup() {
        let doc = minimal_doc(&format!("[{}, {}]", day_json(1), day_json(2)));
        let itinerary = Itinerary::from_json(&doc).unwrap();
        assert_eq!(itinerary.day(2).map(|d| d.day), Some(2));
        assert!(itinerary.day(9).is_none());
    }
}
