//! Public API surface for the suggestion engine.
//!
//! This file consolidates the domain types shared by the engine, the
//! provider clients, and the HTTP API. All types derive
//! Serialize/Deserialize and use the camelCase wire names the frontend
//! and the external providers exchange.

use serde::{Deserialize, Serialize};

/// A geographic coordinate (WGS84 latitude/longitude).
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        GeoPoint { lat, lng }
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

/// A driving route as supplied by the caller.
///
/// Waypoint order is routing order, not geographic order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePayload {
    pub origin: GeoPoint,
    pub destination: GeoPoint,
    #[serde(default)]
    pub waypoints: Vec<GeoPoint>,
}

/// A point-of-interest category tag.
///
/// Categories are opaque identifiers matched against the places
/// provider's taxonomy; the engine never interprets them beyond
/// equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category(String);

impl Category {
    pub fn new(tag: impl Into<String>) -> Self {
        Category(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn restaurant() -> Self {
        Category::new("restaurant")
    }

    pub fn gas_station() -> Self {
        Category::new("gas_station")
    }

    pub fn lodging() -> Self {
        Category::new("lodging")
    }

    pub fn cafe() -> Self {
        Category::new("cafe")
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Category {
    fn from(tag: &str) -> Self {
        Category::new(tag)
    }
}

/// Budget tier used when scoring candidate stops.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Budget {
    Low,
    #[default]
    Medium,
    High,
}

/// Fully-resolved user preferences.
///
/// The preference store may hold a partial record; callers always see
/// this shape with defaults merged in (see [`crate::prefs`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub budget: Budget,
    pub avoid_tolls: bool,
    pub cuisine: Vec<String>,
    pub min_rating: f64,
}

impl Default for Preferences {
    fn default() -> Self {
        Preferences {
            budget: Budget::Medium,
            avoid_tolls: false,
            cuisine: Vec::new(),
            min_rating: 3.5,
        }
    }
}

/// A candidate stop surfaced by the places provider.
///
/// `place_id` is the provider-assigned identity of the real-world
/// place and the deduplication key. `category` is the category the
/// place was *queried* under, which may differ from the provider's own
/// primary category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateStop {
    pub place_id: String,
    pub name: String,
    pub location: GeoPoint,
    pub category: Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_level: Option<i32>,
}

/// The unit returned to the caller: the provider-encoded path for the
/// route plus the ranked stop list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedRoute {
    /// Encoded overview polyline, or `None` if the directions provider
    /// returned no route.
    pub polyline: Option<String>,
    pub stops: Vec<CandidateStop>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preferences_defaults() {
        let prefs = Preferences::default();
        assert_eq!(prefs.budget, Budget::Medium);
        assert!(!prefs.avoid_tolls);
        assert!(prefs.cuisine.is_empty());
        assert_eq!(prefs.min_rating, 3.5);
    }

    #[test]
    fn test_candidate_stop_wire_names() {
        let stop = CandidateStop {
            place_id: "abc123".to_string(),
            name: "Mexican Grill".to_string(),
            location: GeoPoint::new(1.0, 2.0),
            category: Category::restaurant(),
            rating: Some(4.0),
            price_level: Some(1),
        };

        let json = serde_json::to_value(&stop).unwrap();
        assert_eq!(json["placeId"], "abc123");
        assert_eq!(json["priceLevel"], 1);
        assert_eq!(json["location"]["lat"], 1.0);
    }

    #[test]
    fn test_candidate_stop_optional_fields_omitted() {
        let stop = CandidateStop {
            place_id: "abc".to_string(),
            name: "Rest Area".to_string(),
            location: GeoPoint::new(0.0, 0.0),
            category: Category::gas_station(),
            rating: None,
            price_level: None,
        };

        let json = serde_json::to_value(&stop).unwrap();
        assert!(json.get("rating").is_none());
        assert!(json.get("priceLevel").is_none());
    }

    #[test]
    fn test_route_payload_waypoints_default_empty() {
        let route: RoutePayload = serde_json::from_str(
            r#"{"origin":{"lat":0.0,"lng":0.0},"destination":{"lat":1.0,"lng":1.0}}"#,
        )
        .unwrap();
        assert!(route.waypoints.is_empty());
    }

    #[test]
    fn test_budget_wire_format() {
        assert_eq!(serde_json::to_string(&Budget::Low).unwrap(), "\"low\"");
        let b: Budget = serde_json::from_str("\"high\"").unwrap();
        assert_eq!(b, Budget::High);
    }

    #[test]
    fn test_geo_point_display() {
        let p = GeoPoint::new(40.7128, -74.006);
        assert_eq!(p.to_string(), "40.7128,-74.006");
    }
}
