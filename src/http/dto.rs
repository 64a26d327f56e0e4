//! Data Transfer Objects for the HTTP API.
//!
//! The response shape ([`crate::api::EnrichedRoute`]) is already
//! serializable; this module holds the request bodies plus the schema
//! validation the engine assumes has already happened.

use serde::{Deserialize, Serialize};

use crate::api::{CandidateStop, GeoPoint, RoutePayload};

/// Request body for fresh suggestions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionsRequest {
    /// The route to plan stops along
    pub route: RoutePayload,
}

/// Request body for a refinement pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefineRequest {
    /// The route to plan stops along
    pub route: RoutePayload,
    /// Free-text feedback on the previous results
    pub feedback: String,
    /// Stops shown to the user previously (caller context only)
    #[serde(default)]
    pub previous_stops: Vec<CandidateStop>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
}

/// Validate that a route payload carries well-formed coordinates.
pub fn validate_route(route: &RoutePayload) -> Result<(), String> {
    let mut points = vec![("origin", &route.origin), ("destination", &route.destination)];
    points.extend(route.waypoints.iter().map(|p| ("waypoint", p)));

    for (label, point) in points {
        if !is_valid_point(point) {
            return Err(format!("{label} has out-of-range coordinates"));
        }
    }
    Ok(())
}

/// Validate that refinement feedback is non-empty.
pub fn validate_feedback(feedback: &str) -> Result<(), String> {
    if feedback.trim().is_empty() {
        return Err("feedback must be non-empty".to_string());
    }
    Ok(())
}

fn is_valid_point(point: &GeoPoint) -> bool {
    point.lat.is_finite()
        && point.lng.is_finite()
        && (-90.0..=90.0).contains(&point.lat)
        && (-180.0..=180.0).contains(&point.lng)
}
