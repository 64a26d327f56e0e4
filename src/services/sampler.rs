//! Route sampling.
//!
//! POI searches are centered on the route's own stops. There is no
//! interpolation along the path between sparse waypoints: search
//! density is bounded by the number of stops the caller supplies, not
//! by path length.

use crate::api::{GeoPoint, RoutePayload};

/// Derive the ordered sample points for a route.
///
/// Output is exactly `[origin, waypoints.., destination]` in routing
/// order. Coincident points are not deduplicated.
pub fn sample_points(route: &RoutePayload) -> Vec<GeoPoint> {
    let mut points = Vec::with_capacity(route.waypoints.len() + 2);
    points.push(route.origin);
    points.extend(route.waypoints.iter().copied());
    points.push(route.destination);
    points
}
