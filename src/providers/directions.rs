//! Directions provider client (Google Directions).
//!
//! Fetches route geometry for a route payload and extracts the first
//! returned route's encoded overview polyline.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use super::error::ProviderError;
use crate::api::RoutePayload;
use crate::config::ProviderConfig;

/// Provider of route geometry.
#[async_trait]
pub trait DirectionsProvider: Send + Sync {
    /// Compute the encoded overview polyline for `route`.
    ///
    /// Returns `None` when the provider finds no route between the
    /// endpoints.
    async fn route_polyline(&self, route: &RoutePayload) -> Result<Option<String>, ProviderError>;
}

/// Google Directions client.
pub struct GoogleDirectionsClient {
    api_key: String,
    base_url: String,
    http: Client,
}

impl GoogleDirectionsClient {
    /// Create a client from provider configuration.
    pub fn from_config(config: &ProviderConfig) -> Result<Self, ProviderError> {
        let http = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(ProviderError::Network)?;

        Ok(GoogleDirectionsClient {
            api_key: config.api_key.clone(),
            base_url: config.directions_base_url.clone(),
            http,
        })
    }

    /// Join waypoints into the `|`-separated query format, preserving
    /// routing order.
    fn waypoints_param(route: &RoutePayload) -> Option<String> {
        if route.waypoints.is_empty() {
            return None;
        }
        Some(
            route
                .waypoints
                .iter()
                .map(|p| p.to_string())
                .collect::<Vec<_>>()
                .join("|"),
        )
    }
}

#[async_trait]
impl DirectionsProvider for GoogleDirectionsClient {
    async fn route_polyline(&self, route: &RoutePayload) -> Result<Option<String>, ProviderError> {
        debug!(origin = %route.origin, destination = %route.destination, "route_polyline: called");

        let mut query = vec![
            ("key", self.api_key.clone()),
            ("origin", route.origin.to_string()),
            ("destination", route.destination.to_string()),
        ];
        if let Some(waypoints) = Self::waypoints_param(route) {
            query.push(("waypoints", waypoints));
        }

        let response = self.http.get(&self.base_url).query(&query).send().await?;

        let status = response.status();
        if !status.is_success() {
            debug!(%status, "route_polyline: HTTP error");
            return Err(ProviderError::Http {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let decoded: DirectionsResponse = serde_json::from_str(&body)
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;

        match decoded.status.as_str() {
            "OK" | "ZERO_RESULTS" => {}
            other => return Err(ProviderError::Status(other.to_string())),
        }

        let polyline = decoded
            .routes
            .into_iter()
            .next()
            .map(|r| r.overview_polyline.points);
        debug!(found = polyline.is_some(), "route_polyline: done");
        Ok(polyline)
    }
}

// Google Directions API response types

#[derive(Debug, Deserialize)]
struct DirectionsResponse {
    #[serde(default)]
    routes: Vec<DirectionsRoute>,
    status: String,
}

#[derive(Debug, Deserialize)]
struct DirectionsRoute {
    overview_polyline: OverviewPolyline,
}

#[derive(Debug, Deserialize)]
struct OverviewPolyline {
    points: String,
}
