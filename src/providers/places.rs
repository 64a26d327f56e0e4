//! Places provider client (Google Places nearby search).
//!
//! Issues one nearby-search request per (sample point, category) pair
//! and decodes the response into [`CandidateStop`]s with an explicit
//! schema, failing fast on shape mismatch.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use super::error::ProviderError;
use crate::api::{CandidateStop, Category, GeoPoint};
use crate::config::ProviderConfig;

/// Fixed search radius around each sample point.
pub const SEARCH_RADIUS_METERS: u32 = 15_000;

/// Provider of nearby POI search.
#[async_trait]
pub trait PlacesProvider: Send + Sync {
    /// Search for places of `category` within the fixed radius of `center`.
    ///
    /// Every returned stop carries the *queried* category, not the
    /// provider's own primary category for the place.
    async fn nearby_search(
        &self,
        center: GeoPoint,
        category: &Category,
    ) -> Result<Vec<CandidateStop>, ProviderError>;
}

/// Google Places nearby-search client.
pub struct GooglePlacesClient {
    api_key: String,
    base_url: String,
    http: Client,
}

impl GooglePlacesClient {
    /// Create a client from provider configuration.
    pub fn from_config(config: &ProviderConfig) -> Result<Self, ProviderError> {
        let http = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(ProviderError::Network)?;

        Ok(GooglePlacesClient {
            api_key: config.api_key.clone(),
            base_url: config.places_base_url.clone(),
            http,
        })
    }

    /// Map a decoded provider record to a candidate stop.
    fn to_candidate(record: PlaceRecord, category: &Category) -> CandidateStop {
        CandidateStop {
            place_id: record.place_id,
            name: record.name,
            location: record.geometry.location,
            category: category.clone(),
            rating: record.rating,
            price_level: record.price_level,
        }
    }
}

#[async_trait]
impl PlacesProvider for GooglePlacesClient {
    async fn nearby_search(
        &self,
        center: GeoPoint,
        category: &Category,
    ) -> Result<Vec<CandidateStop>, ProviderError> {
        debug!(%center, %category, "nearby_search: called");

        let response = self
            .http
            .get(&self.base_url)
            .query(&[
                ("key", self.api_key.clone()),
                ("location", center.to_string()),
                ("radius", SEARCH_RADIUS_METERS.to_string()),
                ("type", category.as_str().to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            debug!(%status, "nearby_search: HTTP error");
            return Err(ProviderError::Http {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let decoded: NearbySearchResponse = serde_json::from_str(&body)
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;

        match decoded.status.as_str() {
            "OK" | "ZERO_RESULTS" => {}
            other => return Err(ProviderError::Status(other.to_string())),
        }

        debug!(count = decoded.results.len(), "nearby_search: success");
        Ok(decoded
            .results
            .into_iter()
            .map(|r| Self::to_candidate(r, category))
            .collect())
    }
}

// Google Places API response types

#[derive(Debug, Deserialize)]
struct NearbySearchResponse {
    #[serde(default)]
    results: Vec<PlaceRecord>,
    status: String,
}

#[derive(Debug, Deserialize)]
struct PlaceRecord {
    place_id: String,
    name: String,
    geometry: PlaceGeometry,
    rating: Option<f64>,
    price_level: Option<i32>,
}

#[derive(Debug, Deserialize)]
struct PlaceGeometry {
    location: GeoPoint,
}
