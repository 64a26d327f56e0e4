//! Suggestion engine orchestration.
//!
//! Wires the pipeline together: sample the route, scatter
//! (point, category) queries against the places provider, dedupe and
//! rank the candidates, and attach the directions provider's encoded
//! path. The engine holds no state between requests; each call is
//! independent end-to-end.

use std::sync::Arc;

use futures::stream::{self, StreamExt, TryStreamExt};
use tracing::{debug, info};

use super::dedupe::dedupe_stops;
use super::ranking::rank_stops;
use super::refinement::classify_feedback;
use super::sampler::sample_points;
use crate::api::{CandidateStop, Category, EnrichedRoute, GeoPoint, Preferences, RoutePayload};
use crate::providers::{DirectionsProvider, PlacesProvider, ProviderError};

/// Cap on simultaneous outstanding provider requests.
const MAX_CONCURRENT_QUERIES: usize = 8;

/// The suggestion and refinement engine.
///
/// Provider clients are injected at construction; tests run the
/// engine against fakes.
pub struct SuggestionEngine {
    places: Arc<dyn PlacesProvider>,
    directions: Arc<dyn DirectionsProvider>,
}

impl SuggestionEngine {
    pub fn new(places: Arc<dyn PlacesProvider>, directions: Arc<dyn DirectionsProvider>) -> Self {
        SuggestionEngine { places, directions }
    }

    /// The category set used for a first suggestion pass.
    pub fn base_categories() -> Vec<Category> {
        vec![
            Category::restaurant(),
            Category::gas_station(),
            Category::lodging(),
        ]
    }

    /// Produce an enriched route for a fresh suggestion request.
    pub async fn suggest(
        &self,
        route: &RoutePayload,
        prefs: &Preferences,
    ) -> Result<EnrichedRoute, ProviderError> {
        info!("suggest: called");
        self.run_pipeline(route, Self::base_categories(), prefs).await
    }

    /// Produce an enriched route for a refinement request.
    ///
    /// The category set is widened from the feedback text. Previously
    /// shown stops are accepted as caller context but the provider is
    /// re-queried from scratch; old results are discarded, not merged.
    pub async fn refine(
        &self,
        route: &RoutePayload,
        feedback: &str,
        prefs: &Preferences,
        previous_stops: &[CandidateStop],
    ) -> Result<EnrichedRoute, ProviderError> {
        info!(previous = previous_stops.len(), "refine: called");
        let categories = classify_feedback(feedback, prefs);
        debug!(?categories, "refine: classified feedback");
        self.run_pipeline(route, categories, prefs).await
    }

    /// Shared suggestion pipeline: sample, query, dedupe, rank, enrich.
    async fn run_pipeline(
        &self,
        route: &RoutePayload,
        categories: Vec<Category>,
        prefs: &Preferences,
    ) -> Result<EnrichedRoute, ProviderError> {
        let points = sample_points(route);
        let raw = self.query_stops(&points, &categories).await?;
        debug!(raw = raw.len(), "run_pipeline: provider candidates");

        let unique = dedupe_stops(raw);
        let ranked = rank_stops(unique, prefs);
        debug!(ranked = ranked.len(), "run_pipeline: ranked stops");

        self.enrich(route, ranked).await
    }

    /// Attach the provider-computed path to the ranked stop list.
    ///
    /// The stops pass through verbatim; no re-ranking or re-filtering
    /// happens here.
    async fn enrich(
        &self,
        route: &RoutePayload,
        stops: Vec<CandidateStop>,
    ) -> Result<EnrichedRoute, ProviderError> {
        let polyline = self.directions.route_polyline(route).await?;
        Ok(EnrichedRoute { polyline, stops })
    }

    /// Query the places provider for every (point, category) pair.
    ///
    /// Requests are issued with bounded concurrency but results are
    /// flattened in logical order (point-major, category-minor), so
    /// the dedup tie-break never depends on completion order. Any
    /// single failed request fails the whole operation; there are no
    /// retries and no partial results.
    async fn query_stops(
        &self,
        points: &[GeoPoint],
        categories: &[Category],
    ) -> Result<Vec<CandidateStop>, ProviderError> {
        let pairs: Vec<(GeoPoint, Category)> = points
            .iter()
            .flat_map(|p| categories.iter().map(move |c| (*p, c.clone())))
            .collect();
        debug!(pairs = pairs.len(), "query_stops: scatter");

        // `buffered` yields in submission order regardless of which
        // request completes first.
        let batches: Vec<Vec<CandidateStop>> = stream::iter(pairs)
            .map(|(point, category)| {
                let places = Arc::clone(&self.places);
                async move { places.nearby_search(point, &category).await }
            })
            .buffered(MAX_CONCURRENT_QUERIES)
            .try_collect()
            .await?;

        Ok(batches.into_iter().flatten().collect())
    }
}
