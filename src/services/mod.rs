//! Service layer for the suggestion and refinement engine.
//!
//! This module contains the pipeline components (sampling,
//! classification, deduplication, ranking) and the engine that
//! orchestrates them against the provider clients.

pub mod dedupe;

pub mod ranking;

pub mod refinement;

pub mod sampler;

pub mod suggestions;

pub use dedupe::dedupe_stops;
pub use ranking::{rank_stops, MAX_RANKED_STOPS};
pub use refinement::classify_feedback;
pub use sampler::sample_points;
pub use suggestions::SuggestionEngine;
