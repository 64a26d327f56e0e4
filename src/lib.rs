//! # Tripstop Backend
//!
//! Route stop suggestion and refinement engine.
//!
//! Given a driving route (origin, destination, optional waypoints) and
//! a user's preferences, this crate samples points along the route,
//! queries an external places provider per (point, category) pair,
//! deduplicates and ranks the candidates, and returns the ranked stop
//! list together with the directions provider's encoded path. Free-text
//! feedback on a previous result is classified into a widened category
//! set for the next pass.
//!
//! ## Architecture
//!
//! - [`api`]: domain types shared across the crate
//! - [`config`]: provider configuration from environment variables
//! - [`providers`]: reqwest clients for the places and directions
//!   providers, behind injectable traits
//! - [`services`]: the suggestion pipeline and orchestration engine
//! - [`prefs`]: per-user preference storage and default resolution
//! - [`http`]: axum-based HTTP server and request handlers
//!
//! The engine is stateless: every request is independent and nothing
//! is cached between calls.

pub mod api;
pub mod config;
pub mod prefs;
pub mod providers;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
