//! External provider clients.
//!
//! The engine talks to two outside collaborators: a places provider
//! (nearby POI search) and a directions provider (route geometry).
//! Both are behind traits so the engine can run against fakes in
//! tests; the real implementations are reqwest clients constructed
//! once at startup from [`crate::config::ProviderConfig`] and injected
//! wherever they are needed.

pub mod directions;
pub mod error;
pub mod places;

pub use directions::{DirectionsProvider, GoogleDirectionsClient};
pub use error::ProviderError;
pub use places::{GooglePlacesClient, PlacesProvider, SEARCH_RADIUS_METERS};
