//! Provider configuration and environment variable handling.

use std::env;

use thiserror::Error;

const PLACES_BASE_URL: &str = "https://maps.googleapis.com/maps/api/place/nearbysearch/json";
const DIRECTIONS_BASE_URL: &str = "https://maps.googleapis.com/maps/api/directions/json";

/// Configuration errors raised during startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("required environment variable {0} is not set")]
    MissingVar(&'static str),
}

/// Configuration for the external Google Maps providers.
///
/// A missing API key is fatal: provider clients refuse to start rather
/// than fail on the first request.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// API key shared by the places and directions endpoints
    pub api_key: String,
    /// Base URL of the nearby-search endpoint
    pub places_base_url: String,
    /// Base URL of the directions endpoint
    pub directions_base_url: String,
    /// Request timeout in milliseconds
    pub timeout_ms: u64,
}

impl ProviderConfig {
    /// Load provider configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `GOOGLE_MAPS_API_KEY` (required): API key for both providers
    /// - `PLACES_BASE_URL` (optional): override the nearby-search endpoint
    /// - `DIRECTIONS_BASE_URL` (optional): override the directions endpoint
    /// - `PROVIDER_TIMEOUT_MS` (optional, default: 10000): request timeout
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var("GOOGLE_MAPS_API_KEY")
            .ok()
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::MissingVar("GOOGLE_MAPS_API_KEY"))?;

        Ok(ProviderConfig {
            api_key,
            places_base_url: env::var("PLACES_BASE_URL")
                .unwrap_or_else(|_| PLACES_BASE_URL.to_string()),
            directions_base_url: env::var("DIRECTIONS_BASE_URL")
                .unwrap_or_else(|_| DIRECTIONS_BASE_URL.to_string()),
            timeout_ms: env::var("PROVIDER_TIMEOUT_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10_000),
        })
    }

    /// Build a configuration directly, primarily for tests.
    pub fn new(api_key: impl Into<String>) -> Self {
        ProviderConfig {
            api_key: api_key.into(),
            places_base_url: PLACES_BASE_URL.to_string(),
            directions_base_url: DIRECTIONS_BASE_URL.to_string(),
            timeout_ms: 10_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_default_endpoints() {
        let config = ProviderConfig::new("test-key");
        assert_eq!(config.api_key, "test-key");
        assert!(config.places_base_url.contains("nearbysearch"));
        assert!(config.directions_base_url.contains("directions"));
        assert_eq!(config.timeout_ms, 10_000);
    }
}
