//! Provider error types.

use thiserror::Error;

/// Errors raised by the places and directions provider clients.
///
/// None of these are retried: a failed provider call fails the whole
/// suggestion or refinement request.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("provider returned HTTP {status}")]
    Http { status: u16 },

    #[error("provider returned status {0}")]
    Status(String),

    #[error("malformed provider response: {0}")]
    InvalidResponse(String),
}
