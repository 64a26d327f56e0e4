//! Bearer-token authentication.
//!
//! Token verification itself is an external concern; the
//! [`TokenVerifier`] trait is the seam where a real identity provider
//! plugs in. The extractor only handles header parsing and maps
//! failures to 401.

use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::header, http::request::Parts};

use super::error::AppError;
use super::state::AppState;

/// Verifier of bearer tokens.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    /// Verify a bearer token and return the authenticated user id.
    async fn verify(&self, token: &str) -> Result<String, anyhow::Error>;
}

/// Development verifier: the token itself is the user id.
///
/// Stands in for a real identity provider when running locally.
#[derive(Default)]
pub struct LocalTokenVerifier;

#[async_trait]
impl TokenVerifier for LocalTokenVerifier {
    async fn verify(&self, token: &str) -> Result<String, anyhow::Error> {
        if token.is_empty() {
            anyhow::bail!("empty token");
        }
        Ok(token.to_string())
    }
}

/// The resolved caller identity, extracted from the Authorization
/// header.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: String,
}

impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .ok_or_else(|| AppError::Unauthorized("missing bearer token".to_string()))?;

        let user_id = state
            .verifier
            .verify(token)
            .await
            .map_err(|_| AppError::Unauthorized("invalid token".to_string()))?;

        Ok(AuthenticatedUser { user_id })
    }
}
