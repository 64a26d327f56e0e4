//! Axum-based HTTP server for the suggestion API.
//!
//! Thin plumbing around the engine: routing, request-schema
//! validation, bearer-token authentication, and error mapping. All
//! decision logic lives in [`crate::services`].

pub mod auth;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use auth::{AuthenticatedUser, LocalTokenVerifier, TokenVerifier};
pub use error::{ApiError, AppError};
pub use router::create_router;
pub use state::AppState;
