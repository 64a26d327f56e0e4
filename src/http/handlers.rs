//! HTTP handlers for the REST API.
//!
//! Each handler validates its payload, resolves the caller's
//! preferences, and delegates to the engine.

use axum::{extract::State, Json};
use tracing::info;

use super::auth::AuthenticatedUser;
use super::dto::{validate_feedback, validate_route, HealthResponse, RefineRequest, SuggestionsRequest};
use super::error::AppError;
use super::state::AppState;
use crate::api::EnrichedRoute;
use crate::prefs::resolve_preferences;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// GET /health
///
/// Health check endpoint to verify the service is running.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
    })
}

/// POST /api/suggestions
///
/// Plan supplementary stops along a route using the caller's stored
/// preferences and the base category set.
pub async fn get_route_suggestions(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(request): Json<SuggestionsRequest>,
) -> HandlerResult<EnrichedRoute> {
    validate_route(&request.route).map_err(AppError::BadRequest)?;

    let prefs = resolve_preferences(state.preferences.as_ref(), &user.user_id).await;
    let enriched = state.engine.suggest(&request.route, &prefs).await?;

    info!(user_id = %user.user_id, stops = enriched.stops.len(), "suggestions served");
    Ok(Json(enriched))
}

/// POST /api/refine
///
/// Re-plan stops after free-text feedback. The feedback widens the
/// category set; previously shown stops are replaced, not merged.
pub async fn refine_route(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(request): Json<RefineRequest>,
) -> HandlerResult<EnrichedRoute> {
    validate_route(&request.route).map_err(AppError::BadRequest)?;
    validate_feedback(&request.feedback).map_err(AppError::BadRequest)?;

    let prefs = resolve_preferences(state.preferences.as_ref(), &user.user_id).await;
    let enriched = state
        .engine
        .refine(&request.route, &request.feedback, &prefs, &request.previous_stops)
        .await?;

    info!(user_id = %user.user_id, stops = enriched.stops.len(), "refinement served");
    Ok(Json(enriched))
}
