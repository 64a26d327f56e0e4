//! Application state for the HTTP server.

use std::sync::Arc;

use super::auth::TokenVerifier;
use crate::prefs::PreferenceStore;
use crate::services::SuggestionEngine;

/// Shared application state passed to all handlers.
///
/// Every collaborator is constructed once at process start and
/// injected here; handlers never reach for globals.
#[derive(Clone)]
pub struct AppState {
    /// Suggestion and refinement engine
    pub engine: Arc<SuggestionEngine>,
    /// Preference store for per-user preference lookup
    pub preferences: Arc<dyn PreferenceStore>,
    /// Bearer-token verifier
    pub verifier: Arc<dyn TokenVerifier>,
}

impl AppState {
    /// Create a new application state with the given collaborators.
    pub fn new(
        engine: Arc<SuggestionEngine>,
        preferences: Arc<dyn PreferenceStore>,
        verifier: Arc<dyn TokenVerifier>,
    ) -> Self {
        Self {
            engine,
            preferences,
            verifier,
        }
    }
}
