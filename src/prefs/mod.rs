//! User preference storage and resolution.
//!
//! Stored preference records may be partial; callers always receive a
//! fully-populated [`Preferences`] with defaults merged over whatever
//! the store holds. A failing store never fails the caller: resolution
//! falls back to the documented defaults with a warning.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::api::{Budget, Preferences};

pub mod local;

pub use local::LocalPreferenceStore;

/// A partially-populated preference record as held by the store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredPreferences {
    #[serde(default)]
    pub budget: Option<Budget>,
    #[serde(default)]
    pub avoid_tolls: Option<bool>,
    #[serde(default)]
    pub cuisine: Option<Vec<String>>,
    #[serde(default)]
    pub min_rating: Option<f64>,
}

impl StoredPreferences {
    /// Merge this record over the default preferences.
    pub fn merged_with_defaults(self) -> Preferences {
        let defaults = Preferences::default();
        Preferences {
            budget: self.budget.unwrap_or(defaults.budget),
            avoid_tolls: self.avoid_tolls.unwrap_or(defaults.avoid_tolls),
            cuisine: self.cuisine.unwrap_or(defaults.cuisine),
            min_rating: self.min_rating.unwrap_or(defaults.min_rating),
        }
    }
}

/// Store of per-user preference records.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Fetch the stored preference record for a user.
    ///
    /// Returns `Ok(None)` when the user has no stored record.
    async fn fetch_preferences(
        &self,
        user_id: &str,
    ) -> Result<Option<StoredPreferences>, anyhow::Error>;

    /// Replace the stored preference record for a user.
    async fn save_preferences(
        &self,
        user_id: &str,
        prefs: StoredPreferences,
    ) -> Result<(), anyhow::Error>;
}

/// Resolve a user's preferences to a fully-populated value.
///
/// Store failures are swallowed: the engine runs with defaults rather
/// than failing the request.
pub async fn resolve_preferences(store: &dyn PreferenceStore, user_id: &str) -> Preferences {
    match store.fetch_preferences(user_id).await {
        Ok(Some(stored)) => stored.merged_with_defaults(),
        Ok(None) => Preferences::default(),
        Err(e) => {
            warn!(user_id, error = %e, "failed to fetch preferences, using defaults");
            Preferences::default()
        }
    }
}
