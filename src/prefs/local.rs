//! In-memory preference store for development and testing.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use super::{PreferenceStore, StoredPreferences};

/// In-memory preference store keyed by user id.
#[derive(Default)]
pub struct LocalPreferenceStore {
    records: RwLock<HashMap<String, StoredPreferences>>,
}

impl LocalPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PreferenceStore for LocalPreferenceStore {
    async fn fetch_preferences(
        &self,
        user_id: &str,
    ) -> Result<Option<StoredPreferences>, anyhow::Error> {
        Ok(self.records.read().get(user_id).cloned())
    }

    async fn save_preferences(
        &self,
        user_id: &str,
        prefs: StoredPreferences,
    ) -> Result<(), anyhow::Error> {
        self.records.write().insert(user_id.to_string(), prefs);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Budget;
    use crate::prefs::resolve_preferences;

    #[tokio::test]
    async fn test_roundtrip() {
        let store = LocalPreferenceStore::new();
        let stored = StoredPreferences {
            budget: Some(Budget::High),
            ..StoredPreferences::default()
        };

        store.save_preferences("u1", stored.clone()).await.unwrap();
        assert_eq!(store.fetch_preferences("u1").await.unwrap(), Some(stored));
    }

    #[tokio::test]
    async fn test_unknown_user_resolves_to_defaults() {
        let store = LocalPreferenceStore::new();
        assert_eq!(store.fetch_preferences("nobody").await.unwrap(), None);

        let prefs = resolve_preferences(&store, "nobody").await;
        assert_eq!(prefs, crate::api::Preferences::default());
    }
}
