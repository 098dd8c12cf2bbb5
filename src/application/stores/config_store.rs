//! Persistent store for server settings.

use std::sync::Arc;

use super::document::PersistedDocument;
use crate::domain::entities::Settings;
use crate::domain::repositories::{KeyValueStore, SETTINGS_KEY};
use crate::error::AppError;

/// Owns the live [`Settings`] and keeps them in sync with the `config` key.
pub struct ConfigStore {
    document: PersistedDocument<Settings>,
}

impl ConfigStore {
    /// Loads settings, writing [`Settings::bootstrap`] first if none are stored.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] if the document cannot be read,
    /// decoded, or (on first start) written.
    pub async fn load(kv: Arc<dyn KeyValueStore>) -> Result<Self, AppError> {
        let document = PersistedDocument::load(kv, SETTINGS_KEY, Settings::bootstrap).await?;
        Ok(Self { document })
    }

    /// Returns the last committed settings.
    pub async fn snapshot(&self) -> Arc<Settings> {
        self.document.snapshot().await
    }

    /// Persists `settings` and makes them current.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] if the write fails; the previous
    /// settings stay current.
    pub async fn save(&self, settings: Settings) -> Result<(), AppError> {
        self.document.replace(settings).await
    }

    /// Runs a read-modify-write-persist cycle under the store's writer lock.
    ///
    /// # Errors
    ///
    /// Propagates the error from `op` or from the write. Either way nothing
    /// is committed.
    pub async fn mutate<R, F>(&self, op: F) -> Result<R, AppError>
    where
        F: FnOnce(&mut Settings) -> Result<R, AppError> + Send,
    {
        self.document.mutate(op).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::DomainConfig;
    use crate::domain::repositories::MockKeyValueStore;
    use crate::infrastructure::persistence::MemoryKeyValueStore;
    use serde_json::json;

    #[tokio::test]
    async fn test_load_bootstraps_and_persists_default_settings() {
        let kv = Arc::new(MemoryKeyValueStore::new());

        let store = ConfigStore::load(kv.clone()).await.unwrap();

        assert_eq!(*store.snapshot().await, Settings::bootstrap());
        let stored = kv.read(SETTINGS_KEY).await.unwrap().unwrap();
        let decoded: Settings = serde_json::from_slice(&stored).unwrap();
        assert_eq!(decoded, Settings::bootstrap());
    }

    #[tokio::test]
    async fn test_load_reads_existing_document() {
        let kv = Arc::new(MemoryKeyValueStore::new());
        let raw = json!({
            "port": 8080,
            "adminDomain": "admin.a.com",
            "adminUsername": "root",
            "adminPassword": "hunter2hunter2",
            "domains": { "a.com": { "defaultRedirect": "https://fallback-a" } }
        });
        kv.write(SETTINGS_KEY, serde_json::to_vec(&raw).unwrap())
            .await
            .unwrap();

        let store = ConfigStore::load(kv).await.unwrap();
        let settings = store.snapshot().await;

        assert_eq!(settings.port, 8080);
        assert_eq!(settings.credential.username, "root");
        assert_eq!(settings.domains.len(), 1);
    }

    #[tokio::test]
    async fn test_load_rejects_corrupt_document() {
        let mut mock_kv = MockKeyValueStore::new();
        mock_kv
            .expect_read()
            .withf(|key| key == SETTINGS_KEY)
            .times(1)
            .returning(|_| Ok(Some(b"{ not json".to_vec())));
        mock_kv.expect_write().never();

        let result = ConfigStore::load(Arc::new(mock_kv)).await;

        assert!(matches!(result, Err(AppError::Persistence { .. })));
    }

    #[tokio::test]
    async fn test_load_reports_bootstrap_write_failure() {
        let mut mock_kv = MockKeyValueStore::new();
        mock_kv.expect_read().times(1).returning(|_| Ok(None));
        mock_kv
            .expect_write()
            .times(1)
            .returning(|_, _| Err(AppError::persistence("disk full", json!({}))));

        let result = ConfigStore::load(Arc::new(mock_kv)).await;

        assert!(matches!(result, Err(AppError::Persistence { .. })));
    }

    #[tokio::test]
    async fn test_failed_save_keeps_previous_settings() {
        let mut mock_kv = MockKeyValueStore::new();
        mock_kv.expect_read().times(1).returning(|_| Ok(None));
        let mut seq = mockall::Sequence::new();
        mock_kv
            .expect_write()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        mock_kv
            .expect_write()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(AppError::persistence("read-only filesystem", json!({}))));

        let store = ConfigStore::load(Arc::new(mock_kv)).await.unwrap();

        let mut changed = Settings::bootstrap();
        changed.port = 9999;
        let result = store.save(changed).await;

        assert!(matches!(result, Err(AppError::Persistence { .. })));
        assert_eq!(store.snapshot().await.port, 3000);
    }

    #[tokio::test]
    async fn test_mutate_commits_change() {
        let kv = Arc::new(MemoryKeyValueStore::new());
        let store = ConfigStore::load(kv.clone()).await.unwrap();

        store
            .mutate(|settings| {
                settings
                    .domains
                    .insert("a.com".to_string(), DomainConfig::new("https://fallback-a"));
                Ok(())
            })
            .await
            .unwrap();

        assert!(store.snapshot().await.domains.contains_key("a.com"));

        let reloaded = ConfigStore::load(kv).await.unwrap();
        assert!(reloaded.snapshot().await.domains.contains_key("a.com"));
    }

    #[tokio::test]
    async fn test_mutate_error_commits_nothing() {
        let store = ConfigStore::load(Arc::new(MemoryKeyValueStore::new()))
            .await
            .unwrap();

        let result: Result<(), AppError> = store
            .mutate(|settings| {
                settings.domains.clear();
                Err(AppError::bad_request("rejected", json!({})))
            })
            .await;

        assert!(result.is_err());
        assert_eq!(store.snapshot().await.domains.len(), 2);
    }
}
