//! Filesystem implementation of the key-value store.

use async_trait::async_trait;
use serde_json::json;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::domain::repositories::KeyValueStore;
use crate::error::AppError;

/// Stores every key as `<dir>/<key>.json`.
///
/// Writes go to a uniquely named sibling temp file which is then renamed over
/// the target, so readers never see a half-written document. The directory is
/// created on first write.
pub struct FileKeyValueStore {
    dir: PathBuf,
}

impl FileKeyValueStore {
    /// Creates a store rooted at `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the documents.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, AppError> {
        if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
            return Err(AppError::internal(
                "Invalid storage key",
                json!({ "key": key }),
            ));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn read(&self, key: &str) -> Result<Option<Vec<u8>>, AppError> {
        let path = self.path_for(key)?;

        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "Failed to read document");
                Err(AppError::persistence(
                    "Failed to read document",
                    json!({ "key": key, "reason": e.to_string() }),
                ))
            }
        }
    }

    async fn write(&self, key: &str, bytes: Vec<u8>) -> Result<(), AppError> {
        let path = self.path_for(key)?;
        let persistence_error = |stage: &str, e: std::io::Error| {
            tracing::error!(path = %path.display(), stage, error = %e, "Failed to write document");
            AppError::persistence(
                "Failed to write document",
                json!({ "key": key, "stage": stage, "reason": e.to_string() }),
            )
        };

        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| persistence_error("create_dir", e))?;

        let temp_path = path.with_extension(format!("json.{:016x}.tmp", rand::random::<u64>()));

        if let Err(e) = tokio::fs::write(&temp_path, &bytes).await {
            let _ = tokio::fs::remove_file(&temp_path).await;
            return Err(persistence_error("write_temp", e));
        }

        if let Err(e) = tokio::fs::rename(&temp_path, &path).await {
            let _ = tokio::fs::remove_file(&temp_path).await;
            return Err(persistence_error("rename", e));
        }

        tracing::debug!(path = %path.display(), size = bytes.len(), "Document written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_read_missing_key_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileKeyValueStore::new(dir.path());

        let result = store.read("links").await.unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileKeyValueStore::new(dir.path());

        store.write("links", b"{}".to_vec()).await.unwrap();

        assert_eq!(store.read("links").await.unwrap(), Some(b"{}".to_vec()));
        assert!(dir.path().join("links.json").exists());
    }

    #[tokio::test]
    async fn test_write_replaces_previous_document() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileKeyValueStore::new(dir.path());

        store.write("config", b"first".to_vec()).await.unwrap();
        store.write("config", b"second".to_vec()).await.unwrap();

        assert_eq!(store.read("config").await.unwrap(), Some(b"second".to_vec()));
    }

    #[tokio::test]
    async fn test_write_leaves_no_temp_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileKeyValueStore::new(dir.path());

        store.write("links", b"{}".to_vec()).await.unwrap();

        let names: Vec<String> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["links.json".to_string()]);
    }

    #[tokio::test]
    async fn test_write_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested").join("data");
        let store = FileKeyValueStore::new(&nested);

        store.write("links", b"{}".to_vec()).await.unwrap();

        assert!(nested.join("links.json").exists());
    }

    #[tokio::test]
    async fn test_write_into_unwritable_location_fails() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"not a directory").unwrap();
        let store = FileKeyValueStore::new(&blocker);

        let result = store.write("links", b"{}".to_vec()).await;

        assert!(matches!(result, Err(AppError::Persistence { .. })));
    }

    #[tokio::test]
    async fn test_rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileKeyValueStore::new(dir.path());

        assert!(store.read("../escape").await.is_err());
        assert!(store.write("a/b", Vec::new()).await.is_err());
    }
}
