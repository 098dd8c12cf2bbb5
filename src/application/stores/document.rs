//! Shared machinery for a single persisted document with an in-memory copy.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::json;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

use crate::domain::repositories::KeyValueStore;
use crate::error::AppError;

/// One document held in memory and mirrored to a [`KeyValueStore`] key.
///
/// Readers clone the current `Arc` and never wait on I/O. Writers are
/// serialized by `writer`, which is held across the whole
/// read-modify-write-persist sequence; the new value is swapped in only after
/// the backing store accepted it.
pub(crate) struct PersistedDocument<T> {
    key: &'static str,
    kv: Arc<dyn KeyValueStore>,
    current: RwLock<Arc<T>>,
    writer: Mutex<()>,
}

impl<T> PersistedDocument<T>
where
    T: Serialize + DeserializeOwned + Clone + Send + Sync + 'static,
{
    /// Loads the document, creating and persisting `init()` if the key is absent.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] if the store cannot be read, the
    /// stored bytes do not decode, or the initial document cannot be written.
    pub(crate) async fn load(
        kv: Arc<dyn KeyValueStore>,
        key: &'static str,
        init: impl FnOnce() -> T,
    ) -> Result<Self, AppError> {
        let value = match kv.read(key).await? {
            Some(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                tracing::error!(key, error = %e, "Stored document is not valid JSON for its type");
                AppError::persistence(
                    "Stored document could not be decoded",
                    json!({ "key": key, "reason": e.to_string() }),
                )
            })?,
            None => {
                let value = init();
                kv.write(key, encode(key, &value)?).await?;
                tracing::info!(key, "Created initial document");
                value
            }
        };

        Ok(Self {
            key,
            kv,
            current: RwLock::new(Arc::new(value)),
            writer: Mutex::new(()),
        })
    }

    /// Returns the last committed value.
    pub(crate) async fn snapshot(&self) -> Arc<T> {
        self.current.read().await.clone()
    }

    /// Applies `op` to a copy of the current value and commits it.
    ///
    /// If `op` fails or the write is rejected, the in-memory value is left
    /// untouched and the error is returned.
    pub(crate) async fn mutate<R, F>(&self, op: F) -> Result<R, AppError>
    where
        F: FnOnce(&mut T) -> Result<R, AppError> + Send,
    {
        let _guard = self.writer.lock().await;

        let mut next = T::clone(&*self.snapshot().await);
        let result = op(&mut next)?;

        self.commit(next).await?;
        Ok(result)
    }

    /// Replaces the whole value.
    pub(crate) async fn replace(&self, value: T) -> Result<(), AppError> {
        let _guard = self.writer.lock().await;
        self.commit(value).await
    }

    async fn commit(&self, value: T) -> Result<(), AppError> {
        self.kv.write(self.key, encode(self.key, &value)?).await?;
        *self.current.write().await = Arc::new(value);
        Ok(())
    }
}

fn encode<T: Serialize>(key: &str, value: &T) -> Result<Vec<u8>, AppError> {
    serde_json::to_vec_pretty(value).map_err(|e| {
        AppError::internal(
            "Failed to encode document",
            json!({ "key": key, "reason": e.to_string() }),
        )
    })
}
