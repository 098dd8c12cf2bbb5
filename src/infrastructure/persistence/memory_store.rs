//! In-memory implementation of the key-value store.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::repositories::KeyValueStore;
use crate::error::AppError;

/// Keeps documents in a process-local map.
///
/// Used by tests and by ephemeral runs where nothing should touch disk.
#[derive(Default)]
pub struct MemoryKeyValueStore {
    documents: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryKeyValueStore {
    async fn read(&self, key: &str) -> Result<Option<Vec<u8>>, AppError> {
        Ok(self.documents.read().await.get(key).cloned())
    }

    async fn write(&self, key: &str, bytes: Vec<u8>) -> Result<(), AppError> {
        self.documents.write().await.insert(key.to_string(), bytes);
        Ok(())
    }
}
