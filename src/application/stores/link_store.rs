//! Persistent store for the short link table.

use std::sync::Arc;

use super::document::PersistedDocument;
use crate::domain::entities::LinkTable;
use crate::domain::repositories::{KeyValueStore, LINKS_KEY};
use crate::error::AppError;

/// Owns the live [`LinkTable`] and keeps it in sync with the `links` key.
pub struct LinkStore {
    document: PersistedDocument<LinkTable>,
}

impl LinkStore {
    /// Loads the link table, writing an empty one first if none is stored.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] if the document cannot be read,
    /// decoded, or (on first start) written.
    pub async fn load(kv: Arc<dyn KeyValueStore>) -> Result<Self, AppError> {
        let document = PersistedDocument::load(kv, LINKS_KEY, LinkTable::new).await?;
        Ok(Self { document })
    }

    /// Returns the last committed table.
    pub async fn snapshot(&self) -> Arc<LinkTable> {
        self.document.snapshot().await
    }

    /// Persists `table` and makes it current.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] if the write fails; the previous
    /// table stays current.
    pub async fn save(&self, table: LinkTable) -> Result<(), AppError> {
        self.document.replace(table).await
    }

    /// Runs a read-modify-write-persist cycle under the store's writer lock.
    ///
    /// # Errors
    ///
    /// Propagates the error from `op` or from the write. Either way nothing
    /// is committed.
    pub async fn mutate<R, F>(&self, op: F) -> Result<R, AppError>
    where
        F: FnOnce(&mut LinkTable) -> Result<R, AppError> + Send,
    {
        self.document.mutate(op).await
    }
}
