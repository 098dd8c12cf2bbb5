//! Repository trait for opaque document persistence.

use crate::error::AppError;
use async_trait::async_trait;

/// Key under which the settings document is stored.
pub const SETTINGS_KEY: &str = "config";
/// Key under which the link table is stored.
pub const LINKS_KEY: &str = "links";

/// Byte-oriented key-value persistence.
///
/// Each key holds one whole document. Implementations must make `write`
/// atomic: a concurrent or later `read` sees either the previous bytes or the
/// new bytes, never a mix.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::FileKeyValueStore`] - One JSON file per key
/// - [`crate::infrastructure::persistence::MemoryKeyValueStore`] - Process-local map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Reads the document stored under `key`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(bytes))` if the key has been written
    /// - `Ok(None)` if it has never been written
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] if the underlying storage is unreadable.
    async fn read(&self, key: &str) -> Result<Option<Vec<u8>>, AppError>;

    /// Replaces the document stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] if the underlying storage is unwritable.
    async fn write(&self, key: &str, bytes: Vec<u8>) -> Result<(), AppError>;
}
