//! Key-value persistence adapters.
//!
//! Concrete implementations of [`crate::domain::repositories::KeyValueStore`].
//!
//! # Adapters
//!
//! - [`FileKeyValueStore`] - JSON documents in a data directory
//! - [`MemoryKeyValueStore`] - Process-local, for tests and ephemeral runs

pub mod file_store;
pub mod memory_store;

pub use file_store::FileKeyValueStore;
pub use memory_store::MemoryKeyValueStore;
