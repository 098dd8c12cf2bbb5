//! Repository trait definitions for the domain layer.
//!
//! The stores in [`crate::application::stores`] only depend on the
//! [`KeyValueStore`] contract; concrete adapters live in
//! `crate::infrastructure::persistence`.
//!
//! # Testing
//!
//! A mock implementation is generated via `mockall` for unit tests.

pub mod key_value_store;

pub use key_value_store::{KeyValueStore, LINKS_KEY, SETTINGS_KEY};

#[cfg(test)]
pub use key_value_store::MockKeyValueStore;
