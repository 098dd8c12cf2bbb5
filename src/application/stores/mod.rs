//! Lock-guarded, persisted stores for the two live tables.
//!
//! Each store keeps one authoritative in-memory copy shared by all request
//! handlers and mirrors it to a [`crate::domain::repositories::KeyValueStore`].
//!
//! - [`ConfigStore`] - Settings (credential and domain table)
//! - [`LinkStore`] - Short link table

mod document;

pub mod config_store;
pub mod link_store;

pub use config_store::ConfigStore;
pub use link_store::LinkStore;
