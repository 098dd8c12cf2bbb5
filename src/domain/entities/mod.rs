//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures; validation lives in
//! [`crate::application::services`].
//!
//! # Entity Types
//!
//! - [`Link`] / [`LinkTable`] - Short codes and their targets
//! - [`DomainConfig`] / [`DomainTable`] - Per-host default redirects
//! - [`Settings`] - Admin credential plus the domain table
//!
//! Partial updates use a dedicated struct ([`SettingsPatch`]) with named
//! optional fields.

pub mod domain;
pub mod link;
pub mod settings;

pub use domain::{DomainConfig, DomainTable};
pub use link::{Link, LinkTable};
pub use settings::{AdminCredential, Settings, SettingsPatch, SettingsView};
