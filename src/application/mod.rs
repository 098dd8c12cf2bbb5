//! Application layer: live stores and the services that operate on them.
//!
//! # Modules
//!
//! - [`stores`] - Lock-guarded, persisted settings and link tables
//! - [`services`] - Admin mutations and credential checks
//!
//! # Available Services
//!
//! - [`services::admin_service::AdminService`] - Validated link, domain and settings mutations
//! - [`services::auth_service::AuthService`] - Admin credential authentication

pub mod services;
pub mod stores;
