//! Business logic services for the application layer.

pub mod admin_service;
pub mod auth_service;

pub use admin_service::{AdminService, ImportSummary};
pub use auth_service::AuthService;
