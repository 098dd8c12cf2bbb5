//! # Domain Shortener
//!
//! A multi-domain short link redirector with a JSON admin API, built with Axum
//! and plain JSON files for storage.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Entities, the storage trait and the resolver
//! - **Application Layer** ([`application`]) - Live stores and admin/auth services
//! - **Infrastructure Layer** ([`infrastructure`]) - File and in-memory storage
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Several hostnames sharing one link table, each with its own default redirect
//! - Codes are bound to a domain and never leak across hosts
//! - Lock-free redirect path over immutable snapshots
//! - Atomic JSON persistence (temp file + rename)
//! - HTTP Basic protected admin API and an `admin` CLI
//!
//! ## Quick Start
//!
//! ```bash
//! export DATA_DIR="./data"   # config.json and links.json are created on first run
//! cargo run
//!
//! curl -u admin:password123 -X POST localhost:3000/admin/domains \
//!   -H 'content-type: application/json' \
//!   -d '{"domain":"localhost:3000","defaultRedirect":"https://example.com"}'
//! curl -u admin:password123 -X POST localhost:3000/admin/links \
//!   -H 'content-type: application/json' \
//!   -d '{"code":"promo","url":"https://example.com/summer","domain":"localhost:3000"}'
//! ```
//!
//! ## Configuration
//!
//! Process configuration is loaded from environment variables via
//! [`config::Config`]. Runtime settings live in the settings document.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AdminService, AuthService, ImportSummary};
    pub use crate::application::stores::{ConfigStore, LinkStore};
    pub use crate::domain::entities::{
        DomainConfig, DomainTable, Link, LinkTable, Settings, SettingsPatch, SettingsView,
    };
    pub use crate::domain::repositories::KeyValueStore;
    pub use crate::domain::resolver::{RedirectSource, RedirectTarget, resolve};
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::{FileKeyValueStore, MemoryKeyValueStore};
    pub use crate::state::AppState;
}
