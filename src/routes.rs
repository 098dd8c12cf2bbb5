//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`        - Default redirect for the requesting host (public)
//! - `GET  /{code}`  - Short link redirect (public)
//! - `GET  /health`  - Health check: storage and both stores (public)
//! - `/admin/*`      - JSON admin API (HTTP Basic required)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Authentication** - HTTP Basic against the stored admin credential
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler, root_redirect_handler};
use crate::api::middleware::{auth, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}

/// Public and admin routes with authentication and tracing, before path
/// normalization.
///
/// `/health` and `/admin/*` take precedence over `/{code}`, so `health` and
/// `admin` can never be served as short codes.
pub fn router(state: AppState) -> Router {
    let admin_router = api::routes::admin_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    Router::new()
        .route("/", get(root_redirect_handler))
        .route("/health", get(health_handler))
        .route("/{code}", get(redirect_handler))
        .nest("/admin", admin_router)
        .with_state(state)
        .layer(tracing::layer())
}
