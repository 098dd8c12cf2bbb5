//! Admin route configuration.
//!
//! Every admin endpoint requires HTTP Basic authentication via
//! [`crate::api::middleware::auth`], applied by the caller.

use crate::api::handlers::{
    add_domain_handler, change_password_handler, delete_link_handler, export_links_handler,
    export_settings_handler, import_links_handler, list_domains_handler, remove_domain_handler,
    settings_view_handler, update_settings_handler, upsert_link_handler,
};
use crate::error::AppError;
use crate::state::AppState;
use axum::{
    Router,
    extract::OriginalUri,
    routing::{delete, get, post},
};
use serde_json::json;

/// All admin routes, relative to the `/admin` prefix.
///
/// # Endpoints
///
/// - `POST   /links`             - Create or overwrite a link
/// - `GET    /links/export`      - Export the whole link table
/// - `POST   /links/import`      - Merge a batch of links
/// - `DELETE /links/{code}`      - Remove a link
/// - `GET    /domains`           - List configured domains
/// - `POST   /domains`           - Add a domain or replace its default redirect
/// - `DELETE /domains/{domain}`  - Remove a domain (links are kept)
/// - `GET    /settings`          - Settings without the credential
/// - `POST   /settings`          - Partial settings update
/// - `GET    /settings/export`   - Full settings document
/// - `POST   /password`          - Change the admin password
///
/// Any other path under the prefix answers a JSON 404.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/links", post(upsert_link_handler))
        .route("/links/export", get(export_links_handler))
        .route("/links/import", post(import_links_handler))
        .route("/links/{code}", delete(delete_link_handler))
        .route(
            "/domains",
            get(list_domains_handler).post(add_domain_handler),
        )
        .route("/domains/{domain}", delete(remove_domain_handler))
        .route(
            "/settings",
            get(settings_view_handler).post(update_settings_handler),
        )
        .route("/settings/export", get(export_settings_handler))
        .route("/password", post(change_password_handler))
        .fallback(admin_not_found)
}

async fn admin_not_found(OriginalUri(uri): OriginalUri) -> AppError {
    AppError::not_found("Unknown admin endpoint", json!({ "path": uri.path() }))
}
