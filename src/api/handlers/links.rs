//! Handlers for link management endpoints (upsert, delete, import, export).

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::link::{LinkItem, UpsertLinkRequest};
use crate::application::services::ImportSummary;
use crate::domain::entities::LinkTable;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a link or overwrites the link with the same code.
///
/// # Endpoint
///
/// `POST /admin/links`
///
/// # Request Body
///
/// ```json
/// {
///   "code": "promo",
///   "url": "https://example.com/summer",
///   "domain": "short.example.com"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if a field is missing, the URL is not HTTP/HTTPS
/// or the domain is not configured.
pub async fn upsert_link_handler(
    State(state): State<AppState>,
    Json(payload): Json<UpsertLinkRequest>,
) -> Result<Json<LinkItem>, AppError> {
    payload.validate()?;

    let code = payload.code.clone();
    let link = state
        .admin_service
        .create_or_update_link(payload.code, payload.url, payload.domain)
        .await?;

    Ok(Json(LinkItem {
        code,
        url: link.url,
        domain: link.domain,
    }))
}

/// Removes a link.
///
/// # Endpoint
///
/// `DELETE /admin/links/{code}`
///
/// Idempotent: deleting an unknown code also answers 204 No Content.
pub async fn delete_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.admin_service.delete_link(&code).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Returns the whole link table, keyed by code.
///
/// # Endpoint
///
/// `GET /admin/links/export`
///
/// # Response
///
/// ```json
/// {
///   "promo": { "url": "https://example.com/summer", "domain": "short.example.com" }
/// }
/// ```
///
/// The body is accepted unchanged by `POST /admin/links/import`.
pub async fn export_links_handler(State(state): State<AppState>) -> Json<LinkTable> {
    Json(state.admin_service.export_links().await)
}

/// Merges a batch of links into the table.
///
/// # Endpoint
///
/// `POST /admin/links/import`
///
/// Entries in the batch overwrite existing entries with the same code. Their
/// domains are not checked against the configured domains.
///
/// # Response
///
/// ```json
/// { "imported": 2, "total": 10 }
/// ```
pub async fn import_links_handler(
    State(state): State<AppState>,
    Json(batch): Json<LinkTable>,
) -> Result<Json<ImportSummary>, AppError> {
    let summary = state.admin_service.import_links(batch).await?;

    Ok(Json(summary))
}
