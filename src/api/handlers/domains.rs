//! Handlers for domain management endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::domain::{AddDomainRequest, DomainItem, DomainListResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Lists configured domains with their default redirects.
///
/// # Endpoint
///
/// `GET /admin/domains`
///
/// # Response
///
/// ```json
/// {
///   "items": [
///     { "domain": "short.example.com", "defaultRedirect": "https://example.com" }
///   ]
/// }
/// ```
pub async fn list_domains_handler(State(state): State<AppState>) -> Json<DomainListResponse> {
    let items = state
        .admin_service
        .list_domains()
        .await
        .into_iter()
        .map(|(domain, config)| DomainItem {
            domain,
            default_redirect: config.default_redirect,
        })
        .collect();

    Json(DomainListResponse { items })
}

/// Adds a domain or replaces its default redirect.
///
/// # Endpoint
///
/// `POST /admin/domains`
///
/// # Request Body
///
/// ```json
/// { "domain": "go.example.org", "defaultRedirect": "https://example.org" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if a field is missing or invalid.
pub async fn add_domain_handler(
    State(state): State<AppState>,
    Json(payload): Json<AddDomainRequest>,
) -> Result<Json<DomainItem>, AppError> {
    payload.validate()?;

    let domain = payload.domain.clone();
    let config = state
        .admin_service
        .add_domain(payload.domain, payload.default_redirect)
        .await?;

    Ok(Json(DomainItem {
        domain,
        default_redirect: config.default_redirect,
    }))
}

/// Removes a domain.
///
/// # Endpoint
///
/// `DELETE /admin/domains/{domain}`
///
/// Links bound to the domain are kept. Idempotent: removing an unknown domain
/// also answers 204 No Content.
pub async fn remove_domain_handler(
    Path(domain): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.admin_service.remove_domain(&domain).await?;

    Ok(StatusCode::NO_CONTENT)
}
