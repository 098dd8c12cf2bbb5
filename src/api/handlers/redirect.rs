//! Handlers for host-aware short link redirects.

use axum::{
    extract::{Path, State},
    http::{HeaderMap, HeaderValue, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use tracing::{debug, error};

use crate::domain::resolver::{FALLBACK_REDIRECT, resolve};
use crate::state::AppState;
use crate::utils::request_host::request_host;

/// Redirects a short code on the requesting host.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Read the raw host (port included) from `Host`, or the URI authority
///    over HTTP/2
/// 2. Take snapshots of the link table and the settings
/// 3. Resolve link, then the host's default redirect, then the fallback
/// 4. Return 307 Temporary Redirect
///
/// Never fails: unknown codes and unknown hosts still redirect somewhere.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
) -> Response {
    redirect_request(&state, request_host(&headers, &uri), &code).await
}

/// Redirects the bare host to its default redirect.
///
/// # Endpoint
///
/// `GET /`
pub async fn root_redirect_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
) -> Response {
    redirect_request(&state, request_host(&headers, &uri), "").await
}

async fn redirect_request(state: &AppState, host: &str, path: &str) -> Response {
    let links = state.link_store.snapshot().await;
    let settings = state.config_store.snapshot().await;

    let target = resolve(host, path, &links, &settings);
    debug!(
        host,
        path,
        source = target.source.as_str(),
        target = %target.url,
        "Resolved redirect"
    );

    temporary_redirect(&target.url)
}

/// Builds a 307 response, falling back when the stored URL is not a valid
/// header value (imported links are not validated).
fn temporary_redirect(url: &str) -> Response {
    let location = HeaderValue::from_str(url).unwrap_or_else(|e| {
        error!(error = %e, url, "Stored redirect target is not a valid Location header");
        HeaderValue::from_static(FALLBACK_REDIRECT)
    });

    (StatusCode::TEMPORARY_REDIRECT, [(header::LOCATION, location)]).into_response()
}
