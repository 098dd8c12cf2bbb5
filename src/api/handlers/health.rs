//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::domain::repositories::SETTINGS_KEY;
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: The backing storage cannot be read
///
/// # Components Checked
///
/// 1. **Storage**: Reads the settings document back from the key-value store
/// 2. **Config store**: Reports the number of configured domains
/// 3. **Link store**: Reports the number of links
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "storage": { "status": "ok", "message": "Settings document readable" },
///     "config_store": { "status": "ok", "message": "2 domains configured" },
///     "link_store": { "status": "ok", "message": "14 links" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let storage = check_storage(&state).await;
    let config_store = CheckStatus::ok(format!(
        "{} domains configured",
        state.config_store.snapshot().await.domains.len()
    ));
    let link_store = CheckStatus::ok(format!("{} links", state.link_store.snapshot().await.len()));

    let all_healthy = storage.is_ok() && config_store.is_ok() && link_store.is_ok();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            storage,
            config_store,
            link_store,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks that the settings document can still be read from storage.
async fn check_storage(state: &AppState) -> CheckStatus {
    match state.storage.read(SETTINGS_KEY).await {
        Ok(Some(_)) => CheckStatus::ok("Settings document readable"),
        Ok(None) => CheckStatus::error("Settings document missing"),
        Err(e) => CheckStatus::error(format!("Storage error: {}", e)),
    }
}
