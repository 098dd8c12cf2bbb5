//! Handlers for server settings and the admin credential.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::password::ChangePasswordRequest;
use crate::domain::entities::{Settings, SettingsPatch, SettingsView};
use crate::error::AppError;
use crate::state::AppState;

/// Returns the settings without the admin credential.
///
/// # Endpoint
///
/// `GET /admin/settings`
pub async fn settings_view_handler(State(state): State<AppState>) -> Json<SettingsView> {
    Json(state.admin_service.settings_view().await)
}

/// Returns the full settings document, credential included.
///
/// # Endpoint
///
/// `GET /admin/settings/export`
///
/// The response has the same shape as the persisted `config.json`.
pub async fn export_settings_handler(State(state): State<AppState>) -> Json<Settings> {
    Json(state.admin_service.export_settings().await)
}

/// Applies a partial settings update.
///
/// # Endpoint
///
/// `POST /admin/settings`
///
/// # Request Body
///
/// Every field is optional; `domains` replaces the whole table.
///
/// ```json
/// {
///   "port": 8080,
///   "adminDomain": "admin.example.org",
///   "domains": { "go.example.org": { "defaultRedirect": "https://example.org" } }
/// }
/// ```
///
/// `adminUsername`/`adminPassword` are ignored; use `POST /admin/password`.
///
/// # Errors
///
/// Returns 400 Bad Request if a domain entry is invalid.
pub async fn update_settings_handler(
    State(state): State<AppState>,
    Json(patch): Json<SettingsPatch>,
) -> Result<Json<SettingsView>, AppError> {
    let view = state.admin_service.update_settings(patch).await?;

    Ok(Json(view))
}

/// Replaces the admin password.
///
/// # Endpoint
///
/// `POST /admin/password`
///
/// # Request Body
///
/// ```json
/// { "newPassword": "correct horse battery" }
/// ```
///
/// The new password is required on the very next request.
///
/// # Errors
///
/// Returns 400 Bad Request if the password is shorter than 8 characters.
pub async fn change_password_handler(
    State(state): State<AppState>,
    Json(payload): Json<ChangePasswordRequest>,
) -> Result<StatusCode, AppError> {
    state
        .admin_service
        .change_password(payload.new_password)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
