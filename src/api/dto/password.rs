//! DTO for the password change endpoint.

use serde::Deserialize;

/// Request carrying the new admin password.
///
/// Length is enforced by [`crate::application::services::AdminService::change_password`].
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    #[serde(default)]
    pub new_password: String,
}
