//! HTTP Basic authentication middleware for the admin surface.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBasic;

use crate::{error::AppError, state::AppState};

/// Authenticates requests against the stored admin credential.
///
/// # Header Format
///
/// ```text
/// Authorization: Basic base64(<username>:<password>)
/// ```
///
/// # Authentication Flow
///
/// 1. Decode username and password from the `Authorization` header
/// 2. Compare both against the current settings snapshot
/// 3. Continue to next middleware/handler
///
/// # Errors
///
/// Returns `401 Unauthorized` with `WWW-Authenticate: Basic realm="admin"` if:
/// - Authorization header is missing or not Basic
/// - Username or password does not match
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, routing::get, middleware};
/// use crate::api::middleware::auth;
///
/// let admin = Router::new()
///     .route("/settings", get(settings_view_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBasic((username, password)) = AuthBasic::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| {
            AppError::unauthorized(
                "Unauthorized",
                serde_json::json!({"reason": "Authorization header is missing or invalid"}),
            )
        })?;

    let req = Request::from_parts(parts, body);

    st.auth_service
        .authenticate(&username, password.as_deref().unwrap_or_default())
        .await?;

    Ok(next.run(req).await)
}
