//! DTOs for link management.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to create a link or overwrite an existing one.
///
/// Missing fields deserialize as empty strings so they are reported as a
/// validation error rather than a JSON rejection.
#[derive(Debug, Deserialize, Validate)]
pub struct UpsertLinkRequest {
    /// Short code, a single path segment.
    #[serde(default)]
    #[validate(length(min = 1, message = "Missing required fields"))]
    pub code: String,

    /// Redirect target (absolute HTTP/HTTPS URL).
    #[serde(default)]
    #[validate(length(min = 1, message = "Missing required fields"))]
    pub url: String,

    /// Configured domain the code belongs to.
    #[serde(default)]
    #[validate(length(min = 1, message = "Missing required fields"))]
    pub domain: String,
}

/// A single link as returned by the admin API.
#[derive(Debug, Serialize)]
pub struct LinkItem {
    pub code: String,
    pub url: String,
    pub domain: String,
}
