//! DTOs for domain management.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to add a domain or replace its default redirect.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddDomainRequest {
    /// Host as it appears in the `Host` header, port included if any.
    #[serde(default)]
    #[validate(length(min = 1, message = "Missing required fields"))]
    pub domain: String,

    /// Target used when no link matches on this host.
    #[serde(default)]
    #[validate(length(min = 1, message = "Missing required fields"))]
    pub default_redirect: String,
}

/// Individual domain information.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainItem {
    pub domain: String,
    pub default_redirect: String,
}

/// Response containing list of domains.
#[derive(Debug, Serialize)]
pub struct DomainListResponse {
    pub items: Vec<DomainItem>,
}
