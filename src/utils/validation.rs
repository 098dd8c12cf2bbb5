//! Input validation for short codes, hosts and redirect targets.

use serde_json::json;
use url::Url;

use crate::error::AppError;

/// Codes that collide with fixed routes and could never be reached.
const RESERVED_CODES: &[&str] = &["admin", "health"];

/// Rejects empty values. Whitespace counts as content; later checks decide
/// whether it is acceptable for the field.
///
/// # Errors
///
/// Returns [`AppError::Validation`] naming the offending field.
pub fn require_non_empty(field: &'static str, value: &str) -> Result<(), AppError> {
    if value.is_empty() {
        return Err(AppError::bad_request(
            "Missing required fields",
            json!({ "field": field }),
        ));
    }
    Ok(())
}

/// Validates a user-chosen short code.
///
/// # Rules
///
/// - Must be a single path segment (no `/`)
/// - Cannot be a reserved system code
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
///
/// # Examples
///
/// ```ignore
/// assert!(validate_short_code("promo").is_ok());
/// assert!(validate_short_code("a/b").is_err());
/// assert!(validate_short_code("admin").is_err());
/// ```
pub fn validate_short_code(code: &str) -> Result<(), AppError> {
    if code.contains('/') {
        return Err(AppError::bad_request(
            "Short code cannot contain '/'",
            json!({ "code": code }),
        ));
    }

    if RESERVED_CODES.contains(&code) {
        return Err(AppError::bad_request(
            "This code is reserved",
            json!({ "code": code }),
        ));
    }

    Ok(())
}

/// Validates a redirect target.
///
/// Only absolute HTTP and HTTPS URLs are accepted; `javascript:`, `data:`,
/// `file:` and relative references are rejected.
///
/// # Errors
///
/// Returns [`AppError::Validation`] naming the offending field.
pub fn validate_redirect_url(field: &'static str, value: &str) -> Result<(), AppError> {
    match Url::parse(value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(()),
        Ok(url) => Err(AppError::bad_request(
            "Only HTTP and HTTPS protocols are allowed",
            json!({ "field": field, "scheme": url.scheme() }),
        )),
        Err(e) => Err(AppError::bad_request(
            "Invalid URL",
            json!({ "field": field, "reason": e.to_string() }),
        )),
    }
}

/// Validates a domain key.
///
/// Domains are compared with the raw `Host` header, so a `:port` suffix and
/// bracketed IPv6 literals are allowed.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the length or character set is invalid.
pub fn validate_host(domain: &str) -> Result<(), AppError> {
    if domain.is_empty() || domain.len() > 255 {
        return Err(AppError::bad_request(
            "Invalid domain name length",
            json!({ "min": 1, "max": 255 }),
        ));
    }

    if !domain
        .chars()
        .all(|c| c.is_alphanumeric() || matches!(c, '.' | '-' | ':' | '[' | ']'))
    {
        return Err(AppError::bad_request(
            "Invalid characters in domain name",
            json!({ "allowed": "a-z, 0-9, dots, hyphens, port suffix" }),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_non_empty() {
        assert!(require_non_empty("code", "promo").is_ok());
        assert!(require_non_empty("code", "").is_err());
        assert!(require_non_empty("code", "   ").is_ok());
    }

    #[test]
    fn test_whitespace_redirect_still_rejected_by_url_check() {
        assert!(require_non_empty("url", " ").is_ok());
        assert!(validate_redirect_url("url", " ").is_err());
    }

    #[test]
    fn test_short_code_accepts_plain_codes() {
        assert!(validate_short_code("promo").is_ok());
        assert!(validate_short_code("Summer-Sale_2026").is_ok());
        assert!(validate_short_code("x").is_ok());
    }

    #[test]
    fn test_short_code_rejects_slash() {
        assert!(validate_short_code("a/b").is_err());
    }

    #[test]
    fn test_short_code_rejects_reserved() {
        let err = validate_short_code("admin").unwrap_err();
        assert!(err.to_string().contains("reserved"));
        assert!(validate_short_code("health").is_err());
    }

    #[test]
    fn test_redirect_url_accepts_http_and_https() {
        assert!(validate_redirect_url("url", "https://x").is_ok());
        assert!(validate_redirect_url("url", "http://example.com/path?q=1").is_ok());
    }

    #[test]
    fn test_redirect_url_rejects_dangerous_schemes() {
        assert!(validate_redirect_url("url", "javascript:alert(1)").is_err());
        assert!(validate_redirect_url("url", "data:text/html,hi").is_err());
        assert!(validate_redirect_url("url", "file:///etc/passwd").is_err());
    }

    #[test]
    fn test_redirect_url_rejects_relative() {
        assert!(validate_redirect_url("url", "/relative/path").is_err());
        assert!(validate_redirect_url("url", "example.com").is_err());
    }

    #[test]
    fn test_host_accepts_common_forms() {
        assert!(validate_host("short.example.com").is_ok());
        assert!(validate_host("localhost").is_ok());
        assert!(validate_host("localhost:3000").is_ok());
        assert!(validate_host("[::1]:8080").is_ok());
    }

    #[test]
    fn test_host_rejects_invalid_characters() {
        assert!(validate_host("bad domain.com").is_err());
        assert!(validate_host("evil.com/path").is_err());
        assert!(validate_host("").is_err());
    }

    #[test]
    fn test_host_rejects_overlong() {
        let long = "a".repeat(256);
        assert!(validate_host(&long).is_err());
    }
}
