//! Host extraction from HTTP requests.

use axum::http::{HeaderMap, Uri, header};

/// Returns the requesting host exactly as received.
///
/// The `Host` header wins when present. HTTP/2 clients send the host as the
/// `:authority` pseudo-header instead, which lands in the request URI, so the
/// URI authority is used when the header is absent.
///
/// Domains and link bindings are compared against this raw value, so a port
/// suffix is kept (`example.com:3000` is a different host from `example.com`).
/// A missing or non-UTF-8 host yields an empty string, which matches no
/// configured domain and therefore resolves to the fallback redirect.
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "example.com:8080".parse().unwrap());
///
/// assert_eq!(request_host(&headers, &Uri::from_static("/promo")), "example.com:8080");
/// ```
pub fn request_host<'a>(headers: &'a HeaderMap, uri: &'a Uri) -> &'a str {
    match headers.get(header::HOST) {
        Some(value) => value.to_str().unwrap_or(""),
        None => uri.authority().map(|authority| authority.as_str()).unwrap_or(""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderMap, HeaderValue, Uri, header};

    fn path_only() -> Uri {
        Uri::from_static("/promo")
    }

    #[test]
    fn test_host_simple() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("example.com"));

        assert_eq!(request_host(&headers, &path_only()), "example.com");
    }

    #[test]
    fn test_host_keeps_port() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("example.com:3000"));

        assert_eq!(request_host(&headers, &path_only()), "example.com:3000");
    }

    #[test]
    fn test_host_keeps_case() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("Example.COM"));

        assert_eq!(request_host(&headers, &path_only()), "Example.COM");
    }

    #[test]
    fn test_host_ipv6_with_port() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("[::1]:8080"));

        assert_eq!(request_host(&headers, &path_only()), "[::1]:8080");
    }

    #[test]
    fn test_host_missing_everywhere() {
        let headers = HeaderMap::new();

        assert_eq!(request_host(&headers, &path_only()), "");
    }

    #[test]
    fn test_host_from_uri_authority() {
        let headers = HeaderMap::new();
        let uri = Uri::from_static("http://Short.Example:8443/promo");

        assert_eq!(request_host(&headers, &uri), "Short.Example:8443");
    }

    #[test]
    fn test_host_header_wins_over_authority() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("a.com"));
        let uri = Uri::from_static("http://b.com/promo");

        assert_eq!(request_host(&headers, &uri), "a.com");
    }

    #[test]
    fn test_host_invalid_utf8() {
        let mut headers = HeaderMap::new();
        let invalid_bytes = vec![0xFF, 0xFE, 0xFD];
        if let Ok(header_value) = HeaderValue::from_bytes(&invalid_bytes) {
            headers.insert(header::HOST, header_value);

            assert_eq!(request_host(&headers, &path_only()), "");
        }
    }
}
