//! Host + path to redirect target resolution.
//!
//! Precedence, highest first:
//!
//! 1. A link whose code matches the path **and** whose domain equals the host
//! 2. The host's configured default redirect
//! 3. [`FALLBACK_REDIRECT`]
//!
//! A code bound to another domain is treated as absent, so domains sharing one
//! link table cannot reach each other's codes.

use crate::domain::entities::{LinkTable, Settings};

/// Last-resort target for hosts that have no configuration at all.
pub const FALLBACK_REDIRECT: &str = "https://example.com";

/// Which rule produced a [`RedirectTarget`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectSource {
    Link,
    DomainDefault,
    Fallback,
}

impl RedirectSource {
    pub fn as_str(self) -> &'static str {
        match self {
            RedirectSource::Link => "link",
            RedirectSource::DomainDefault => "domain_default",
            RedirectSource::Fallback => "fallback",
        }
    }
}

/// Outcome of [`resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectTarget {
    pub url: String,
    pub source: RedirectSource,
}

/// Resolves a request to the URL it should be redirected to.
///
/// `host` is compared case-sensitively, exactly as received. Leading `/`
/// characters are stripped from `path` to obtain the code; an empty code
/// never matches a link.
///
/// Never fails: every input yields some target.
///
/// # Examples
///
/// ```ignore
/// let target = resolve("a.com", "/promo", &links, &settings);
/// assert_eq!(target.url, "https://x");
/// ```
pub fn resolve(host: &str, path: &str, links: &LinkTable, settings: &Settings) -> RedirectTarget {
    let code = path.trim_start_matches('/');

    if !code.is_empty()
        && let Some(link) = links.get(code)
        && link.domain == host
    {
        return RedirectTarget {
            url: link.url.clone(),
            source: RedirectSource::Link,
        };
    }

    match settings.domains.get(host) {
        Some(domain) => RedirectTarget {
            url: domain.default_redirect.clone(),
            source: RedirectSource::DomainDefault,
        },
        None => RedirectTarget {
            url: FALLBACK_REDIRECT.to_string(),
            source: RedirectSource::Fallback,
        },
    }
}
