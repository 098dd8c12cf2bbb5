//! Link entity representing a short code bound to a domain.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Target of a short code.
///
/// The code itself is the key of a [`LinkTable`]. A link only resolves when the
/// requesting host equals `domain`, so the same table can serve several domains
/// without one domain's codes leaking into another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub url: String,
    pub domain: String,
}

impl Link {
    /// Creates a new Link instance.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let link = Link::new("https://example.com/promo", "short.example.com");
    /// ```
    pub fn new(url: impl Into<String>, domain: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            domain: domain.into(),
        }
    }
}

/// All short links keyed by code.
///
/// Persisted as a single JSON object: `{ "<code>": { "url": ..., "domain": ... } }`.
pub type LinkTable = BTreeMap<String, Link>;
