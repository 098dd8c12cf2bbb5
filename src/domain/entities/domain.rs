//! Domain entity describing where unmatched requests for a host are sent.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Redirect configuration for a single hostname.
///
/// The hostname is the key of a [`DomainTable`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainConfig {
    pub default_redirect: String,
}

impl DomainConfig {
    pub fn new(default_redirect: impl Into<String>) -> Self {
        Self {
            default_redirect: default_redirect.into(),
        }
    }
}

/// Configured domains keyed by hostname.
pub type DomainTable = BTreeMap<String, DomainConfig>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_config_uses_camel_case() {
        let config = DomainConfig::new("https://example.com/404");

        let value = serde_json::to_value(&config).unwrap();

        assert_eq!(
            value,
            serde_json::json!({ "defaultRedirect": "https://example.com/404" })
        );
    }

    #[test]
    fn test_domain_table_roundtrip() {
        let raw = r#"{ "short.example.com": { "defaultRedirect": "https://example.com" } }"#;

        let table: DomainTable = serde_json::from_str(raw).unwrap();

        assert_eq!(
            table.get("short.example.com"),
            Some(&DomainConfig::new("https://example.com"))
        );
    }
}
