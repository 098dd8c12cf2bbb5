//! Server settings: admin credential, informational listener data and the
//! domain table.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::domain::{DomainConfig, DomainTable};

/// Port written into a freshly bootstrapped settings document.
pub const DEFAULT_PORT: u16 = 3000;
/// Admin domain written into a freshly bootstrapped settings document.
pub const DEFAULT_ADMIN_DOMAIN: &str = "admin.example.com";
/// Username of the bootstrap admin credential.
pub const DEFAULT_ADMIN_USERNAME: &str = "admin";
/// Password of the bootstrap admin credential. Change it after first start.
pub const DEFAULT_ADMIN_PASSWORD: &str = "password123";

/// Username/password pair guarding the admin surface.
///
/// The password is an opaque secret compared by exact match.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminCredential {
    #[serde(rename = "adminUsername")]
    pub username: String,
    #[serde(rename = "adminPassword")]
    pub password: String,
}

impl fmt::Debug for AdminCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminCredential")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Complete server settings, persisted as one document.
///
/// ```json
/// {
///   "port": 3000,
///   "adminDomain": "admin.example.com",
///   "adminUsername": "admin",
///   "adminPassword": "password123",
///   "domains": { "short.example.com": { "defaultRedirect": "https://example.com" } }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub port: u16,
    #[serde(default)]
    pub admin_domain: String,
    #[serde(flatten)]
    pub credential: AdminCredential,
    #[serde(default)]
    pub domains: DomainTable,
}

impl Settings {
    /// Settings written on first start when no document exists yet.
    pub fn bootstrap() -> Self {
        let mut domains = DomainTable::new();
        domains.insert(
            "short.example.com".to_string(),
            DomainConfig::new("https://example.com"),
        );
        domains.insert(
            "link.example.com".to_string(),
            DomainConfig::new("https://example.com/404"),
        );

        Self {
            port: DEFAULT_PORT,
            admin_domain: DEFAULT_ADMIN_DOMAIN.to_string(),
            credential: AdminCredential {
                username: DEFAULT_ADMIN_USERNAME.to_string(),
                password: DEFAULT_ADMIN_PASSWORD.to_string(),
            },
            domains,
        }
    }

    /// Returns the settings without the admin credential.
    pub fn view(&self) -> SettingsView {
        SettingsView {
            port: self.port,
            admin_domain: self.admin_domain.clone(),
            domains: self.domains.clone(),
        }
    }
}

/// Settings as shown to display contexts; never carries the credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsView {
    pub port: u16,
    pub admin_domain: String,
    pub domains: DomainTable,
}

/// Partial settings update.
///
/// Only the named fields can be changed. The credential has no field here, so
/// `adminUsername`/`adminPassword` keys in an imported document are dropped
/// during deserialization, as is any other unknown key. `domains` replaces the
/// whole table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsPatch {
    pub port: Option<u16>,
    pub admin_domain: Option<String>,
    pub domains: Option<DomainTable>,
}

impl SettingsPatch {
    /// Applies every present field to `settings`.
    pub fn apply(self, settings: &mut Settings) {
        if let Some(port) = self.port {
            settings.port = port;
        }
        if let Some(admin_domain) = self.admin_domain {
            settings.admin_domain = admin_domain;
        }
        if let Some(domains) = self.domains {
            settings.domains = domains;
        }
    }
}
