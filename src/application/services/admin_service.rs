//! Validated mutations behind the admin surface.

use serde::Serialize;
use serde_json::json;
use std::sync::Arc;

use crate::application::stores::{ConfigStore, LinkStore};
use crate::domain::entities::{
    DomainConfig, DomainTable, Link, LinkTable, Settings, SettingsPatch, SettingsView,
};
use crate::error::AppError;
use crate::utils::validation::{
    require_non_empty, validate_host, validate_redirect_url, validate_short_code,
};

/// Minimum length, in characters, of a new admin password.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Result of a bulk link import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    /// Number of entries in the imported batch.
    pub imported: usize,
    /// Number of links after the merge.
    pub total: usize,
}

/// Service for every admin operation on links, domains and settings.
///
/// Each operation validates its input against the current snapshots and only
/// then enters the owning store's read-modify-write-persist cycle. A failed
/// validation never reaches the store.
pub struct AdminService {
    config_store: Arc<ConfigStore>,
    link_store: Arc<LinkStore>,
}

impl AdminService {
    /// Creates a new admin service over the two live stores.
    pub fn new(config_store: Arc<ConfigStore>, link_store: Arc<LinkStore>) -> Self {
        Self {
            config_store,
            link_store,
        }
    }

    /// Creates a link or overwrites the existing link with the same code.
    ///
    /// # Validation
    ///
    /// - `code`, `url` and `domain` must be non-empty
    /// - `code` must be a single path segment and not a reserved route name
    /// - `url` must be an absolute `http`/`https` URL
    /// - `domain` must be a configured domain
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if validation fails.
    /// Returns [`AppError::Persistence`] if the link table cannot be written.
    pub async fn create_or_update_link(
        &self,
        code: String,
        url: String,
        domain: String,
    ) -> Result<Link, AppError> {
        require_non_empty("code", &code)?;
        require_non_empty("url", &url)?;
        require_non_empty("domain", &domain)?;
        validate_short_code(&code)?;
        validate_redirect_url("url", &url)?;

        if !self.config_store.snapshot().await.domains.contains_key(&domain) {
            return Err(AppError::bad_request(
                "Invalid domain",
                json!({ "domain": domain, "hint": "Add the domain before creating links for it" }),
            ));
        }

        let link = Link::new(url, domain);
        let stored = link.clone();
        let replaced = self
            .link_store
            .mutate(move |table| Ok(table.insert(code, stored).is_some()))
            .await?;

        tracing::info!(domain = %link.domain, replaced, "Link saved");
        Ok(link)
    }

    /// Removes a link. Removing a missing code is not an error.
    ///
    /// Returns whether a link was removed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] if the link table cannot be written.
    pub async fn delete_link(&self, code: &str) -> Result<bool, AppError> {
        let code = code.to_string();
        let removed = self
            .link_store
            .mutate(move |table| Ok(table.remove(&code).is_some()))
            .await?;

        tracing::info!(removed, "Link delete processed");
        Ok(removed)
    }

    /// Merges `batch` into the link table; batch entries win on equal codes.
    ///
    /// Entries are trusted as-is: their domains are not checked.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] if the link table cannot be written.
    pub async fn import_links(&self, batch: LinkTable) -> Result<ImportSummary, AppError> {
        let imported = batch.len();
        let total = self
            .link_store
            .mutate(move |table| {
                table.extend(batch);
                Ok(table.len())
            })
            .await?;

        tracing::info!(imported, total, "Links imported");
        Ok(ImportSummary { imported, total })
    }

    /// Returns a copy of the whole link table.
    pub async fn export_links(&self) -> LinkTable {
        LinkTable::clone(&*self.link_store.snapshot().await)
    }

    /// Returns a copy of the configured domains.
    pub async fn list_domains(&self) -> DomainTable {
        self.config_store.snapshot().await.domains.clone()
    }

    /// Adds a domain or overwrites the default redirect of an existing one.
    ///
    /// # Validation
    ///
    /// - `domain` and `default_redirect` must be non-empty
    /// - `domain` must look like a host (optionally with port)
    /// - `default_redirect` must be an absolute `http`/`https` URL
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if validation fails.
    /// Returns [`AppError::Persistence`] if the settings cannot be written.
    pub async fn add_domain(
        &self,
        domain: String,
        default_redirect: String,
    ) -> Result<DomainConfig, AppError> {
        require_non_empty("domain", &domain)?;
        require_non_empty("defaultRedirect", &default_redirect)?;
        validate_host(&domain)?;
        validate_redirect_url("defaultRedirect", &default_redirect)?;

        let config = DomainConfig::new(default_redirect);
        let stored = config.clone();
        let name = domain.clone();
        self.config_store
            .mutate(move |settings| {
                settings.domains.insert(name, stored);
                Ok(())
            })
            .await?;

        tracing::info!(%domain, "Domain saved");
        Ok(config)
    }

    /// Removes a domain. Removing a missing domain is not an error.
    ///
    /// Links bound to the domain are kept and become orphaned.
    ///
    /// Returns whether a domain was removed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] if the settings cannot be written.
    pub async fn remove_domain(&self, domain: &str) -> Result<bool, AppError> {
        let name = domain.to_string();
        let removed = self
            .config_store
            .mutate(move |settings| Ok(settings.domains.remove(&name).is_some()))
            .await?;

        if removed {
            let orphaned = self
                .link_store
                .snapshot()
                .await
                .values()
                .filter(|link| link.domain == domain)
                .count();
            if orphaned > 0 {
                tracing::warn!(domain, orphaned, "Domain removed while links still reference it");
            } else {
                tracing::info!(domain, "Domain removed");
            }
        }

        Ok(removed)
    }

    /// Applies a partial settings update. The admin credential is never
    /// touched, whatever the caller sent.
    ///
    /// Replacing `domains` can orphan links, like [`Self::remove_domain`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the port is 0 or a domain entry in
    /// the patch is invalid.
    /// Returns [`AppError::Persistence`] if the settings cannot be written.
    pub async fn update_settings(&self, patch: SettingsPatch) -> Result<SettingsView, AppError> {
        if patch.port == Some(0) {
            return Err(AppError::bad_request(
                "Port must be between 1 and 65535",
                json!({ "port": 0 }),
            ));
        }

        if let Some(domains) = &patch.domains {
            for (domain, config) in domains {
                require_non_empty("domain", domain)?;
                require_non_empty("defaultRedirect", &config.default_redirect)?;
                validate_host(domain)?;
                validate_redirect_url("defaultRedirect", &config.default_redirect)?;
            }
        }

        let (view, previous_domains) = self
            .config_store
            .mutate(move |settings| {
                let previous = settings.domains.clone();
                patch.apply(settings);
                Ok((settings.view(), previous))
            })
            .await?;

        let orphaned = newly_orphaned(
            &*self.link_store.snapshot().await,
            &previous_domains,
            &view.domains,
        );
        if orphaned > 0 {
            tracing::warn!(
                domains = view.domains.len(),
                orphaned,
                "Settings update removed domains that links still reference"
            );
        } else {
            tracing::info!(domains = view.domains.len(), "Settings updated");
        }

        Ok(view)
    }

    /// Replaces the admin password.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the password is shorter than
    /// [`MIN_PASSWORD_LENGTH`] characters.
    /// Returns [`AppError::Persistence`] if the settings cannot be written.
    pub async fn change_password(&self, new_password: String) -> Result<(), AppError> {
        if new_password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AppError::bad_request(
                "Password must be at least 8 characters",
                json!({ "min_length": MIN_PASSWORD_LENGTH }),
            ));
        }

        self.config_store
            .mutate(move |settings| {
                settings.credential.password = new_password;
                Ok(())
            })
            .await?;

        tracing::info!("Admin password changed");
        Ok(())
    }

    /// Returns the full settings, credential included.
    ///
    /// Only reachable by an authenticated admin.
    pub async fn export_settings(&self) -> Settings {
        Settings::clone(&*self.config_store.snapshot().await)
    }

    /// Returns the settings without the credential.
    pub async fn settings_view(&self) -> SettingsView {
        self.config_store.snapshot().await.view()
    }
}

/// Counts links whose domain was configured in `before` but not in `after`.
fn newly_orphaned(links: &LinkTable, before: &DomainTable, after: &DomainTable) -> usize {
    links
        .values()
        .filter(|link| before.contains_key(&link.domain) && !after.contains_key(&link.domain))
        .count()
}
