//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{AdminService, AuthService};
use crate::application::stores::{ConfigStore, LinkStore};
use crate::domain::repositories::KeyValueStore;
use crate::error::AppError;

/// Handles to the two live stores and the services built on them.
///
/// Cloning is cheap; every clone points at the same stores.
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn KeyValueStore>,
    pub config_store: Arc<ConfigStore>,
    pub link_store: Arc<LinkStore>,
    pub admin_service: Arc<AdminService>,
    pub auth_service: Arc<AuthService>,
}

impl AppState {
    /// Wires state from already loaded stores sharing `storage`.
    pub fn new(
        storage: Arc<dyn KeyValueStore>,
        config_store: Arc<ConfigStore>,
        link_store: Arc<LinkStore>,
    ) -> Self {
        let admin_service = Arc::new(AdminService::new(
            config_store.clone(),
            link_store.clone(),
        ));
        let auth_service = Arc::new(AuthService::new(config_store.clone()));

        Self {
            storage,
            config_store,
            link_store,
            admin_service,
            auth_service,
        }
    }

    /// Loads both stores from `kv`, bootstrapping missing documents.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] if either document cannot be loaded.
    pub async fn load(kv: Arc<dyn KeyValueStore>) -> Result<Self, AppError> {
        let config_store = Arc::new(ConfigStore::load(kv.clone()).await?);
        let link_store = Arc::new(LinkStore::load(kv.clone()).await?);
        Ok(Self::new(kv, config_store, link_store))
    }
}
