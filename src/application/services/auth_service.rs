//! Authentication service for the admin credential.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::sync::Arc;

use crate::application::stores::ConfigStore;
use crate::error::AppError;
use serde_json::json;

type HmacSha256 = Hmac<Sha256>;

/// Service for checking HTTP Basic credentials against the stored admin
/// credential.
///
/// The credential is read from the live settings snapshot on every call, so a
/// password change applies to the very next request. Both sides are MAC'd
/// under a per-process random key and compared with `verify_slice`, which runs
/// in constant time.
pub struct AuthService {
    config_store: Arc<ConfigStore>,
    key: [u8; 32],
}

impl AuthService {
    /// Creates a new authentication service with a fresh comparison key.
    pub fn new(config_store: Arc<ConfigStore>) -> Self {
        Self {
            config_store,
            key: rand::random(),
        }
    }

    fn mac(&self, value: &str) -> HmacSha256 {
        let mut mac =
            HmacSha256::new_from_slice(&self.key).expect("HMAC accepts any key length");
        mac.update(value.as_bytes());
        mac
    }

    fn matches(&self, supplied: &str, expected: &str) -> bool {
        let expected_tag = self.mac(expected).finalize().into_bytes();
        self.mac(supplied).verify_slice(&expected_tag).is_ok()
    }

    /// Authenticates a username/password pair.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if either value does not match.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<(), AppError> {
        let settings = self.config_store.snapshot().await;
        let credential = &settings.credential;

        let username_ok = self.matches(username, &credential.username);
        let password_ok = self.matches(password, &credential.password);

        if !(username_ok & password_ok) {
            tracing::warn!(username, "Rejected admin credentials");
            return Err(AppError::unauthorized(
                "Unauthorized",
                json!({"reason": "Invalid username or password"}),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::MemoryKeyValueStore;

    async fn service() -> (AuthService, Arc<ConfigStore>) {
        let config_store = Arc::new(
            ConfigStore::load(Arc::new(MemoryKeyValueStore::new()))
                .await
                .unwrap(),
        );
        (AuthService::new(config_store.clone()), config_store)
    }

    #[tokio::test]
    async fn test_authenticate_success() {
        let (service, _) = service().await;

        let result = service.authenticate("admin", "password123").await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_authenticate_wrong_password() {
        let (service, _) = service().await;

        let result = service.authenticate("admin", "wrong").await;

        assert!(matches!(result.unwrap_err(), AppError::Unauthorized { .. }));
    }

    #[tokio::test]
    async fn test_authenticate_wrong_username() {
        let (service, _) = service().await;

        let result = service.authenticate("root", "password123").await;

        assert!(matches!(result.unwrap_err(), AppError::Unauthorized { .. }));
    }

    #[tokio::test]
    async fn test_authenticate_follows_password_change() {
        let (service, config_store) = service().await;

        config_store
            .mutate(|settings| {
                settings.credential.password = "longenoughpw".to_string();
                Ok(())
            })
            .await
            .unwrap();

        assert!(service.authenticate("admin", "password123").await.is_err());
        assert!(service.authenticate("admin", "longenoughpw").await.is_ok());
    }

    #[tokio::test]
    async fn test_matches_is_exact() {
        let (service, _) = service().await;

        assert!(service.matches("secret", "secret"));
        assert!(!service.matches("secret ", "secret"));
        assert!(!service.matches("Secret", "secret"));
        assert!(!service.matches("", "secret"));
    }
}
