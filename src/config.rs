//! Process configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts. Everything an admin can change at runtime (domains, credential,
//! stored port) lives in the settings document instead, see
//! [`crate::application::stores::ConfigStore`].
//!
//! ## Variables
//!
//! - `DATA_DIR` - Directory holding `config.json` and `links.json` (default: `./data`)
//! - `LISTEN` - Bind address `host:port` (default: `0.0.0.0:<stored port>`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//!
//! ```bash
//! export DATA_DIR="/var/lib/domain-shortener"
//! export LISTEN="127.0.0.1:8080"
//! ```

use anyhow::Result;
use std::env;

/// Default directory for the JSON documents.
pub const DEFAULT_DATA_DIR: &str = "./data";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: String,
    /// Explicit bind address. When `None`, the server binds all interfaces on
    /// the port stored in the settings document.
    pub listen_addr: Option<String>,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unset variables fall back to their defaults; an empty `LISTEN` counts
    /// as unset.
    pub fn from_env() -> Result<Self> {
        let data_dir = env::var("DATA_DIR").unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string());
        let listen_addr = env::var("LISTEN").ok().filter(|v| !v.trim().is_empty());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            data_dir,
            listen_addr,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `data_dir` is empty
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is set but not `host:port`
    pub fn validate(&self) -> Result<()> {
        if self.data_dir.trim().is_empty() {
            anyhow::bail!("DATA_DIR must not be empty");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if let Some(ref listen_addr) = self.listen_addr
            && !listen_addr.contains(':')
        {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                listen_addr
            );
        }

        Ok(())
    }

    /// Returns the address to bind, given the port from the settings document.
    pub fn bind_addr(&self, stored_port: u16) -> String {
        match &self.listen_addr {
            Some(addr) => addr.clone(),
            None => format!("0.0.0.0:{}", stored_port),
        }
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Data directory: {}", self.data_dir);
        match &self.listen_addr {
            Some(addr) => tracing::info!("  Listen address: {}", addr),
            None => tracing::info!("  Listen address: from settings document"),
        }
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn config() -> Config {
        Config {
            data_dir: "./data".to_string(),
            listen_addr: None,
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = config();
        assert!(config.validate().is_ok());

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = Some("3000".to_string());
        assert!(config.validate().is_err());

        config.listen_addr = Some("127.0.0.1:3000".to_string());
        assert!(config.validate().is_ok());

        config.data_dir = " ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bind_addr_uses_stored_port_without_override() {
        let mut config = config();
        assert_eq!(config.bind_addr(3000), "0.0.0.0:3000");

        config.listen_addr = Some("127.0.0.1:8080".to_string());
        assert_eq!(config.bind_addr(3000), "127.0.0.1:8080");
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("DATA_DIR");
            env::remove_var("LISTEN");
            env::remove_var("LOG_FORMAT");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.data_dir, DEFAULT_DATA_DIR);
        assert_eq!(config.listen_addr, None);
        assert_eq!(config.log_format, "text");
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("DATA_DIR", "/tmp/shortener");
            env::set_var("LISTEN", "127.0.0.1:9000");
            env::set_var("LOG_FORMAT", "json");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.data_dir, "/tmp/shortener");
        assert_eq!(config.listen_addr.as_deref(), Some("127.0.0.1:9000"));
        assert_eq!(config.log_format, "json");

        // Cleanup
        unsafe {
            env::remove_var("DATA_DIR");
            env::remove_var("LISTEN");
            env::remove_var("LOG_FORMAT");
        }
    }

    #[test]
    #[serial]
    fn test_empty_listen_counts_as_unset() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("LISTEN", "");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.listen_addr, None);

        unsafe {
            env::remove_var("LISTEN");
        }
    }
}
