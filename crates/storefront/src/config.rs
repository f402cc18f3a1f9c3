//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `MERCH_ADMIN_PASSWORD` - Shared admin password for the dashboard gate
//!
//! ## Optional
//! - `MERCH_HOST` - Bind address (default: 127.0.0.1)
//! - `MERCH_PORT` - Listen port (default: 3000)
//! - `MERCH_ORDERS_PATH` - Order store file (default: data/orders.json)
//!
//! The admin password gates a low-stakes internal dashboard; it is a single
//! shared secret, not per-user access control.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Shared admin password (redacted in `Debug` output)
    pub admin_password: SecretString,
    /// Path of the JSON order store file
    pub orders_path: PathBuf,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("MERCH_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("MERCH_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("MERCH_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("MERCH_PORT".to_string(), e.to_string()))?;
        let admin_password = get_required_secret("MERCH_ADMIN_PASSWORD")?;
        validate_admin_password(&admin_password, "MERCH_ADMIN_PASSWORD")?;
        let orders_path = PathBuf::from(get_env_or_default("MERCH_ORDERS_PATH", "data/orders.json"));

        Ok(Self {
            host,
            port,
            admin_password,
            orders_path,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get a required environment variable as a secret.
fn get_required_secret(key: &str) -> Result<SecretString, ConfigError> {
    let value = get_required_env(key)?;
    Ok(SecretString::from(value))
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Validate that the admin password is usable as a gate secret.
fn validate_admin_password(secret: &SecretString, var_name: &str) -> Result<(), ConfigError> {
    if secret.expose_secret().trim().is_empty() {
        return Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            "must not be empty".to_string(),
        ));
    }
    Ok(())
}
