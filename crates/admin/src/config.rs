//! Admin configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `INVENTORY_API_URL` - Base URL of the remote inventory REST API
//!
//! ## Optional
//! - `ADMIN_HOST` - Bind address (default: 127.0.0.1)
//! - `ADMIN_PORT` - Listen port (default: 3002)

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use thiserror::Error;
use url::Url;

const DEFAULT_PORT: u16 = 3002;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Admin application configuration.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    /// Base URL of the inventory REST API, without a trailing slash.
    pub api_url: String,
    /// IP address to bind the server to.
    pub host: IpAddr,
    /// Port to listen on.
    pub port: u16,
}

impl AdminConfig {
    /// Load the configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if `INVENTORY_API_URL` is missing or not a valid
    /// http(s) URL, or if `ADMIN_HOST`/`ADMIN_PORT` are set but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_url = std::env::var("INVENTORY_API_URL")
            .map_err(|_| ConfigError::MissingEnvVar("INVENTORY_API_URL".to_string()))?;
        let api_url = validate_api_url(&api_url)?;

        let host = match std::env::var("ADMIN_HOST") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidEnvVar("ADMIN_HOST".to_string(), raw.clone()))?,
            Err(_) => IpAddr::V4(Ipv4Addr::LOCALHOST),
        };

        let port = match std::env::var("ADMIN_PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidEnvVar("ADMIN_PORT".to_string(), raw.clone()))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            api_url,
            host,
            port,
        })
    }

    /// The address to bind the server to.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Check that the API base URL is a usable http(s) URL and normalize away
/// any trailing slash so endpoint paths can be appended directly.
fn validate_api_url(raw: &str) -> Result<String, ConfigError> {
    let parsed = Url::parse(raw)
        .map_err(|e| ConfigError::InvalidEnvVar("INVENTORY_API_URL".to_string(), e.to_string()))?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(ConfigError::InvalidEnvVar(
            "INVENTORY_API_URL".to_string(),
            format!("unsupported scheme: {}", parsed.scheme()),
        ));
    }

    Ok(raw.trim_end_matches('/').to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_plain_http_url() {
        let url = validate_api_url("http://localhost:4000").unwrap();
        assert_eq!(url, "http://localhost:4000");
    }

    #[test]
    fn trims_the_trailing_slash() {
        let url = validate_api_url("https://inventory.internal/").unwrap();
        assert_eq!(url, "https://inventory.internal");
    }

    #[test]
    fn rejects_garbage() {
        let result = validate_api_url("not a url");
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar(_, _))));
    }

    #[test]
    fn rejects_non_http_schemes() {
        let result = validate_api_url("ftp://inventory.internal");
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar(_, _))));
    }
}
