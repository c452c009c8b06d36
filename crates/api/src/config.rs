//! Configuration loaded from environment variables.

use std::env;
use std::net::SocketAddr;

const DEFAULT_ADDR: &str = "127.0.0.1:8000";

/// Chat server configuration.
///
/// Provider credentials are read by the provider crates themselves.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address.
    pub addr: SocketAddr,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `TRAVEL_API_ADDR` | Server bind address | `127.0.0.1:8000` |
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw = env::var("TRAVEL_API_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
        let addr = raw
            .parse()
            .map_err(|_| ConfigError::InvalidAddr(raw.clone()))?;

        Ok(Self { addr })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid TRAVEL_API_ADDR: {0}")]
    InvalidAddr(String),
}
