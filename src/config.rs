use std::{
    net::{Ipv4Addr, SocketAddr},
    time::Duration,
};

use thiserror::Error;

pub const PORT_ENV_KEY: &str = "HTTP_PORT";
pub const SHUTDOWN_TIMEOUT_ENV_KEY: &str = "HTTP_SHUTDOWN_TIMEOUT_SECS";

pub const DEFAULT_PORT: u16 = 8008;
pub const DEFAULT_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid HTTP_PORT value '{0}': expected a port number")]
    InvalidPort(String),
    #[error("invalid HTTP_SHUTDOWN_TIMEOUT_SECS value '{0}': expected a number of seconds")]
    InvalidShutdownTimeout(String),
}

/// Runtime settings of the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Port to listen on, on all interfaces. `0` lets the OS pick one.
    pub port: u16,
    /// How long in-flight requests may take to finish once shutdown starts.
    pub shutdown_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self { port: DEFAULT_PORT, shutdown_timeout: DEFAULT_SHUTDOWN_TIMEOUT }
    }
}

impl Config {
    /// Reads the configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration from the given variable source. Unset and
    /// empty variables fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        if let Some(port) = get(PORT_ENV_KEY) {
            config.port = port.trim().parse().map_err(|_| ConfigError::InvalidPort(port))?;
        }
        if let Some(secs) = get(SHUTDOWN_TIMEOUT_ENV_KEY) {
            let secs = secs
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidShutdownTimeout(secs))?;
            config.shutdown_timeout = Duration::from_secs(secs);
        }
        Ok(config)
    }

    pub fn bind_address(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}
