//! Server configuration.
//!
//! Read from environment variables at startup; every setting has a default
//! suitable for running against the bundled Hawaii dataset.

use std::net::SocketAddr;

/// Environment variable naming the SQLite database URL.
pub const DATABASE_URL_VAR: &str = "CLIMATE_DATABASE_URL";

/// Environment variable naming the listen address.
pub const BIND_ADDR_VAR: &str = "CLIMATE_BIND_ADDR";

/// Environment variable naming the connection pool size.
pub const MAX_CONNECTIONS_VAR: &str = "CLIMATE_MAX_CONNECTIONS";

const DEFAULT_DATABASE_URL: &str = "sqlite://Resources/hawaii.sqlite";
const DEFAULT_BIND_ADDR: ([u8; 4], u16) = ([127, 0, 0, 1], 5000);
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Errors from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable was set but could not be parsed
    #[error("invalid value for {var}: {value:?} ({reason})")]
    Invalid {
        var: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// Configuration for the climate API server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// SQLite URL of the climate database
    pub database_url: String,

    /// Address to listen on
    pub bind_addr: SocketAddr,

    /// Maximum pooled database connections
    pub max_connections: u32,
}

impl ServerConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read the configuration using `lookup` to resolve variables.
    ///
    /// Unset or empty variables fall back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(url) = get(DATABASE_URL_VAR) {
            config.database_url = url;
        }

        if let Some(addr) = get(BIND_ADDR_VAR) {
            config.bind_addr = addr.trim().parse().map_err(|_| ConfigError::Invalid {
                var: BIND_ADDR_VAR,
                value: addr.clone(),
                reason: "expected host:port",
            })?;
        }

        if let Some(n) = get(MAX_CONNECTIONS_VAR) {
            config.max_connections = match n.trim().parse::<u32>() {
                Ok(0) | Err(_) => {
                    return Err(ConfigError::Invalid {
                        var: MAX_CONNECTIONS_VAR,
                        value: n,
                        reason: "expected a positive integer",
                    });
                }
                Ok(n) => n,
            };
        }

        Ok(config)
    }

    /// Set the database URL.
    pub fn with_database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = url.into();
        self
    }

    /// Set the listen address.
    pub fn with_bind_addr(mut self, addr: SocketAddr) -> Self {
        self.bind_addr = addr;
        self
    }

    /// Set the connection pool size.
    pub fn with_max_connections(mut self, n: u32) -> Self {
        self.max_connections = n;
        self
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            bind_addr: SocketAddr::from(DEFAULT_BIND_ADDR),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}
