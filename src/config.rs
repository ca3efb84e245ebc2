// Runtime configuration loaded from environment variables

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use thiserror::Error;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Errors raised while reading configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

/// Where events are stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Storage {
    /// Process-local store, lost on restart
    InMemory,
    /// PostgreSQL database
    Postgres { url: String, max_connections: u32 },
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub storage: Storage,
}

impl Config {
    /// Reads configuration from the process environment
    ///
    /// - `DATABASE_URL`: selects PostgreSQL storage when set, in-memory otherwise
    /// - `DATABASE_MAX_CONNECTIONS`: pool size (default 5)
    /// - `HOST` / `PORT`: bind address (default `0.0.0.0:3000`)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = match lookup("HOST") {
            Some(value) => value.parse::<IpAddr>().map_err(|_| ConfigError::InvalidValue {
                name: "HOST",
                value,
            })?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };

        let port = match lookup("PORT") {
            Some(value) => value.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                name: "PORT",
                value,
            })?,
            None => DEFAULT_PORT,
        };

        let storage = match lookup("DATABASE_URL").filter(|url| !url.is_empty()) {
            Some(url) => {
                let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
                    Some(value) => value
                        .parse::<u32>()
                        .ok()
                        .filter(|n| *n > 0)
                        .ok_or(ConfigError::InvalidValue {
                            name: "DATABASE_MAX_CONNECTIONS",
                            value,
                        })?,
                    None => DEFAULT_MAX_CONNECTIONS,
                };
                Storage::Postgres {
                    url,
                    max_connections,
                }
            }
            None => Storage::InMemory,
        };

        Ok(Self {
            bind_addr: SocketAddr::new(host, port),
            storage,
        })
    }
}
