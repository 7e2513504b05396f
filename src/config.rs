//! Server configuration from environment variables
//!
//! | Variable            | Default |
//! |---------------------|---------|
//! | `PORT`              | 3000    |
//! | `THINKING_DELAY_MS` | 600     |
//! | `CACHE_CAPACITY`    | 10000   |
//! | `CACHE_TTL_SECS`    | 300     |

use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Artificial pause before a chat reply is returned
    pub thinking_delay: Duration,
    pub cache_capacity: u64,
    pub cache_ttl: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            thinking_delay: Duration::from_millis(600),
            cache_capacity: 10_000,
            cache_ttl: Duration::from_secs(300),
        }
    }
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from any variable lookup (unset = default, unparseable = error).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = parse_var(&lookup, "PORT")?.unwrap_or(defaults.port);
        let thinking_delay = parse_var::<u64, _>(&lookup, "THINKING_DELAY_MS")?
            .map(Duration::from_millis)
            .unwrap_or(defaults.thinking_delay);
        let cache_capacity = parse_var(&lookup, "CACHE_CAPACITY")?.unwrap_or(defaults.cache_capacity);
        let cache_ttl = parse_var::<u64, _>(&lookup, "CACHE_TTL_SECS")?
            .map(Duration::from_secs)
            .unwrap_or(defaults.cache_ttl);

        Ok(Self {
            port,
            thinking_delay,
            cache_capacity,
            cache_ttl,
        })
    }
}

fn parse_var<T, F>(lookup: &F, var: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { var, value: raw }),
    }
}
