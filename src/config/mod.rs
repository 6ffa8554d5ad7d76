//! Environment-backed configuration.
//!
//! Most settings have defaults. Override with `PARLEY_*` environment
//! variables. The two upstream API keys have no defaults and are required.

pub mod error;

#[cfg(test)]
mod tests;

pub use error::ConfigError;

use std::env;
use std::net::IpAddr;
use std::time::Duration;

use crate::constants::{DEFAULT_CACHE_CAPACITY, DEFAULT_CACHE_TTL_SECS};

/// Server configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `PARLEY_*` overrides on top of defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port. Default: `8080`.
    pub port: u16,

    /// IP address to bind to. Default: `127.0.0.1`.
    pub bind_addr: IpAddr,

    /// Groq API key used for chat completions. Required.
    pub groq_api_key: String,

    /// ElevenLabs API key used for speech synthesis. Required.
    pub elevenlabs_api_key: String,

    /// Max entries in the response cache. Default: `100`.
    pub cache_capacity: usize,

    /// Time-to-live per cache entry, in seconds. Default: `3600`.
    pub cache_ttl_secs: u64,

    /// Optional caller location included in the assistant's system
    /// instruction.
    pub assistant_location: Option<String>,
}

impl Config {
    const ENV_PORT: &'static str = "PARLEY_PORT";
    const ENV_BIND_ADDR: &'static str = "PARLEY_BIND_ADDR";
    const ENV_GROQ_API_KEY: &'static str = "GROQ_API_KEY";
    const ENV_ELEVENLABS_API_KEY: &'static str = "ELEVENLABS_API_KEY";
    const ENV_CACHE_CAPACITY: &'static str = "PARLEY_CACHE_CAPACITY";
    const ENV_CACHE_TTL_SECS: &'static str = "PARLEY_CACHE_TTL_SECS";
    const ENV_ASSISTANT_LOCATION: &'static str = "PARLEY_ASSISTANT_LOCATION";

    /// Loads configuration from environment variables (falling back to
    /// defaults where one exists).
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = Self::parse_port_from_env(8080)?;
        let bind_addr =
            Self::parse_bind_addr_from_env(IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)))?;
        let groq_api_key = Self::parse_required_from_env(Self::ENV_GROQ_API_KEY)?;
        let elevenlabs_api_key = Self::parse_required_from_env(Self::ENV_ELEVENLABS_API_KEY)?;
        let cache_capacity = Self::parse_cache_capacity_from_env(DEFAULT_CACHE_CAPACITY)?;
        let cache_ttl_secs =
            Self::parse_u64_from_env(Self::ENV_CACHE_TTL_SECS, DEFAULT_CACHE_TTL_SECS);
        let assistant_location = Self::parse_optional_from_env(Self::ENV_ASSISTANT_LOCATION);

        Ok(Self {
            port,
            bind_addr,
            groq_api_key,
            elevenlabs_api_key,
            cache_capacity,
            cache_ttl_secs,
            assistant_location,
        })
    }

    /// Validates basic invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.groq_api_key.trim().is_empty() {
            return Err(ConfigError::MissingEnvVar {
                name: Self::ENV_GROQ_API_KEY,
            });
        }
        if self.elevenlabs_api_key.trim().is_empty() {
            return Err(ConfigError::MissingEnvVar {
                name: Self::ENV_ELEVENLABS_API_KEY,
            });
        }
        if self.cache_capacity == 0 {
            return Err(ConfigError::InvalidCacheCapacity {
                value: self.cache_capacity.to_string(),
            });
        }
        Ok(())
    }

    /// Returns `"{bind_addr}:{port}"` (useful for logging/binding).
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    /// Returns the cache TTL as a [`Duration`].
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    fn parse_port_from_env(default: u16) -> Result<u16, ConfigError> {
        match env::var(Self::ENV_PORT) {
            Ok(value) => {
                let port: u16 = value.parse().map_err(|e| ConfigError::PortParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if port == 0 {
                    return Err(ConfigError::InvalidPort { value });
                }

                Ok(port)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_bind_addr_from_env(default: IpAddr) -> Result<IpAddr, ConfigError> {
        match env::var(Self::ENV_BIND_ADDR) {
            Ok(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidBindAddr { value, source: e }),
            Err(_) => Ok(default),
        }
    }

    fn parse_required_from_env(var_name: &'static str) -> Result<String, ConfigError> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingEnvVar { name: var_name })
    }

    fn parse_optional_from_env(var_name: &str) -> Option<String> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn parse_cache_capacity_from_env(default: usize) -> Result<usize, ConfigError> {
        match env::var(Self::ENV_CACHE_CAPACITY) {
            Ok(value) => match value.parse::<usize>() {
                Ok(0) | Err(_) => Err(ConfigError::InvalidCacheCapacity { value }),
                Ok(n) => Ok(n),
            },
            Err(_) => Ok(default),
        }
    }

    fn parse_u64_from_env(var_name: &str, default: u64) -> u64 {
        env::var(var_name)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }
}
