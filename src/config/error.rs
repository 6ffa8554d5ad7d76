//! Configuration error types.

use thiserror::Error;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Port value is outside valid range (1-65535).
    #[error("invalid port '{value}': must be between 1 and 65535")]
    InvalidPort { value: String },

    /// Port string could not be parsed as a number.
    #[error("failed to parse port '{value}': {source}")]
    PortParseError {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Bind address string could not be parsed.
    #[error("failed to parse bind address '{value}': {source}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },

    /// A required environment variable was not set.
    ///
    /// Both upstream credentials (`GROQ_API_KEY`, `ELEVENLABS_API_KEY`) are
    /// required at startup. A missing key is a fatal startup condition, not
    /// a per-request error.
    #[error("missing required environment variable: {name}")]
    MissingEnvVar { name: &'static str },

    /// Cache capacity must be at least one entry.
    #[error("invalid cache capacity '{value}': must be greater than zero")]
    InvalidCacheCapacity { value: String },
}
