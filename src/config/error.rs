//! Configuration error types.

use thiserror::Error;

use crate::scoring::ScoringError;

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

    #[error("invalid merge strategy: {0}")]
    InvalidStrategy(#[from] ScoringError),

    /// Judge timeout is not a positive whole number of seconds.
    #[error("invalid judge timeout '{value}': must be a positive number of seconds")]
    InvalidTimeout { value: String },

    #[error("invalid judge endpoint '{value}': must be an http(s) URL")]
    InvalidEndpoint { value: String },

    #[error("{name} must not be empty")]
    EmptyValue { name: &'static str },
}
