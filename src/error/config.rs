//! Configuration errors.

use thiserror::Error;

/// Error raised while building a [`ServerConfig`](crate::startup::ServerConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Port value is not a valid u16
    #[error("Invalid port '{value}': {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Host value is not an IP address
    #[error("Invalid host '{value}': {source}")]
    InvalidHost {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },

    /// A flag was given without its value
    #[error("Missing value for {flag}")]
    MissingValue { flag: String },
}
