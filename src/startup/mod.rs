//! Server startup configuration.
//!
//! - [`config`] - Listen address, read from defaults, environment and argv

pub mod config;

pub use config::{ServerConfig, DEFAULT_HOST, DEFAULT_PORT, HOST_ENV, PORT_ENV};
