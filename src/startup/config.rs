//! Health server configuration.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::error::ConfigError;

/// Port the health server listens on unless configured otherwise.
pub const DEFAULT_PORT: u16 = 3001;
/// Listen on every interface so container probes can reach the server.
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// Environment variable overriding the listen host.
pub const HOST_ENV: &str = "SPIDER_RAINBOW_HOST";
/// Environment variable overriding the listen port.
pub const PORT_ENV: &str = "SPIDER_RAINBOW_PORT";

/// Configuration for the health server.
///
/// # Example
///
/// ```ignore
/// use spider_rainbow::startup::ServerConfig;
///
/// let config = ServerConfig::from_env()?.with_port(8080);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to bind (default: 0.0.0.0)
    pub host: IpAddr,
    /// Port to bind (default: 3001)
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Create a new ServerConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the address to bind.
    pub fn with_host(mut self, host: IpAddr) -> Self {
        self.host = host;
        self
    }

    /// Set the port to listen on.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// The address the server binds to.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Read overrides from `SPIDER_RAINBOW_HOST` and `SPIDER_RAINBOW_PORT`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`ServerConfig::from_env`], with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(HOST_ENV) {
            config.host = parse_host(&value)?;
        }
        if let Some(value) = lookup(PORT_ENV) {
            config.port = parse_port(&value)?;
        }

        Ok(config)
    }

    /// Apply `--host <ip>` and `--port <n>` from command-line arguments.
    ///
    /// Unknown arguments are ignored.
    pub fn apply_args<I>(mut self, args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_ref() {
                "--port" => {
                    let value = args.next().ok_or_else(|| ConfigError::MissingValue {
                        flag: "--port".to_string(),
                    })?;
                    self.port = parse_port(value.as_ref())?;
                }
                "--host" => {
                    let value = args.next().ok_or_else(|| ConfigError::MissingValue {
                        flag: "--host".to_string(),
                    })?;
                    self.host = parse_host(value.as_ref())?;
                }
                _ => {}
            }
        }

        Ok(self)
    }
}

fn parse_port(value: &str) -> Result<u16, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|source| ConfigError::InvalidPort {
            value: value.to_string(),
            source,
        })
}

fn parse_host(value: &str) -> Result<IpAddr, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|source| ConfigError::InvalidHost {
            value: value.to_string(),
            source,
        })
}
