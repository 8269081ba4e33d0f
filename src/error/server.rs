//! Health server errors.

use std::net::SocketAddr;

use thiserror::Error;

/// Error raised while starting the health server.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Could not bind the listening socket
    #[error("Failed to bind health server on {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// The listener has no usable local address
    #[error("Failed to read health server address: {0}")]
    LocalAddr(#[source] std::io::Error),
}
