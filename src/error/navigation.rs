//! Errors around navigation targets and opening them.

use thiserror::Error;

/// Error returned when a string cannot be used as a [`Destination`](crate::models::Destination).
#[derive(Debug, Error)]
pub enum DestinationError {
    /// The input is not an absolute URL
    #[error("Invalid destination URL '{input}': {source}")]
    InvalidUrl {
        input: String,
        #[source]
        source: url::ParseError,
    },

    /// Only web destinations can be opened in a browsing context
    #[error("Unsupported destination scheme '{scheme}' (expected http or https)")]
    UnsupportedScheme { scheme: String },
}

/// Error returned by a navigator when a destination could not be opened.
#[derive(Debug, Error)]
pub enum NavigationError {
    /// The host environment refused to open a new browsing context
    #[error("Opening {destination} was blocked")]
    Blocked { destination: String },

    /// No browser could be launched for the destination
    #[error("Failed to launch a browser for {destination}: {source}")]
    Launch {
        destination: String,
        #[source]
        source: std::io::Error,
    },
}

impl NavigationError {
    /// The destination the failed request was for.
    pub fn destination(&self) -> &str {
        match self {
            NavigationError::Blocked { destination } => destination,
            NavigationError::Launch { destination, .. } => destination,
        }
    }
}
