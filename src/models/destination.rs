//! Navigation targets.

use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::error::DestinationError;

/// Where a click zone sends the user.
///
/// Always an absolute `http` or `https` URL. The inner value is opaque to the
/// click-handling code; only the navigator looks at it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Destination(Url);

impl Destination {
    /// Parse and validate a destination URL.
    pub fn parse(input: &str) -> Result<Self, DestinationError> {
        let url = Url::parse(input).map_err(|source| DestinationError::InvalidUrl {
            input: input.to_string(),
            source,
        })?;

        match url.scheme() {
            "http" | "https" => Ok(Self(url)),
            other => Err(DestinationError::UnsupportedScheme {
                scheme: other.to_string(),
            }),
        }
    }

    /// The destination as a string, ready to hand to a browser.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// The underlying URL.
    pub fn url(&self) -> &Url {
        &self.0
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Destination {
    type Err = DestinationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Destination {
    type Error = DestinationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}
