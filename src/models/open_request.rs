//! The request a click hands to a [`Navigator`](crate::traits::Navigator).

use super::Destination;

/// Browsing context a destination is opened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowsingContext {
    /// A fresh tab or window, unrelated to the page that was clicked
    NewContext,
}

impl BrowsingContext {
    /// The window target name for this context.
    pub fn target(&self) -> &'static str {
        match self {
            BrowsingContext::NewContext => "_blank",
        }
    }
}

/// Isolation between the clicked page and the opened destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Isolation {
    /// The opened context gets no handle back to the opener
    pub noopener: bool,
    /// No referrer is sent to the destination
    pub noreferrer: bool,
}

impl Isolation {
    /// Both flags set. Every click-zone navigation uses this.
    pub const STRICT: Isolation = Isolation {
        noopener: true,
        noreferrer: true,
    };

    /// Window-features string, e.g. `noopener,noreferrer`.
    pub fn features(&self) -> String {
        let mut parts = Vec::new();
        if self.noopener {
            parts.push("noopener");
        }
        if self.noreferrer {
            parts.push("noreferrer");
        }
        parts.join(",")
    }
}

/// A single request to open a destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenRequest {
    pub destination: Destination,
    pub context: BrowsingContext,
    pub isolation: Isolation,
}

impl OpenRequest {
    /// Open `destination` in a new, fully isolated browsing context.
    pub fn isolated(destination: Destination) -> Self {
        Self {
            destination,
            context: BrowsingContext::NewContext,
            isolation: Isolation::STRICT,
        }
    }
}
