//! Navigator backed by the operating system's default browser.

use crate::error::NavigationError;
use crate::models::OpenRequest;
use crate::traits::Navigator;

/// Opens destinations with the platform opener, falling back to `webbrowser`.
///
/// A browser launched this way is a separate process, so the new context has
/// no opener handle and no referrer by construction.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemBrowser;

impl SystemBrowser {
    pub fn new() -> Self {
        Self
    }
}

impl Navigator for SystemBrowser {
    fn open(&self, request: &OpenRequest) -> Result<(), NavigationError> {
        let url = request.destination.as_str();

        match open::that_detached(url) {
            Ok(()) => {
                tracing::debug!(destination = url, "Opened destination with platform opener");
                Ok(())
            }
            Err(e) => {
                tracing::debug!(
                    destination = url,
                    error = %e,
                    "Platform opener failed, trying webbrowser"
                );
                webbrowser::open(url).map_err(|source| NavigationError::Launch {
                    destination: url.to_string(),
                    source,
                })
            }
        }
    }
}
