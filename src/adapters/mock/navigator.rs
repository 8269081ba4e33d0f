//! Recording navigator for testing.

use std::sync::{Arc, Mutex};

use crate::error::NavigationError;
use crate::models::OpenRequest;
use crate::traits::Navigator;

/// Navigator that records every request it receives.
///
/// Clones share the same log, so a test can hand one clone to a handler and
/// inspect another afterwards.
///
/// # Example
///
/// ```ignore
/// use spider_rainbow::adapters::mock::RecordingNavigator;
///
/// let navigator = RecordingNavigator::new();
/// let handler = create_zone_handler(policy, navigator.clone());
/// handler.handle(&event);
/// assert_eq!(navigator.requests().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    /// Every request passed to `open`, accepted or not
    requests: Arc<Mutex<Vec<OpenRequest>>>,
    /// Refuse all requests, like a popup blocker
    blocking: Arc<Mutex<bool>>,
}

impl RecordingNavigator {
    /// Create a navigator that accepts every request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a navigator that refuses every request.
    pub fn blocking() -> Self {
        let navigator = Self::new();
        navigator.set_blocking(true);
        navigator
    }

    /// Toggle popup-blocker behaviour.
    pub fn set_blocking(&self, blocking: bool) {
        *self.blocking.lock().unwrap() = blocking;
    }

    /// All requests received so far.
    pub fn requests(&self) -> Vec<OpenRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Destinations of all requests received so far, as strings.
    pub fn opened_urls(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.destination.as_str().to_string())
            .collect()
    }

    /// Forget recorded requests.
    pub fn clear(&self) {
        self.requests.lock().unwrap().clear();
    }
}

impl Navigator for RecordingNavigator {
    fn open(&self, request: &OpenRequest) -> Result<(), NavigationError> {
        self.requests.lock().unwrap().push(request.clone());

        if *self.blocking.lock().unwrap() {
            return Err(NavigationError::Blocked {
                destination: request.destination.as_str().to_string(),
            });
        }
        Ok(())
    }
}
