//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`SystemBrowser`] - Opens destinations in the user's default browser
//!
//! # Mock Implementations
//!
//! - [`mock::RecordingNavigator`] - Records open requests, can simulate a popup blocker

pub mod mock;
pub mod system_browser;

pub use mock::RecordingNavigator;
pub use system_browser::SystemBrowser;
