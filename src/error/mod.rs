//! Error types for spider-rainbow.
//!
//! Each concern owns a small `thiserror` enum:
//!
//! | Error | Raised by |
//! |-------|-----------|
//! | [`DestinationError`] | parsing a navigation target |
//! | [`NavigationError`] | a [`Navigator`](crate::traits::Navigator) refusing or failing to open |
//! | [`ConfigError`] | reading server settings from the environment or argv |
//! | [`ServerError`] | binding the health server |
//!
//! Click handling itself never fails: navigation errors are downgraded to a
//! warning and reported through [`ClickOutcome`](crate::ui::interaction::ClickOutcome).

mod config;
mod navigation;
mod server;

pub use config::ConfigError;
pub use navigation::{DestinationError, NavigationError};
pub use server::ServerError;
