//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`Navigator`] - Opening a destination in a new browsing context

pub mod navigator;

pub use navigator::Navigator;
