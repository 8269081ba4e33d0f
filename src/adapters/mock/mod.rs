//! Mock implementations for testing.
//!
//! - [`RecordingNavigator`] - Navigator that records requests instead of opening them

pub mod navigator;

pub use navigator::RecordingNavigator;
