//! Spider rainbow - click-zone navigation and health server for the spider rainbow page
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod error;
pub mod health;
pub mod models;
pub mod startup;
pub mod traits;
pub mod ui;
