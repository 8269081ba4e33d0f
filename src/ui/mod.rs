//! Page logic for the spider rainbow.
//!
//! - [`interaction`] - Click zones: coordinates, policies and the click handler
//! - [`page`] - Spider toggle state and the spider image's zone policy

pub mod interaction;
pub mod page;

pub use page::{spider_zone_policy, PageState, SpiderKind};
