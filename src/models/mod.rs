//! Values passed from click handling to navigation.

mod destination;
mod open_request;

pub use destination::Destination;
pub use open_request::{BrowsingContext, Isolation, OpenRequest};
