//! Click-zone interaction.
//!
//! A pointer click on an element is turned into a [`RelativePosition`]
//! (percent of the element's width and height), a [`ZonePolicy`] decides
//! which [`Destination`](crate::models::Destination) that position maps to,
//! and a [`Navigator`](crate::traits::Navigator) opens it.
//!
//! Zone boundaries live entirely in the policy. The handler only delivers
//! coordinates, so the same handler serves a two-zone split and a quadrant
//! layout alike.

pub mod click_handler;
pub mod geometry;
pub mod policy;
pub mod zone_map;

pub use click_handler::{create_zone_handler, ClickOutcome, ZoneHandler};
pub use geometry::{BoundingRect, Element, PointerEvent, RelativePosition};
pub use policy::{Quadrant, Quadrants, VerticalSplit, ZonePolicy};
pub use zone_map::{PercentRect, ZoneArea, ZoneMap};
