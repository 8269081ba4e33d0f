//! Zone policies: mapping a relative click position to a destination.

use super::geometry::RelativePosition;
use crate::models::Destination;

/// Decides where a click at a relative position should go.
///
/// `None` means the click does nothing. Any closure taking
/// `(percent_x, percent_y)` is a policy:
///
/// ```ignore
/// let policy = |x: f64, _y: f64| (x < 50.0).then(|| left.clone());
/// ```
pub trait ZonePolicy {
    fn destination(&self, position: RelativePosition) -> Option<Destination>;
}

impl<F> ZonePolicy for F
where
    F: Fn(f64, f64) -> Option<Destination>,
{
    fn destination(&self, position: RelativePosition) -> Option<Destination> {
        self(position.percent_x, position.percent_y)
    }
}

/// Two zones split at half height.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerticalSplit {
    /// Clicks with `percent_y < 50`
    pub top: Destination,
    /// Everything else
    pub bottom: Destination,
}

impl VerticalSplit {
    pub fn new(top: Destination, bottom: Destination) -> Self {
        Self { top, bottom }
    }
}

impl ZonePolicy for VerticalSplit {
    fn destination(&self, position: RelativePosition) -> Option<Destination> {
        if !position.is_finite() {
            return None;
        }

        if position.percent_y < 50.0 {
            Some(self.top.clone())
        } else {
            Some(self.bottom.clone())
        }
    }
}

/// One quarter of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quadrant {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Quadrant {
    /// Classify a position. The 50% lines belong to the right and bottom
    /// halves. Returns `None` for non-finite positions.
    pub fn of(position: RelativePosition) -> Option<Quadrant> {
        if !position.is_finite() {
            return None;
        }

        let left = position.percent_x < 50.0;
        let top = position.percent_y < 50.0;

        Some(match (top, left) {
            (true, true) => Quadrant::TopLeft,
            (true, false) => Quadrant::TopRight,
            (false, true) => Quadrant::BottomLeft,
            (false, false) => Quadrant::BottomRight,
        })
    }
}

/// Four zones, one per quadrant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quadrants {
    pub top_left: Destination,
    pub top_right: Destination,
    pub bottom_left: Destination,
    pub bottom_right: Destination,
}

impl Quadrants {
    /// Destination assigned to `quadrant`.
    pub fn get(&self, quadrant: Quadrant) -> &Destination {
        match quadrant {
            Quadrant::TopLeft => &self.top_left,
            Quadrant::TopRight => &self.top_right,
            Quadrant::BottomLeft => &self.bottom_left,
            Quadrant::BottomRight => &self.bottom_right,
        }
    }
}

impl ZonePolicy for Quadrants {
    fn destination(&self, position: RelativePosition) -> Option<Destination> {
        Quadrant::of(position).map(|q| self.get(q).clone())
    }
}
