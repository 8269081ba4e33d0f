//! Registry-based zone policy.
//!
//! For layouts that are not a clean split, zones are registered as
//! rectangles in percent space. Later registrations sit on top of earlier
//! ones, so a small zone can be carved out of a larger one.

use super::geometry::RelativePosition;
use super::policy::ZonePolicy;
use crate::models::Destination;

/// A rectangle in percent-of-element units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PercentRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PercentRect {
    /// Create a rect from its top-left corner and size, all in percent.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The whole element.
    pub fn full() -> Self {
        Self::new(0.0, 0.0, 100.0, 100.0)
    }

    /// Check if a position is within this rect.
    ///
    /// Left and top edges are inclusive, right and bottom exclusive, so
    /// adjacent zones never overlap. A far edge lying exactly at 100% is
    /// inclusive so a click on the element's last pixel still hits it.
    /// Rects without positive area contain nothing.
    #[inline]
    pub fn contains(&self, position: RelativePosition) -> bool {
        if !(self.width > 0.0 && self.height > 0.0) {
            return false;
        }

        let right = self.x + self.width;
        let bottom = self.y + self.height;

        let in_x = position.percent_x >= self.x
            && (position.percent_x < right || (right == 100.0 && position.percent_x == right));
        let in_y = position.percent_y >= self.y
            && (position.percent_y < bottom || (bottom == 100.0 && position.percent_y == bottom));

        in_x && in_y
    }
}

/// A zone with its destination.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneArea {
    pub rect: PercentRect,
    pub destination: Destination,
}

impl ZoneArea {
    pub fn new(rect: PercentRect, destination: Destination) -> Self {
        Self { rect, destination }
    }
}

/// Ordered set of zones, topmost last.
#[derive(Debug, Clone, Default)]
pub struct ZoneMap {
    areas: Vec<ZoneArea>,
    /// Used when no zone contains the position
    fallback: Option<Destination>,
}

impl ZoneMap {
    /// Create an empty map with no fallback.
    pub fn new() -> Self {
        Self::default()
    }

    /// Destination for finite positions outside every zone.
    pub fn with_fallback(mut self, destination: Destination) -> Self {
        self.fallback = Some(destination);
        self
    }

    /// Register a zone. It takes priority over zones registered before it.
    pub fn register(&mut self, rect: PercentRect, destination: Destination) {
        self.areas.push(ZoneArea::new(rect, destination));
    }

    /// Builder form of [`ZoneMap::register`].
    pub fn with_zone(mut self, rect: PercentRect, destination: Destination) -> Self {
        self.register(rect, destination);
        self
    }

    /// Find the topmost zone containing the position.
    pub fn hit_test(&self, position: RelativePosition) -> Option<&ZoneArea> {
        if !position.is_finite() {
            return None;
        }
        self.areas.iter().rev().find(|area| area.rect.contains(position))
    }

    /// Remove all zones. The fallback is kept.
    pub fn clear(&mut self) {
        self.areas.clear();
    }

    /// Number of registered zones.
    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}

impl ZonePolicy for ZoneMap {
    fn destination(&self, position: RelativePosition) -> Option<Destination> {
        if !position.is_finite() {
            return None;
        }
        self.hit_test(position)
            .map(|area| area.destination.clone())
            .or_else(|| self.fallback.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dest(name: &str) -> Destination {
        Destination::parse(&format!("https://{name}.example/")).unwrap()
    }

    fn pos(x: f64, y: f64) -> RelativePosition {
        RelativePosition::new(x, y)
    }

    #[test]
    fn test_percent_rect_contains() {
        let rect = PercentRect::new(10.0, 10.0, 20.0, 10.0);

        assert!(rect.contains(pos(10.0, 10.0))); // Top-left corner
        assert!(rect.contains(pos(29.9, 19.9)));
        assert!(rect.contains(pos(20.0, 15.0))); // Center

        assert!(!rect.contains(pos(9.9, 10.0))); // Left of rect
        assert!(!rect.contains(pos(30.0, 10.0))); // Right edge is exclusive
        assert!(!rect.contains(pos(10.0, 20.0))); // Bottom edge is exclusive
    }

    #[test]
    fn test_full_rect_includes_far_corner() {
        let rect = PercentRect::full();

        assert!(rect.contains(pos(0.0, 0.0)));
        assert!(rect.contains(pos(100.0, 100.0)));
        assert!(!rect.contains(pos(100.1, 50.0)));
    }

    #[test]
    fn test_zero_size_rect_contains_nothing() {
        let rect = PercentRect::new(5.0, 5.0, 0.0, 0.0);

        assert!(!rect.contains(pos(5.0, 5.0)));
    }

    #[test]
    fn test_far_edge_inclusive_only_at_100() {
        // Zero-width zone on the right edge
        let sliver = PercentRect::new(100.0, 0.0, 0.0, 100.0);
        assert!(!sliver.contains(pos(100.0, 50.0)));

        // Zone overhanging the element keeps an exclusive far edge
        let overhang = PercentRect::new(50.0, 0.0, 60.0, 100.0);
        assert!(overhang.contains(pos(100.0, 50.0)));
        assert!(overhang.contains(pos(109.9, 50.0)));
        assert!(!overhang.contains(pos(110.0, 50.0)));

        let tall = PercentRect::new(0.0, 50.0, 100.0, 70.0);
        assert!(!tall.contains(pos(50.0, 120.0)));
    }

    #[test]
    fn test_negative_size_rect_contains_nothing() {
        let rect = PercentRect::new(50.0, 50.0, -20.0, 10.0);

        assert!(!rect.contains(pos(40.0, 55.0)));
        assert!(!rect.contains(pos(50.0, 50.0)));
    }

    #[test]
    fn test_zero_width_zone_never_hit() {
        let map = ZoneMap::new().with_zone(PercentRect::new(100.0, 0.0, 0.0, 100.0), dest("edge"));

        assert!(map.hit_test(pos(100.0, 50.0)).is_none());
        assert_eq!(map.destination(pos(100.0, 50.0)), None);
    }

    #[test]
    fn test_hit_test_basic() {
        let map = ZoneMap::new()
            .with_zone(PercentRect::new(0.0, 0.0, 30.0, 100.0), dest("a"))
            .with_zone(PercentRect::new(40.0, 0.0, 30.0, 100.0), dest("b"));

        assert_eq!(map.destination(pos(10.0, 50.0)), Some(dest("a")));
        assert_eq!(map.destination(pos(50.0, 50.0)), Some(dest("b")));
        assert_eq!(map.destination(pos(35.0, 50.0)), None); // Gap
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_later_zone_on_top() {
        let map = ZoneMap::new()
            .with_zone(PercentRect::full(), dest("background"))
            .with_zone(PercentRect::new(40.0, 40.0, 20.0, 20.0), dest("bullseye"));

        assert_eq!(map.destination(pos(50.0, 50.0)), Some(dest("bullseye")));
        assert_eq!(map.destination(pos(10.0, 10.0)), Some(dest("background")));
        assert_eq!(map.destination(pos(100.0, 100.0)), Some(dest("background")));
    }

    #[test]
    fn test_fallback() {
        let map = ZoneMap::new()
            .with_zone(PercentRect::new(0.0, 0.0, 50.0, 50.0), dest("corner"))
            .with_fallback(dest("elsewhere"));

        assert_eq!(map.destination(pos(10.0, 10.0)), Some(dest("corner")));
        assert_eq!(map.destination(pos(80.0, 80.0)), Some(dest("elsewhere")));
        assert_eq!(map.destination(pos(250.0, -20.0)), Some(dest("elsewhere")));
        // Non-finite positions never reach the fallback
        assert_eq!(map.destination(pos(f64::NAN, 10.0)), None);
    }

    #[test]
    fn test_clear() {
        let mut map = ZoneMap::new();
        map.register(PercentRect::full(), dest("a"));
        assert!(!map.is_empty());

        map.clear();

        assert!(map.is_empty());
        assert!(map.hit_test(pos(50.0, 50.0)).is_none());
    }
}
