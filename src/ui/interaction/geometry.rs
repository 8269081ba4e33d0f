//! Element geometry and click positions.

/// Position and size of an element at the moment it is queried.
///
/// Same linear units as the pointer coordinates (CSS pixels in a browser).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingRect {
    /// Create a rect from its top-left corner and size.
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// True when the rect cannot map a click to a finite percentage.
    ///
    /// Zero, negative and non-finite sizes count, and so does a non-finite
    /// origin.
    pub fn is_degenerate(&self) -> bool {
        !(self.left.is_finite() && self.top.is_finite())
            || !(self.width.is_finite() && self.height.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
    }

    /// The same rect moved by `(dx, dy)`.
    pub fn translated(self, dx: f64, dy: f64) -> Self {
        Self {
            left: self.left + dx,
            top: self.top + dy,
            ..self
        }
    }

    /// Horizontal position of the right edge.
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Vertical position of the bottom edge.
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Something a click handler can be attached to.
///
/// `bounding_rect` is called on every click. Implementations must report the
/// current layout rather than a cached one: element sizes follow their
/// container and change on resize.
pub trait Element {
    fn bounding_rect(&self) -> BoundingRect;
}

impl Element for BoundingRect {
    fn bounding_rect(&self) -> BoundingRect {
        *self
    }
}

/// A pointer click as delivered to a handler.
#[derive(Clone, Copy)]
pub struct PointerEvent<'a> {
    /// Absolute horizontal position of the pointer
    pub client_x: f64,
    /// Absolute vertical position of the pointer
    pub client_y: f64,
    /// The element the handler is bound to, not the innermost element hit
    pub current_target: &'a dyn Element,
}

impl<'a> PointerEvent<'a> {
    pub fn new(current_target: &'a dyn Element, client_x: f64, client_y: f64) -> Self {
        Self {
            client_x,
            client_y,
            current_target,
        }
    }
}

impl std::fmt::Debug for PointerEvent<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PointerEvent")
            .field("client_x", &self.client_x)
            .field("client_y", &self.client_y)
            .field("current_target", &self.current_target.bounding_rect())
            .finish()
    }
}

/// Where inside an element a click landed, in percent of its size.
///
/// `(0, 0)` is the top-left corner and `(100, 100)` the bottom-right. Clicks
/// outside the element give values outside that range; they are kept as-is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RelativePosition {
    pub percent_x: f64,
    pub percent_y: f64,
}

impl RelativePosition {
    pub fn new(percent_x: f64, percent_y: f64) -> Self {
        Self {
            percent_x,
            percent_y,
        }
    }

    /// Compute the relative position of an absolute click within `rect`.
    ///
    /// This is plain arithmetic: a degenerate rect produces infinite or NaN
    /// percentages. Check [`BoundingRect::is_degenerate`] or
    /// [`RelativePosition::is_finite`] before relying on the result.
    pub fn from_click(rect: &BoundingRect, client_x: f64, client_y: f64) -> Self {
        let click_x = client_x - rect.left;
        let click_y = client_y - rect.top;

        Self {
            percent_x: (click_x / rect.width) * 100.0,
            percent_y: (click_y / rect.height) * 100.0,
        }
    }

    /// True when neither coordinate is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        self.percent_x.is_finite() && self.percent_y.is_finite()
    }

    /// True when both coordinates are within `[0, 100]`.
    pub fn is_within_element(&self) -> bool {
        (0.0..=100.0).contains(&self.percent_x) && (0.0..=100.0).contains(&self.percent_y)
    }
}
