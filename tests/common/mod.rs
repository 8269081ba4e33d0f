//! Common test utilities for integration tests.

#![allow(dead_code)]

use std::cell::Cell;

use spider_rainbow::models::Destination;
use spider_rainbow::ui::interaction::{BoundingRect, Element, Quadrants, VerticalSplit};

/// Element whose size can change between clicks, like an image sized
/// relative to its container.
#[derive(Debug)]
pub struct ResizableElement {
    rect: Cell<BoundingRect>,
    reads: Cell<usize>,
}

impl ResizableElement {
    pub fn new(rect: BoundingRect) -> Self {
        Self {
            rect: Cell::new(rect),
            reads: Cell::new(0),
        }
    }

    pub fn resize(&self, width: f64, height: f64) {
        let mut rect = self.rect.get();
        rect.width = width;
        rect.height = height;
        self.rect.set(rect);
    }

    pub fn move_to(&self, left: f64, top: f64) {
        let mut rect = self.rect.get();
        rect.left = left;
        rect.top = top;
        self.rect.set(rect);
    }

    /// How often the rect has been queried.
    pub fn reads(&self) -> usize {
        self.reads.get()
    }
}

impl Element for ResizableElement {
    fn bounding_rect(&self) -> BoundingRect {
        self.reads.set(self.reads.get() + 1);
        self.rect.get()
    }
}

/// Test destination `https://<name>.example/`.
pub fn dest(name: &str) -> Destination {
    Destination::parse(&format!("https://{name}.example/")).expect("valid test URL")
}

pub fn url(name: &str) -> String {
    format!("https://{name}.example/")
}

pub fn vertical_split() -> VerticalSplit {
    VerticalSplit::new(dest("a"), dest("b"))
}

pub fn quadrants() -> Quadrants {
    Quadrants {
        top_left: dest("top-left"),
        top_right: dest("top-right"),
        bottom_left: dest("bottom-left"),
        bottom_right: dest("bottom-right"),
    }
}
