//! State of the spider rainbow page.
//!
//! The page shows a rainbow and a button. Pressing the button adds a spider
//! (a regular one, or occasionally a surprise swarm) and pressing it again
//! removes it. The regular spider image is click-zoned: its top half links
//! to one channel, its bottom half to another.

use super::interaction::VerticalSplit;
use crate::error::DestinationError;
use crate::models::Destination;

/// Channel linked from the top half of the spider.
pub const TOP_CHANNEL_URL: &str = "https://www.youtube.com/@wiggitywhitney";
/// Channel linked from the bottom half of the spider.
pub const BOTTOM_CHANNEL_URL: &str = "https://www.youtube.com/@DevOpsToolkit";

/// Regular spider width as a fraction of the rainbow width.
const SPIDER_WIDTH_RATIO: f64 = 0.25;
/// Rainbow opacity while any spider is shown.
const DIMMED_RAINBOW_OPACITY: f64 = 0.75;

/// Which spider is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpiderKind {
    /// A single spider sized relative to the rainbow
    Regular,
    /// A full-width swarm
    Surprise,
}

/// Button-driven page state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageState {
    spider: Option<SpiderKind>,
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a button press.
    ///
    /// With no spider shown, `pick` chooses which one appears. With a spider
    /// shown, it is removed and `pick` is not called.
    pub fn toggle_spider(&mut self, pick: impl FnOnce() -> SpiderKind) {
        self.spider = match self.spider {
            Some(kind) => {
                tracing::debug!(?kind, "Removing spider");
                None
            }
            None => {
                let kind = pick();
                tracing::debug!(?kind, "Adding spider");
                Some(kind)
            }
        };
    }

    pub fn spider(&self) -> Option<SpiderKind> {
        self.spider
    }

    pub fn is_spider_present(&self) -> bool {
        self.spider.is_some()
    }

    /// The surprise swarm gets an outlined button.
    pub fn has_outline(&self) -> bool {
        self.spider == Some(SpiderKind::Surprise)
    }

    pub fn button_label(&self) -> &'static str {
        match self.spider {
            Some(SpiderKind::Surprise) => "AHHHHHH!!!",
            Some(SpiderKind::Regular) => "Remove spider?",
            None => "Add spider?",
        }
    }

    pub fn rainbow_opacity(&self) -> f64 {
        if self.is_spider_present() {
            DIMMED_RAINBOW_OPACITY
        } else {
            1.0
        }
    }

    /// Width of the shown spider image for the rainbow's current width.
    ///
    /// Recompute whenever the rainbow is measured again; the spider's click
    /// zones follow this width.
    pub fn spider_width(&self, rainbow_width: f64) -> Option<f64> {
        self.spider.map(|kind| match kind {
            SpiderKind::Regular => rainbow_width * SPIDER_WIDTH_RATIO,
            SpiderKind::Surprise => rainbow_width,
        })
    }
}

/// Zone policy for the regular spider image.
pub fn spider_zone_policy() -> Result<VerticalSplit, DestinationError> {
    Ok(VerticalSplit::new(
        Destination::parse(TOP_CHANNEL_URL)?,
        Destination::parse(BOTTOM_CHANNEL_URL)?,
    ))
}
