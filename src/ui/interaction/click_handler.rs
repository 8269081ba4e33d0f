//! Click handler for zone-mapped elements.
//!
//! [`ZoneHandler`] is the one place that turns a pointer event into a
//! navigation. Callers supply the zone layout as a [`ZonePolicy`] and the
//! side effect as a [`Navigator`].

use super::geometry::{PointerEvent, RelativePosition};
use super::policy::ZonePolicy;
use crate::models::{Destination, OpenRequest};
use crate::traits::Navigator;

/// What a single click resulted in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The destination was handed to the navigator and accepted
    Navigated(Destination),
    /// The navigator refused or failed; a warning was logged
    Blocked(Destination),
    /// The policy mapped the click to no destination
    NoZone,
    /// The target had no usable area, so no zone could match
    DegenerateTarget,
}

impl ClickOutcome {
    /// The destination the click selected, whether or not it opened.
    pub fn destination(&self) -> Option<&Destination> {
        match self {
            ClickOutcome::Navigated(dest) | ClickOutcome::Blocked(dest) => Some(dest),
            ClickOutcome::NoZone | ClickOutcome::DegenerateTarget => None,
        }
    }

    /// True only when the navigator accepted the request.
    pub fn navigated(&self) -> bool {
        matches!(self, ClickOutcome::Navigated(_))
    }
}

/// Stateless click handler pairing a zone policy with a navigator.
#[derive(Debug, Clone)]
pub struct ZoneHandler<P, N> {
    policy: P,
    navigator: N,
}

/// Build a handler to attach to an element's click event.
pub fn create_zone_handler<P, N>(policy: P, navigator: N) -> ZoneHandler<P, N>
where
    P: ZonePolicy,
    N: Navigator,
{
    ZoneHandler { policy, navigator }
}

impl<P, N> ZoneHandler<P, N>
where
    P: ZonePolicy,
    N: Navigator,
{
    /// Handle one click.
    ///
    /// Reads the target's rect now, maps the click through the policy and
    /// requests at most one navigation. Never fails: a refused navigation is
    /// logged as a warning and reported as [`ClickOutcome::Blocked`].
    pub fn handle(&self, event: &PointerEvent<'_>) -> ClickOutcome {
        let rect = event.current_target.bounding_rect();

        if rect.is_degenerate() {
            tracing::debug!(
                width = rect.width,
                height = rect.height,
                "Click on element without area, no zone can match"
            );
            return ClickOutcome::DegenerateTarget;
        }

        let position = RelativePosition::from_click(&rect, event.client_x, event.client_y);
        if !position.is_finite() {
            tracing::debug!(
                client_x = event.client_x,
                client_y = event.client_y,
                "Click position is not finite, no zone can match"
            );
            return ClickOutcome::DegenerateTarget;
        }
        tracing::debug!(
            percent_x = position.percent_x,
            percent_y = position.percent_y,
            "Click mapped to relative position"
        );

        let Some(destination) = self.policy.destination(position) else {
            tracing::debug!("Click outside every zone");
            return ClickOutcome::NoZone;
        };

        let request = OpenRequest::isolated(destination);
        match self.navigator.open(&request) {
            Ok(()) => {
                tracing::debug!(destination = %request.destination, "Navigation requested");
                ClickOutcome::Navigated(request.destination)
            }
            Err(e) => {
                tracing::warn!(
                    destination = %request.destination,
                    error = %e,
                    "Popup blocked: please allow popups to open external links"
                );
                ClickOutcome::Blocked(request.destination)
            }
        }
    }

    /// The zone policy this handler consults.
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// The navigator this handler opens destinations with.
    pub fn navigator(&self) -> &N {
        &self.navigator
    }
}
