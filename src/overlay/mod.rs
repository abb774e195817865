// ABOUTME: Dropdown overlay tracking: identifiers, anchors and click-outside dismissal

pub mod anchor;
pub mod tracker;

pub use anchor::{OverlayAnchor, OverlayId};
pub use tracker::{DISMISS_DELAY, OutsideDismissTracker, OverlayFlags};
