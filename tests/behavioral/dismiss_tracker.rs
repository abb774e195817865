// ABOUTME: Behavioral tests for click-outside dismissal of dropdown overlays

use aristo_setup::overlay::{DISMISS_DELAY, OutsideDismissTracker, OverlayAnchor, OverlayFlags, OverlayId};
use pretty_assertions::assert_eq;
use ratatui::layout::Rect;
use std::time::{Duration, Instant};

fn tracker_with_anchors() -> OutsideDismissTracker {
    let mut tracker = OutsideDismissTracker::new();
    tracker.set_anchor(OverlayAnchor::new(OverlayId::MetadataLanguage, Rect::new(2, 2, 30, 3)));
    tracker.set_anchor(OverlayAnchor::new(OverlayId::Region, Rect::new(2, 8, 30, 3)));
    tracker
}

#[test]
fn test_outside_click_closes_after_delay() {
    let mut tracker = tracker_with_anchors();
    tracker.open(OverlayId::MetadataLanguage);
    let start = Instant::now();

    let started = tracker.pointer_down(60, 20, start);
    assert_eq!(started, vec![OverlayId::MetadataLanguage]);
    assert_eq!(
        tracker.flags(OverlayId::MetadataLanguage),
        OverlayFlags { open: true, closing: true }
    );

    assert!(tracker.tick(start + Duration::from_millis(199)).is_empty());
    assert!(tracker.is_open(OverlayId::MetadataLanguage));

    assert_eq!(tracker.tick(start + DISMISS_DELAY), vec![OverlayId::MetadataLanguage]);
    assert_eq!(tracker.flags(OverlayId::MetadataLanguage), OverlayFlags::default());
    assert!(!tracker.has_pending());
}

#[test]
fn test_inside_click_keeps_overlay_open() {
    let mut tracker = tracker_with_anchors();
    tracker.open(OverlayId::Region);

    assert!(tracker.pointer_down(10, 9, Instant::now()).is_empty());
    assert_eq!(tracker.flags(OverlayId::Region), OverlayFlags { open: true, closing: false });
}

#[test]
fn test_closed_overlays_ignore_clicks() {
    let mut tracker = tracker_with_anchors();
    tracker.open(OverlayId::MetadataLanguage);
    let start = Instant::now();

    // Outside both anchors: only the open overlay is affected
    tracker.pointer_down(60, 20, start);
    tracker.tick(start + DISMISS_DELAY);

    assert!(!tracker.is_open(OverlayId::MetadataLanguage));
    assert_eq!(tracker.flags(OverlayId::Region), OverlayFlags::default());
}

#[test]
fn test_reopen_cancels_pending_close() {
    let mut tracker = tracker_with_anchors();
    tracker.open(OverlayId::Region);
    let start = Instant::now();

    tracker.pointer_down(60, 20, start);
    tracker.open(OverlayId::Region);

    assert!(tracker.tick(start + Duration::from_secs(1)).is_empty());
    assert_eq!(tracker.flags(OverlayId::Region), OverlayFlags { open: true, closing: false });
}

#[test]
fn test_repeated_clicks_keep_first_deadline() {
    let mut tracker = tracker_with_anchors();
    tracker.open(OverlayId::Region);
    let start = Instant::now();

    tracker.pointer_down(60, 20, start);
    assert!(tracker.pointer_down(61, 20, start + Duration::from_millis(150)).is_empty());

    assert_eq!(tracker.next_deadline(), Some(start + DISMISS_DELAY));
    assert_eq!(tracker.tick(start + DISMISS_DELAY), vec![OverlayId::Region]);
}

#[test]
fn test_two_open_overlays_close_independently() {
    let mut tracker = tracker_with_anchors();
    tracker.open(OverlayId::MetadataLanguage);
    tracker.open(OverlayId::Region);
    let start = Instant::now();

    // Inside the region anchor, outside the metadata language anchor
    let started = tracker.pointer_down(5, 9, start);
    assert_eq!(started, vec![OverlayId::MetadataLanguage]);

    tracker.tick(start + DISMISS_DELAY);
    assert!(!tracker.is_open(OverlayId::MetadataLanguage));
    assert!(tracker.is_open(OverlayId::Region));
}

#[test]
fn test_overlay_without_anchor_is_not_dismissed() {
    let mut tracker = OutsideDismissTracker::new();
    tracker.open(OverlayId::Language);

    assert!(tracker.pointer_down(0, 0, Instant::now()).is_empty());
    assert!(tracker.is_open(OverlayId::Language));
    assert!(tracker.next_deadline().is_none());
}
