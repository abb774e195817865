// ABOUTME: Click-outside dismissal for dropdown overlays
// A pointer-down outside an open overlay's anchor marks it closing, and the
// overlay is closed once the deferred window has elapsed

use std::collections::{BTreeMap, HashMap};
use std::time::{Duration, Instant};

use ratatui::layout::Rect;
use tracing::debug;

use super::anchor::{OverlayAnchor, OverlayId};

/// Length of the closing animation window
pub const DISMISS_DELAY: Duration = Duration::from_millis(200);

/// Visual flags of one overlay
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OverlayFlags {
    pub open: bool,
    pub closing: bool,
}

#[derive(Debug, Clone)]
pub struct OutsideDismissTracker {
    flags: BTreeMap<OverlayId, OverlayFlags>,
    /// Pending deferred closes, at most one per overlay
    pending: HashMap<OverlayId, Instant>,
    /// Anchors registered by the last render; overlays without one ignore pointer events
    anchors: HashMap<OverlayId, Rect>,
    delay: Duration,
}

impl OutsideDismissTracker {
    pub fn new() -> Self {
        Self::with_delay(DISMISS_DELAY)
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self {
            flags: OverlayId::all()
                .iter()
                .map(|id| (*id, OverlayFlags::default()))
                .collect(),
            pending: HashMap::new(),
            anchors: HashMap::new(),
            delay,
        }
    }

    pub fn flags(&self, id: OverlayId) -> OverlayFlags {
        self.flags.get(&id).copied().unwrap_or_default()
    }

    pub fn is_open(&self, id: OverlayId) -> bool {
        self.flags(id).open
    }

    pub fn is_closing(&self, id: OverlayId) -> bool {
        self.flags(id).closing
    }

    /// First open overlay in display order, if any
    pub fn open_overlay(&self) -> Option<OverlayId> {
        self.flags.iter().find(|(_, f)| f.open).map(|(id, _)| *id)
    }

    /// Open an overlay, superseding any pending close for it
    pub fn open(&mut self, id: OverlayId) {
        self.pending.remove(&id);
        self.flags.insert(id, OverlayFlags { open: true, closing: false });
        debug!(overlay = ?id, "overlay opened");
    }

    /// Close an overlay at once, without the deferred window
    pub fn close_now(&mut self, id: OverlayId) {
        self.pending.remove(&id);
        self.flags.insert(id, OverlayFlags::default());
        debug!(overlay = ?id, "overlay closed");
    }

    /// Flip an overlay from its own control
    pub fn toggle(&mut self, id: OverlayId) {
        if self.is_open(id) {
            self.close_now(id);
        } else {
            self.open(id);
        }
    }

    /// Register where an overlay is drawn
    pub fn set_anchor(&mut self, anchor: OverlayAnchor) {
        self.anchors.insert(anchor.id, anchor.area);
    }

    pub fn anchor(&self, id: OverlayId) -> Option<OverlayAnchor> {
        self.anchors.get(&id).map(|area| OverlayAnchor::new(id, *area))
    }

    /// Forget all anchors, called before each frame registers its own
    pub fn clear_anchors(&mut self) {
        self.anchors.clear();
    }

    /// Handle a pointer-down at a terminal cell.
    ///
    /// Every open overlay whose anchor does not contain the cell starts
    /// closing. Returns the overlays that started closing on this event;
    /// overlays already closing keep their first deadline.
    pub fn pointer_down(&mut self, column: u16, row: u16, now: Instant) -> Vec<OverlayId> {
        let mut started = Vec::new();

        for (id, flags) in self.flags.iter_mut() {
            if !flags.open {
                continue;
            }
            let Some(area) = self.anchors.get(id) else {
                continue;
            };
            if OverlayAnchor::new(*id, *area).contains(column, row) {
                continue;
            }
            if self.pending.contains_key(id) {
                continue;
            }

            flags.closing = true;
            self.pending.insert(*id, now + self.delay);
            started.push(*id);
        }

        if !started.is_empty() {
            debug!(overlays = ?started, column, row, "pointer outside overlay, closing");
        }
        started
    }

    /// Complete every deferred close whose deadline has passed.
    ///
    /// Returns the overlays closed by this call.
    pub fn tick(&mut self, now: Instant) -> Vec<OverlayId> {
        let due: Vec<OverlayId> = self
            .pending
            .iter()
            .filter(|(_, deadline)| **deadline <= now)
            .map(|(id, _)| *id)
            .collect();

        let mut closed = Vec::with_capacity(due.len());
        for id in OverlayId::all().iter().copied().filter(|id| due.contains(id)) {
            self.close_now(id);
            closed.push(id);
        }
        closed
    }

    /// Earliest pending deadline, used to bound the input poll timeout
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.values().min().copied()
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }
}

impl Default for OutsideDismissTracker {
    fn default() -> Self {
        Self::new()
    }
}
