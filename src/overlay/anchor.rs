// ABOUTME: Overlay identifiers and the screen regions they are anchored to

use ratatui::layout::Rect;
use serde::Serialize;

use crate::wizard::WizardStep;
use crate::wizard::catalog::Catalog;

/// Dropdown overlays that can be open independently
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlayId {
    Language,
    MetadataLanguage,
    Region,
}

impl OverlayId {
    pub fn all() -> &'static [OverlayId] {
        &[Self::Language, Self::MetadataLanguage, Self::Region]
    }

    /// Label of the control the overlay hangs off
    pub fn label(&self) -> &'static str {
        match self {
            Self::Language => "Language",
            Self::MetadataLanguage => "Metadata Language",
            Self::Region => "Region",
        }
    }

    /// Step whose screen shows the overlay
    pub fn step(&self) -> WizardStep {
        match self {
            Self::Language => WizardStep::ServerSetup,
            Self::MetadataLanguage | Self::Region => WizardStep::MetadataSettings,
        }
    }

    /// Catalog the overlay offers options from
    pub fn catalog(&self) -> Catalog {
        match self {
            Self::Language | Self::MetadataLanguage => Catalog::Languages,
            Self::Region => Catalog::Regions,
        }
    }
}

/// Region of the rendered surface belonging to an overlay: its button plus,
/// while open, the option list below it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayAnchor {
    pub id: OverlayId,
    pub area: Rect,
}

impl OverlayAnchor {
    pub fn new(id: OverlayId, area: Rect) -> Self {
        Self { id, area }
    }

    /// Whether a terminal cell lies inside the anchored region
    pub fn contains(&self, column: u16, row: u16) -> bool {
        rect_contains(self.area, column, row)
    }
}

pub(crate) fn rect_contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && row >= area.y
        && u32::from(column) < u32::from(area.x) + u32::from(area.width)
        && u32::from(row) < u32::from(area.y) + u32::from(area.height)
}
