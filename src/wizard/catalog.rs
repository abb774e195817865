//! Static option catalogs for the wizard.
//!
//! Languages and regions are (code, display name) pairs. The demonstration
//! paths are shown under every library and never touch the file system.

use serde::Serialize;

/// A selectable catalog option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub code: &'static str,
    pub name: &'static str,
}

impl CatalogEntry {
    const fn new(code: &'static str, name: &'static str) -> Self {
        Self { code, name }
    }
}

/// Interface and metadata languages.
pub const LANGUAGES: &[CatalogEntry] = &[
    CatalogEntry::new("en", "English"),
    CatalogEntry::new("es", "Español"),
    CatalogEntry::new("fr", "Français"),
    CatalogEntry::new("de", "Deutsch"),
    CatalogEntry::new("it", "Italiano"),
    CatalogEntry::new("pt", "Português"),
    CatalogEntry::new("ja", "日本語"),
    CatalogEntry::new("zh", "中文"),
];

/// Metadata regions.
pub const REGIONS: &[CatalogEntry] = &[
    CatalogEntry::new("us", "United States"),
    CatalogEntry::new("eu", "Europe"),
    CatalogEntry::new("asia", "Asia"),
    CatalogEntry::new("au", "Australia"),
    CatalogEntry::new("other", "Other"),
];

/// Placeholder folder listing displayed inside each library card.
pub const DEMO_FILE_STRUCTURE: &[&str] = &[
    "/",
    "/home/user/Music",
    "/home/user/Music/Artist/Album",
    "/media/external/library1",
];

pub const DEFAULT_LANGUAGE: &str = "en";
pub const DEFAULT_REGION: &str = "us";

/// Which catalog a value is drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Catalog {
    Languages,
    Regions,
}

impl Catalog {
    #[must_use]
    pub fn entries(self) -> &'static [CatalogEntry] {
        match self {
            Self::Languages => LANGUAGES,
            Self::Regions => REGIONS,
        }
    }

    /// Find an entry by code.
    #[must_use]
    pub fn find(self, code: &str) -> Option<&'static CatalogEntry> {
        self.entries().iter().find(|entry| entry.code == code)
    }

    #[must_use]
    pub fn contains(self, code: &str) -> bool {
        self.find(code).is_some()
    }

    /// Position of a code in display order.
    #[must_use]
    pub fn position(self, code: &str) -> Option<usize> {
        self.entries().iter().position(|entry| entry.code == code)
    }

    /// Display name for a code, falling back to the code itself.
    #[must_use]
    pub fn display_name(self, code: &str) -> &str {
        self.find(code).map_or(code, |entry| entry.name)
    }
}
