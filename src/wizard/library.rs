// ABOUTME: Music library entries configured on the library step
// Ordered list with add, rename and remove; order is display order

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_LIBRARY_NAME: &str = "My Music";
pub const DEFAULT_LIBRARY_PATH: &str = "/home/user/Music";

/// One music library and the folders selected for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryEntry {
    pub id: String,
    pub name: String,
    pub selected_paths: Vec<String>,
}

impl LibraryEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            selected_paths: vec![DEFAULT_LIBRARY_PATH.to_string()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryList {
    entries: Vec<LibraryEntry>,
}

impl LibraryList {
    /// Start with the single default library
    pub fn new() -> Self {
        Self {
            entries: vec![LibraryEntry::new(DEFAULT_LIBRARY_NAME)],
        }
    }

    pub fn entries(&self) -> &[LibraryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&LibraryEntry> {
        self.entries.iter().find(|lib| lib.id == id)
    }

    /// Append a library named after the resulting count and return its id
    pub fn add(&mut self) -> String {
        let entry = LibraryEntry::new(format!("Music Library {}", self.entries.len() + 1));
        let id = entry.id.clone();
        self.entries.push(entry);
        id
    }

    /// Remove the library with this id; returns whether one was removed
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|lib| lib.id != id);
        self.entries.len() != before
    }

    /// Rename the library with this id; returns whether one matched
    pub fn rename(&mut self, id: &str, name: impl Into<String>) -> bool {
        match self.entries.iter_mut().find(|lib| lib.id == id) {
            Some(lib) => {
                lib.name = name.into();
                true
            }
            None => false,
        }
    }
}

impl Default for LibraryList {
    fn default() -> Self {
        Self::new()
    }
}
