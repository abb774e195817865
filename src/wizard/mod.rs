// ABOUTME: Setup wizard engine for the Aristo music server
//
// WizardEngine
//   ├── WizardState (current step, fields, libraries, overlay flags)
//   ├── WizardStep (fixed linear order with per-step validity rules)
//   └── CompletionPayload (delivered once, when the last step is confirmed)

pub mod catalog;
pub mod engine;
pub mod error;
pub mod fields;
pub mod library;
pub mod payload;
pub mod state;
pub mod steps;

pub use catalog::{Catalog, CatalogEntry};
pub use engine::{Advance, CompletionHandler, LocaleDefaults, WizardEngine, WizardOptions};
pub use error::{ValidationIssue, WizardError};
pub use fields::{FieldUpdate, WizardFields};
pub use library::LibraryEntry;
pub use payload::CompletionPayload;
pub use state::WizardState;
pub use steps::WizardStep;
