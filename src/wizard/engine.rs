// ABOUTME: Wizard engine driving the linear setup flow
// Validates the active step, moves between steps, and emits the completion
// payload to the registered handler when the terminal step is confirmed

use std::time::Instant;

use tracing::{debug, info, warn};

use super::error::{Result, ValidationIssue, WizardError};
use super::fields::{FieldUpdate, WizardFields};
use super::payload::CompletionPayload;
use super::state::WizardState;
use super::steps::WizardStep;
use crate::overlay::OverlayId;

/// Receiver of the completion payload
pub trait CompletionHandler: Send {
    fn on_complete(&mut self, payload: CompletionPayload);
}

impl<F> CompletionHandler for F
where
    F: FnMut(CompletionPayload) + Send,
{
    fn on_complete(&mut self, payload: CompletionPayload) {
        self(payload);
    }
}

/// Initial selections for the locale dropdowns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleDefaults {
    pub language: String,
    pub metadata_language: String,
    pub region: String,
}

impl Default for LocaleDefaults {
    fn default() -> Self {
        let fields = WizardFields::default();
        Self {
            language: fields.language,
            metadata_language: fields.metadata_language,
            region: fields.region,
        }
    }
}

/// Construction options for [`WizardEngine`]
#[derive(Default)]
pub struct WizardOptions {
    on_complete: Option<Box<dyn CompletionHandler>>,
    defaults: LocaleDefaults,
}

impl WizardOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the handler invoked when the wizard completes
    pub fn on_complete(mut self, handler: impl CompletionHandler + 'static) -> Self {
        self.on_complete = Some(Box::new(handler));
        self
    }

    pub fn defaults(mut self, defaults: LocaleDefaults) -> Self {
        self.defaults = defaults;
        self
    }
}

/// Outcome of a successful [`WizardEngine::advance`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved to this step
    Moved(WizardStep),
    /// Terminal step confirmed; the payload has been delivered
    Completed,
    /// The wizard had already completed; nothing was delivered
    AlreadyCompleted,
}

pub struct WizardEngine {
    state: WizardState,
    on_complete: Option<Box<dyn CompletionHandler>>,
}

impl WizardEngine {
    pub fn new(options: WizardOptions) -> Self {
        let WizardOptions { on_complete, defaults } = options;
        let fields = WizardFields {
            language: defaults.language,
            metadata_language: defaults.metadata_language,
            region: defaults.region,
            ..WizardFields::default()
        };

        Self {
            state: WizardState::with_fields(fields),
            on_complete,
        }
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn current_step(&self) -> WizardStep {
        self.state.current_step()
    }

    pub fn fields(&self) -> &WizardFields {
        self.state.fields()
    }

    pub fn is_completed(&self) -> bool {
        self.state.is_completed()
    }

    /// Unmet requirement of the active step, if any
    pub fn blocking_issue(&self) -> Option<ValidationIssue> {
        self.current_step().validate(&self.state).err()
    }

    /// Whether the continue affordance is enabled
    pub fn can_continue(&self) -> bool {
        self.blocking_issue().is_none()
    }

    /// Confirm the active step.
    ///
    /// Fails without changing anything when the step's requirements are
    /// unmet. On the terminal step the payload is delivered to the handler.
    pub fn advance(&mut self) -> Result<Advance> {
        let step = self.current_step();

        if let Err(issue) = step.validate(&self.state) {
            warn!(step = %step, %issue, "cannot continue");
            return Err(WizardError::Validation { step, issue });
        }

        match step.next() {
            Some(next) => {
                self.state.set_current_step(next);
                info!(from = %step, to = %next, "wizard advanced");
                Ok(Advance::Moved(next))
            }
            None if self.state.is_completed() => {
                debug!("wizard already completed, ignoring confirmation");
                Ok(Advance::AlreadyCompleted)
            }
            None => {
                self.state.mark_completed();
                let payload = CompletionPayload::snapshot(&self.state);
                info!(
                    server_name = %payload.server_name,
                    libraries = payload.libraries.len(),
                    "wizard completed"
                );
                if let Some(handler) = self.on_complete.as_mut() {
                    handler.on_complete(payload);
                }
                Ok(Advance::Completed)
            }
        }
    }

    /// Go back one step; returns false on the first step
    pub fn retreat(&mut self) -> bool {
        let step = self.current_step();
        match step.previous() {
            Some(prev) => {
                self.state.set_current_step(prev);
                info!(from = %step, to = %prev, "wizard went back");
                true
            }
            None => false,
        }
    }

    /// Overwrite one field
    pub fn set_field(&mut self, update: FieldUpdate) {
        debug!(step = %update.step(), field = update.name(), "field updated");
        update.apply(self.state.fields_mut());
    }

    /// Append a new library and return its id
    pub fn add_library(&mut self) -> String {
        let id = self.state.library_list_mut().add();
        debug!(library = %id, count = self.state.libraries().len(), "library added");
        id
    }

    /// Remove a library; unknown ids are ignored
    pub fn remove_library(&mut self, id: &str) -> bool {
        let removed = self.state.library_list_mut().remove(id);
        if removed {
            debug!(library = %id, count = self.state.libraries().len(), "library removed");
        }
        removed
    }

    /// Rename a library, keeping its id and paths
    pub fn rename_library(&mut self, id: &str, name: impl Into<String>) -> bool {
        self.state.library_list_mut().rename(id, name)
    }

    /// Current value of the field an overlay edits
    pub fn overlay_value(&self, id: OverlayId) -> &str {
        let fields = self.state.fields();
        match id {
            OverlayId::Language => &fields.language,
            OverlayId::MetadataLanguage => &fields.metadata_language,
            OverlayId::Region => &fields.region,
        }
    }

    pub fn toggle_overlay(&mut self, id: OverlayId) {
        self.state.overlays_mut().toggle(id);
    }

    /// Pick an option from an overlay: closes it at once and commits the
    /// value. Codes outside the overlay's catalog only close it.
    pub fn select_option(&mut self, id: OverlayId, code: &str) -> bool {
        self.state.overlays_mut().close_now(id);

        if !id.catalog().contains(code) {
            warn!(overlay = ?id, code, "ignoring option outside catalog");
            return false;
        }

        let update = match id {
            OverlayId::Language => FieldUpdate::Language(code.to_string()),
            OverlayId::MetadataLanguage => FieldUpdate::MetadataLanguage(code.to_string()),
            OverlayId::Region => FieldUpdate::Region(code.to_string()),
        };
        self.set_field(update);
        true
    }

    /// Forward a pointer-down to the overlay tracker
    pub fn pointer_down(&mut self, column: u16, row: u16, now: Instant) -> Vec<OverlayId> {
        self.state.overlays_mut().pointer_down(column, row, now)
    }

    /// Finish deferred overlay closes that are due
    pub fn tick(&mut self, now: Instant) -> Vec<OverlayId> {
        self.state.overlays_mut().tick(now)
    }

    pub(crate) fn state_mut(&mut self) -> &mut WizardState {
        &mut self.state
    }
}

impl Default for WizardEngine {
    fn default() -> Self {
        Self::new(WizardOptions::default())
    }
}

impl std::fmt::Debug for WizardEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WizardEngine")
            .field("state", &self.state)
            .field("has_handler", &self.on_complete.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn fill_required(engine: &mut WizardEngine) {
        engine.set_field(FieldUpdate::ServerName("Home Server".to_string()));
        engine.set_field(FieldUpdate::AdminName("admin".to_string()));
        engine.set_field(FieldUpdate::AdminEmail("admin@example.com".to_string()));
        engine.set_field(FieldUpdate::AdminPassword("hunter2".to_string()));
    }

    #[test]
    fn test_blocked_advance_leaves_state() {
        let mut engine = WizardEngine::default();

        let err = engine.advance().unwrap_err();
        assert_eq!(err.issue(), ValidationIssue::MissingServerName);
        assert_eq!(engine.current_step(), WizardStep::ServerSetup);
        assert!(!engine.can_continue());

        engine.set_field(FieldUpdate::ServerName("Home Server".to_string()));
        assert_eq!(engine.advance(), Ok(Advance::Moved(WizardStep::AdminAccount)));
    }

    #[test]
    fn test_retreat_at_first_step_is_noop() {
        let mut engine = WizardEngine::default();
        assert!(!engine.retreat());
        assert_eq!(engine.current_step(), WizardStep::ServerSetup);
    }

    #[test]
    fn test_completion_delivers_once() {
        let received = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&received);
        let mut engine = WizardEngine::new(WizardOptions::new().on_complete(
            move |payload: CompletionPayload| sink.lock().unwrap().push(payload),
        ));

        fill_required(&mut engine);
        for _ in 0..5 {
            assert!(matches!(engine.advance(), Ok(Advance::Moved(_))));
        }
        assert_eq!(engine.advance(), Ok(Advance::Completed));
        assert_eq!(engine.advance(), Ok(Advance::AlreadyCompleted));

        let received = received.lock().unwrap();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].server_name, "Home Server");
        assert!(engine.is_completed());
    }

    #[test]
    fn test_completion_without_handler() {
        let mut engine = WizardEngine::default();
        fill_required(&mut engine);
        while engine.current_step() != WizardStep::SetupComplete {
            engine.advance().unwrap();
        }
        assert_eq!(engine.advance(), Ok(Advance::Completed));
        assert!(engine.is_completed());
    }

    #[test]
    fn test_defaults_seed_locale_fields() {
        let engine = WizardEngine::new(WizardOptions::new().defaults(LocaleDefaults {
            language: "fr".to_string(),
            metadata_language: "de".to_string(),
            region: "eu".to_string(),
        }));

        assert_eq!(engine.overlay_value(OverlayId::Language), "fr");
        assert_eq!(engine.overlay_value(OverlayId::MetadataLanguage), "de");
        assert_eq!(engine.overlay_value(OverlayId::Region), "eu");
    }

    #[test]
    fn test_select_option_closes_and_commits() {
        let mut engine = WizardEngine::default();
        engine.toggle_overlay(OverlayId::Region);
        assert!(engine.state().overlays().is_open(OverlayId::Region));

        assert!(engine.select_option(OverlayId::Region, "asia"));
        assert!(!engine.state().overlays().is_open(OverlayId::Region));
        assert_eq!(engine.fields().region, "asia");
    }

    #[test]
    fn test_select_unknown_option_only_closes() {
        let mut engine = WizardEngine::default();
        engine.toggle_overlay(OverlayId::Language);

        assert!(!engine.select_option(OverlayId::Language, "xx"));
        assert!(!engine.state().overlays().is_open(OverlayId::Language));
        assert_eq!(engine.fields().language, "en");
    }
}
