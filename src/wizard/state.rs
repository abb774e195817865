// ABOUTME: Session state of the setup wizard
// Current step, collected fields, libraries and overlay flags in one owned value

use super::fields::WizardFields;
use super::library::{LibraryEntry, LibraryList};
use super::steps::WizardStep;
use crate::overlay::OutsideDismissTracker;

#[derive(Debug, Clone)]
pub struct WizardState {
    current_step: WizardStep,
    fields: WizardFields,
    libraries: LibraryList,
    overlays: OutsideDismissTracker,
    completed: bool,
}

impl WizardState {
    pub fn new() -> Self {
        Self::with_fields(WizardFields::default())
    }

    pub fn with_fields(fields: WizardFields) -> Self {
        Self {
            current_step: WizardStep::ServerSetup,
            fields,
            libraries: LibraryList::new(),
            overlays: OutsideDismissTracker::new(),
            completed: false,
        }
    }

    pub fn current_step(&self) -> WizardStep {
        self.current_step
    }

    /// 1-indexed position of the current step
    pub fn current_step_index(&self) -> usize {
        self.current_step.number()
    }

    pub(crate) fn set_current_step(&mut self, step: WizardStep) {
        self.current_step = step;
    }

    pub fn fields(&self) -> &WizardFields {
        &self.fields
    }

    pub(crate) fn fields_mut(&mut self) -> &mut WizardFields {
        &mut self.fields
    }

    pub fn libraries(&self) -> &[LibraryEntry] {
        self.libraries.entries()
    }

    pub(crate) fn library_list_mut(&mut self) -> &mut LibraryList {
        &mut self.libraries
    }

    pub fn overlays(&self) -> &OutsideDismissTracker {
        &self.overlays
    }

    pub fn overlays_mut(&mut self) -> &mut OutsideDismissTracker {
        &mut self.overlays
    }

    /// Whether the terminal step has been confirmed
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub(crate) fn mark_completed(&mut self) {
        self.completed = true;
    }

    /// Share of steps reached so far (0.0-1.0)
    pub fn progress(&self) -> f32 {
        self.current_step.number() as f32 / WizardStep::total() as f32
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_wizard_state() {
        let state = WizardState::new();
        assert_eq!(state.current_step(), WizardStep::ServerSetup);
        assert_eq!(state.current_step_index(), 1);
        assert_eq!(state.libraries().len(), 1);
        assert!(!state.is_completed());
        assert!(state.overlays().open_overlay().is_none());
    }

    #[test]
    fn test_progress() {
        let mut state = WizardState::new();
        assert!(state.progress() > 0.0 && state.progress() < 1.0);

        state.set_current_step(WizardStep::SetupComplete);
        assert_eq!(state.progress(), 1.0);
    }
}
