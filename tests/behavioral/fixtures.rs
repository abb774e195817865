// ABOUTME: Shared helpers for behavioral tests

use aristo_setup::wizard::{FieldUpdate, WizardEngine};

/// Fill every required text field so each step can be confirmed
pub fn fill_required_fields(engine: &mut WizardEngine) {
    engine.set_field(FieldUpdate::ServerName("Living Room".to_string()));
    engine.set_field(FieldUpdate::AdminName("admin".to_string()));
    engine.set_field(FieldUpdate::AdminEmail("admin@example.com".to_string()));
    engine.set_field(FieldUpdate::AdminPassword("correct horse".to_string()));
}

/// Confirm steps until the engine reports completion
pub fn advance_to_completion(engine: &mut WizardEngine) {
    for _ in 0..6 {
        engine.advance().expect("all required fields are filled");
    }
    assert!(engine.is_completed());
}
