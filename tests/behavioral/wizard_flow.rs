// ABOUTME: Behavioral tests for step ordering, validation gates and library editing

use aristo_setup::wizard::{Advance, FieldUpdate, ValidationIssue, WizardEngine, WizardStep};
use pretty_assertions::assert_eq;

use super::fixtures::fill_required_fields;

#[test]
fn test_fresh_engine_starts_on_server_setup() {
    let engine = WizardEngine::default();

    assert_eq!(engine.current_step(), WizardStep::ServerSetup);
    assert_eq!(engine.fields().language, "en");
    assert_eq!(engine.fields().metadata_language, "en");
    assert_eq!(engine.fields().region, "us");
    assert!(!engine.fields().allow_remote_network);
    assert!(!engine.fields().use_upnp);
    assert_eq!(engine.state().libraries().len(), 1);
    assert_eq!(engine.state().libraries()[0].name, "My Music");
    assert_eq!(engine.state().libraries()[0].selected_paths, vec!["/home/user/Music"]);
}

#[test]
fn test_blank_server_name_blocks_first_step() {
    let mut engine = WizardEngine::default();
    engine.set_field(FieldUpdate::ServerName("   \t".to_string()));

    let err = engine.advance().unwrap_err();
    assert_eq!(err.issue(), ValidationIssue::MissingServerName);
    assert_eq!(engine.current_step(), WizardStep::ServerSetup);
    assert!(!engine.can_continue());

    engine.set_field(FieldUpdate::ServerName("Den".to_string()));
    assert_eq!(engine.advance().unwrap(), Advance::Moved(WizardStep::AdminAccount));
}

#[test]
fn test_admin_step_needs_all_three_fields() {
    let mut engine = WizardEngine::default();
    engine.set_field(FieldUpdate::ServerName("Den".to_string()));
    engine.advance().unwrap();

    engine.set_field(FieldUpdate::AdminName("admin".to_string()));
    engine.set_field(FieldUpdate::AdminEmail("admin@example.com".to_string()));
    assert_eq!(engine.blocking_issue(), Some(ValidationIssue::MissingAdminPassword));
    assert!(engine.advance().is_err());
    assert_eq!(engine.current_step(), WizardStep::AdminAccount);

    engine.set_field(FieldUpdate::AdminPassword("pw".to_string()));
    assert!(engine.can_continue());
}

#[test]
fn test_removing_every_library_blocks_library_step() {
    let mut engine = WizardEngine::default();
    fill_required_fields(&mut engine);
    engine.advance().unwrap();
    engine.advance().unwrap();
    assert_eq!(engine.current_step(), WizardStep::MusicLibraries);

    let id = engine.state().libraries()[0].id.clone();
    assert!(engine.remove_library(&id));
    assert_eq!(engine.advance().unwrap_err().issue(), ValidationIssue::NoLibraries);

    let added = engine.add_library();
    assert_eq!(engine.state().libraries()[0].id, added);
    assert_eq!(engine.state().libraries()[0].name, "Music Library 1");
    assert_eq!(engine.advance().unwrap(), Advance::Moved(WizardStep::MetadataSettings));
}

#[test]
fn test_library_ids_stay_unique_and_order_is_kept() {
    let mut engine = WizardEngine::default();
    let second = engine.add_library();
    let third = engine.add_library();

    let libraries = engine.state().libraries();
    let names: Vec<&str> = libraries.iter().map(|lib| lib.name.as_str()).collect();
    assert_eq!(names, vec!["My Music", "Music Library 2", "Music Library 3"]);
    assert_ne!(second, third);
    assert_ne!(libraries[0].id, second);

    assert!(engine.rename_library(&second, "Vinyl Rips"));
    assert!(!engine.remove_library("no-such-id"));
    assert_eq!(engine.state().libraries()[1].name, "Vinyl Rips");
    assert_eq!(engine.state().libraries()[1].id, second);
}

#[test]
fn test_back_never_validates_and_keeps_fields() {
    let mut engine = WizardEngine::default();
    fill_required_fields(&mut engine);
    engine.advance().unwrap();
    engine.set_field(FieldUpdate::AdminPassword(String::new()));

    assert!(engine.retreat());
    assert_eq!(engine.current_step(), WizardStep::ServerSetup);
    assert_eq!(engine.fields().server_name, "Living Room");
    assert!(!engine.retreat());
    assert_eq!(engine.current_step(), WizardStep::ServerSetup);
}

#[test]
fn test_later_steps_have_no_requirements() {
    let mut engine = WizardEngine::default();
    fill_required_fields(&mut engine);
    for _ in 0..3 {
        engine.advance().unwrap();
    }

    assert_eq!(engine.current_step(), WizardStep::MetadataSettings);
    assert!(engine.can_continue());
    engine.set_field(FieldUpdate::UseUpnp(true));
    assert_eq!(engine.advance().unwrap(), Advance::Moved(WizardStep::NetworkSettings));
    assert_eq!(engine.advance().unwrap(), Advance::Moved(WizardStep::SetupComplete));
    assert_eq!(engine.current_step().continue_label(), "Start Using Aristo");
}

#[test]
fn test_blank_admin_name_or_email_blocks_second_step() {
    let mut engine = WizardEngine::default();
    fill_required_fields(&mut engine);
    engine.advance().unwrap();

    engine.set_field(FieldUpdate::AdminName("  ".to_string()));
    let err = engine.advance().unwrap_err();
    assert_eq!(err.issue(), ValidationIssue::MissingAdminName);
    assert_eq!(engine.current_step(), WizardStep::AdminAccount);

    engine.set_field(FieldUpdate::AdminName("admin".to_string()));
    engine.set_field(FieldUpdate::AdminEmail("\t \n".to_string()));
    let err = engine.advance().unwrap_err();
    assert_eq!(err.issue(), ValidationIssue::MissingAdminEmail);
    assert_eq!(engine.current_step(), WizardStep::AdminAccount);

    engine.set_field(FieldUpdate::AdminEmail("admin@example.com".to_string()));
    assert_eq!(engine.advance().unwrap(), Advance::Moved(WizardStep::MusicLibraries));
}

#[test]
fn test_retreat_walks_back_one_step_at_a_time() {
    let mut engine = WizardEngine::default();
    fill_required_fields(&mut engine);
    for _ in 0..5 {
        engine.advance().unwrap();
    }
    assert_eq!(engine.current_step().number(), 6);

    for expected in (1..=5).rev() {
        let before = engine.current_step().number();
        assert!(engine.retreat());
        assert_eq!(engine.current_step().number(), before - 1);
        assert_eq!(engine.current_step().number(), expected);
    }

    assert!(!engine.retreat());
    assert_eq!(engine.current_step(), WizardStep::ServerSetup);
}

#[test]
fn test_remove_library_leaves_other_entries_untouched() {
    let mut engine = WizardEngine::default();
    let middle = engine.add_library();
    engine.add_library();
    let before = engine.state().libraries().to_vec();

    assert!(engine.remove_library(&middle));

    let after = engine.state().libraries().to_vec();
    assert_eq!(after.len(), before.len() - 1);
    assert_eq!(after, vec![before[0].clone(), before[2].clone()]);

    assert!(!engine.remove_library(&middle));
    assert_eq!(engine.state().libraries(), after.as_slice());
}
