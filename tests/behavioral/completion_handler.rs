// ABOUTME: Behavioral tests for delivery of the completion payload

use aristo_setup::wizard::{
    Advance, CompletionHandler, CompletionPayload, FieldUpdate, WizardEngine, WizardOptions,
};
use mockall::mock;
use pretty_assertions::assert_eq;
use std::sync::{Arc, Mutex};

use super::fixtures::{advance_to_completion, fill_required_fields};

mock! {
    pub Handler {}

    impl CompletionHandler for Handler {
        fn on_complete(&mut self, payload: CompletionPayload);
    }
}

#[test]
fn test_handler_called_once_with_collected_values() {
    let mut handler = MockHandler::new();
    handler
        .expect_on_complete()
        .withf(|payload| {
            payload.server_name == "Living Room"
                && payload.admin_password == "correct horse"
                && payload.region == "asia"
                && payload.use_upnp
                && payload.libraries.len() == 2
        })
        .times(1)
        .return_const(());

    let mut engine = WizardEngine::new(WizardOptions::new().on_complete(handler));
    fill_required_fields(&mut engine);
    engine.add_library();
    engine.set_field(FieldUpdate::Region("asia".to_string()));
    engine.set_field(FieldUpdate::UseUpnp(true));
    advance_to_completion(&mut engine);

    // Confirming again must not deliver a second payload
    assert_eq!(engine.advance().unwrap(), Advance::AlreadyCompleted);

    // Expectations are verified when the mock is dropped
    drop(engine);
}

#[test]
fn test_no_payload_before_terminal_step() {
    let mut handler = MockHandler::new();
    handler.expect_on_complete().times(0);

    let mut engine = WizardEngine::new(WizardOptions::new().on_complete(handler));
    fill_required_fields(&mut engine);
    for _ in 0..5 {
        engine.advance().unwrap();
    }
    assert!(!engine.is_completed());
    drop(engine);
}

#[test]
fn test_closure_handler_receives_payload_snapshot() {
    let received: Arc<Mutex<Vec<CompletionPayload>>> = Arc::default();
    let sink = Arc::clone(&received);

    let mut engine = WizardEngine::new(
        WizardOptions::new().on_complete(move |payload| sink.lock().unwrap().push(payload)),
    );
    fill_required_fields(&mut engine);
    advance_to_completion(&mut engine);
    engine.set_field(FieldUpdate::ServerName("Changed later".to_string()));

    let received = received.lock().unwrap();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].server_name, "Living Room");
    assert_eq!(received[0].language, "en");
    assert_eq!(received[0].libraries[0].name, "My Music");
}

#[test]
fn test_payload_json_uses_caller_field_names() {
    let received: Arc<Mutex<Option<CompletionPayload>>> = Arc::default();
    let sink = Arc::clone(&received);

    let mut engine = WizardEngine::new(
        WizardOptions::new().on_complete(move |payload| *sink.lock().unwrap() = Some(payload)),
    );
    fill_required_fields(&mut engine);
    advance_to_completion(&mut engine);

    let payload = received.lock().unwrap().clone().unwrap();
    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(json["serverName"], "Living Room");
    assert_eq!(json["adminEmail"], "admin@example.com");
    assert_eq!(json["metadataLanguage"], "en");
    assert_eq!(json["allowRemoteNetwork"], false);
    assert_eq!(json["useUPnP"], false);
    assert_eq!(json["libraries"][0]["selectedPaths"][0], "/home/user/Music");

    assert!(!format!("{payload:?}").contains("correct horse"));
}
