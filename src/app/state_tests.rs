//! Tests for App construction and focus movement

use std::time::Instant;

use crate::test_utils::test_helpers::demo_app;

#[test]
fn test_app_builds_the_form_from_the_config() {
    let (app, _request_rx, _reply_tx) = demo_app();

    assert_eq!(app.form.fields.len(), 3);
    assert_eq!(app.form.fields[0].name, "item");
    assert_eq!(app.form.fields[0].label, "Item");
    assert_eq!(app.form.hidden.len(), 2);
    assert_eq!(app.bindings.len(), 2);
    assert_eq!(app.focus, 0);
    assert!(!app.should_quit());
}

#[test]
fn test_bindings_resolve_fields_and_slots() {
    let (app, _request_rx, _reply_tx) = demo_app();

    assert_eq!(app.binding_for_field(0), Some(0));
    assert_eq!(app.binding_for_field(1), Some(1));
    assert_eq!(app.binding_for_field(2), None);
    assert_eq!(app.focused_binding(), Some(0));
}

#[test]
fn test_focus_cycles_forward_and_back() {
    let (mut app, _request_rx, _reply_tx) = demo_app();
    let now = Instant::now();

    app.focus_next(now);
    assert_eq!(app.focus, 1);
    app.focus_next(now);
    assert_eq!(app.focus, 2);
    app.focus_next(now);
    assert_eq!(app.focus, 0);

    app.focus_previous(now);
    assert_eq!(app.focus, 2);
}

#[test]
fn test_focus_moves_off_the_picker_fields() {
    let (mut app, _request_rx, _reply_tx) = demo_app();
    let now = Instant::now();

    app.change_focus(2, now);

    assert_eq!(app.focus, 2);
    assert_eq!(app.focused_binding(), None);
}

#[test]
fn test_output_appears_only_after_submit() {
    let (mut app, _request_rx, _reply_tx) = demo_app();

    assert!(app.output().is_none());

    app.submitted = true;
    let output = app.output().unwrap();
    let payload: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert!(payload["fields"]["item"].is_string());
    assert_eq!(payload["selected"].as_object().unwrap().len(), 0);
}
