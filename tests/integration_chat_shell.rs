//! Integration tests for the chat shell
//!
//! Exercises the complete workflow the UI drives: creating sessions,
//! exchanging messages, staging attachments through the upload dialog, and
//! rendering snapshots.

use chatai::attachment::{DragEvent, DragState, FileHandle};
use chatai::error::ChatAiError;
use chatai::identity::UserIdentity;
use chatai::shell::ChatShell;

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn test_create_touch_delete_rename_scenario() {
    init_tracing();
    let mut shell = ChatShell::new(UserIdentity::signed_in("ada"));

    // Create A, then B; B becomes active, A keeps its own preview
    let a = shell.new_chat();
    shell
        .sessions_mut()
        .touch(&a.id, "How to upload documents...")
        .expect("touch A");
    let b = shell.new_chat();
    assert_eq!(shell.sessions().active_id(), Some(b.id.as_str()));

    // Touch A with a new preview: A becomes most recent
    shell
        .sessions_mut()
        .touch(&a.id, "Can you review this component...")
        .expect("touch A again");
    let listed: Vec<String> = shell.sessions().list().into_iter().map(|s| s.id).collect();
    assert_eq!(listed, vec![a.id.clone(), b.id.clone()]);

    // Delete B: active falls back to A
    shell.sessions_mut().delete_session(&b.id).expect("delete B");
    assert_eq!(shell.sessions().active_id(), Some(a.id.as_str()));

    // Rename A to whitespace fails and changes nothing
    let before = shell.sessions().list();
    let error = shell
        .sessions_mut()
        .rename_session(&a.id, "  ")
        .expect_err("whitespace title must be rejected");
    assert!(matches!(
        error.downcast_ref::<ChatAiError>(),
        Some(ChatAiError::InvalidTitle(_))
    ));
    assert_eq!(shell.sessions().list(), before);
}

#[test]
fn test_upload_dialog_drag_and_send_flow() {
    init_tracing();
    let mut shell = ChatShell::new(UserIdentity::signed_in("ada"));

    // Drag two files over the drop zone and release
    shell.stager_mut().handle_drag(DragEvent::Over);
    assert!(shell.snapshot().drag_state.is_dragging());
    shell.stager_mut().handle_drag(DragEvent::Drop(vec![
        FileHandle::new("slides.pdf", "application/pdf", vec![0u8; 1536]),
        FileHandle::new("photo.png", "image/png", vec![0u8; 2048]),
    ]));

    let snapshot = shell.snapshot();
    assert_eq!(snapshot.drag_state, DragState::Idle);
    assert_eq!(snapshot.attachments.len(), 2);
    assert_eq!(snapshot.attachments[0].name, "slides.pdf");
    assert_eq!(snapshot.attachments[0].size_display, "1.50 KB");

    // Browse adds more files after the drop
    shell
        .stager_mut()
        .stage(vec![FileHandle::new("notes.txt", "text/plain", b"notes".as_ref())]);
    assert_eq!(shell.stager().len(), 3);

    // Remove the middle file, then send: the rest ride along exactly once
    shell.stager_mut().remove(1).expect("remove photo.png");
    let outgoing = shell.send_message("Here are the files").expect("send");
    let names: Vec<&str> = outgoing.attachments.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["slides.pdf", "notes.txt"]);
    assert!(shell.stager().is_empty());
    assert!(shell.snapshot().attachments.is_empty());
}

#[test]
fn test_message_exchange_names_and_orders_sessions() {
    init_tracing();
    let mut shell = ChatShell::new(UserIdentity::signed_out());

    let first = shell.send_message("Getting started with the assistant").expect("send");
    shell
        .apply_reply(&first.session_id, "Hello! I'm your AI assistant...")
        .expect("reply");

    let second_session = shell.new_chat();
    let second = shell.send_message("File upload help").expect("send");
    assert_eq!(second.session_id, second_session.id);

    let snapshot = shell.snapshot();
    assert_eq!(snapshot.sessions.len(), 2);
    assert_eq!(snapshot.sessions[0].title, "File upload help");
    assert_eq!(
        snapshot.sessions[1].title,
        "Getting started with the assistant"
    );
    assert_eq!(
        snapshot.sessions[1].preview,
        "Hello! I'm your AI assistant..."
    );
    assert!(!snapshot.identity.signed_in);
}
