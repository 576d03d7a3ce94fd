use wasm_bindgen_test::*;

use super::support::{pdf, upload_all, uploads_started};
use crate::messages::{Command, Message};
use crate::models::{FileMeta, PendingFile, Role, UploadError};
use crate::state::{AppState, NotificationKind, StatusPhase, Timing};
use crate::update::update;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn files_are_uploaded_one_at_a_time_in_order() {
    let mut state = AppState::default();

    let cmds = update(&mut state, Message::FilesSelected(vec![pdf("a.pdf"), pdf("b.pdf")]));
    assert_eq!(uploads_started(&cmds), vec!["a.pdf"]);
    assert!(state.processing_document());
    assert_eq!(state.status, StatusPhase::ProcessingDocument);

    // A second selection while busy only queues.
    let cmds = update(&mut state, Message::FilesSelected(vec![pdf("c.pdf")]));
    assert!(uploads_started(&cmds).is_empty());

    let cmds = update(
        &mut state,
        Message::UploadFinished {
            file: FileMeta::new("a.pdf", 2048, "application/pdf"),
            result: Ok(()),
            elapsed_ms: 5,
        },
    );
    assert_eq!(uploads_started(&cmds), vec!["b.pdf"]);
    assert_eq!(state.documents.len(), 1);
}

#[wasm_bindgen_test]
fn successful_upload_marks_session_ready() {
    let mut state = AppState::default();
    assert!(!state.document_uploaded());

    upload_all(&mut state, vec![pdf("manual.pdf")]);

    assert!(state.document_uploaded());
    assert!(!state.processing_document());
    assert_eq!(state.status, StatusPhase::Ready);
    assert_eq!(state.last_timing, Some(Timing::Upload(12)));
    let doc = &state.documents[0];
    assert_eq!(doc.name, "manual.pdf");
    assert_eq!(doc.mime_or_extension, "application/pdf");
    let last = state.entries.last().unwrap();
    assert_eq!(last.role, Role::System);
    assert!(last.text.contains("\"manual.pdf\" has been successfully uploaded"));
    let note = state.notification.as_ref().unwrap();
    assert_eq!(note.kind, NotificationKind::Success);
    assert_eq!(note.text, "manual.pdf uploaded and indexed successfully!");
}

#[wasm_bindgen_test]
fn unsupported_file_never_reaches_the_network() {
    let mut state = AppState::default();
    let png = PendingFile::from_meta(FileMeta::new("photo.png", 10, "image/png"));

    let cmds = update(&mut state, Message::FilesSelected(vec![png]));

    assert!(uploads_started(&cmds).is_empty());
    assert!(!state.processing_document());
    let note = state.notification.as_ref().unwrap();
    assert_eq!(note.kind, NotificationKind::Error);
    assert!(note.text.starts_with("Unsupported file format"));
}

#[wasm_bindgen_test]
fn rejected_file_does_not_block_the_rest_of_the_batch() {
    let mut state = AppState::default();
    let exe = PendingFile::from_meta(FileMeta::new("setup.exe", 10, ""));
    let notes = PendingFile::from_meta(FileMeta::new("notes.txt", 10, ""));

    let cmds = update(&mut state, Message::FilesSelected(vec![exe, notes]));

    assert_eq!(uploads_started(&cmds), vec!["notes.txt"]);
}

#[wasm_bindgen_test]
fn server_error_keeps_session_unready_and_goes_offline() {
    let mut state = AppState::default();
    update(&mut state, Message::FilesSelected(vec![pdf("bad.pdf")]));

    let cmds = update(
        &mut state,
        Message::UploadFinished {
            file: FileMeta::new("bad.pdf", 2048, "application/pdf"),
            result: Err(UploadError::Server("Unsupported file format".into())),
            elapsed_ms: 3,
        },
    );

    assert!(!state.document_uploaded());
    assert!(!state.processing_document(), "indicator must be cleared on failure");
    assert!(state.offline);
    assert_eq!(state.status, StatusPhase::UploadFailed);
    assert_eq!(
        state.notification.as_ref().map(|n| n.text.as_str()),
        Some("Upload failed: Unsupported file format")
    );
    assert!(cmds.iter().any(|c| matches!(c, Command::ScheduleStatusReset)));
}

#[wasm_bindgen_test]
fn transport_failure_reports_connection_error() {
    let mut state = AppState::default();
    update(&mut state, Message::FilesSelected(vec![pdf("a.pdf")]));
    update(
        &mut state,
        Message::UploadFinished {
            file: FileMeta::new("a.pdf", 2048, "application/pdf"),
            result: Err(UploadError::Transport("Failed to fetch".into())),
            elapsed_ms: 3,
        },
    );

    assert_eq!(state.status, StatusPhase::ConnectionError);
    assert_eq!(
        state.notification.as_ref().map(|n| n.text.as_str()),
        Some("Upload failed: Failed to fetch")
    );

    update(&mut state, Message::ResetStatus);
    assert!(!state.offline);
    assert_eq!(state.status, StatusPhase::Ready);
}

#[wasm_bindgen_test]
fn blank_server_error_uses_generic_message() {
    let mut state = AppState::default();
    update(&mut state, Message::FilesSelected(vec![pdf("a.pdf")]));
    update(
        &mut state,
        Message::UploadFinished {
            file: FileMeta::new("a.pdf", 2048, "application/pdf"),
            result: Err(UploadError::Server(String::new())),
            elapsed_ms: 3,
        },
    );
    assert_eq!(
        state.notification.as_ref().map(|n| n.text.as_str()),
        Some("Upload failed: Unknown error")
    );
}
