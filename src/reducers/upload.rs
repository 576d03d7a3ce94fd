//! Upload flow: sequential queue, local validation, result handling.

use chrono::Utc;

use crate::constants::{UNKNOWN_UPLOAD_ERROR, UNSUPPORTED_FILE_MESSAGE};
use crate::messages::{Command, Message};
use crate::models::{ChatEntry, Document, UploadError};
use crate::state::{AppState, NotificationKind, StatusPhase, Timing};

pub fn update(state: &mut AppState, msg: &Message, cmds: &mut Vec<Command>) -> bool {
    match msg {
        Message::FilesSelected(files) => {
            state.upload_queue.extend(files.iter().cloned());
            start_next_upload(state, cmds);
            true
        }
        Message::UploadFinished {
            file,
            result,
            elapsed_ms,
        } => {
            // Clears the processing indicator on every outcome.
            state.upload_in_flight = None;
            state.touch_transcript();

            match result {
                Ok(()) => {
                    state.documents.push(Document::from_upload(file, Utc::now()));
                    state.touch_documents();
                    state.offline = false;
                    state.settle_status();
                    state.last_timing = Some(Timing::Upload(*elapsed_ms));
                    state.notify(
                        cmds,
                        NotificationKind::Success,
                        format!("{} uploaded and indexed successfully!", file.name),
                    );
                    state.push_entry(ChatEntry::system(format!(
                        "Document \"{}\" has been successfully uploaded and indexed. \
                         You can now ask questions about its content.",
                        file.name
                    )));
                }
                Err(err) => {
                    let (detail, phase) = match err {
                        UploadError::Server(m) if m.trim().is_empty() => {
                            (UNKNOWN_UPLOAD_ERROR.to_string(), StatusPhase::UploadFailed)
                        }
                        UploadError::Server(m) => (m.clone(), StatusPhase::UploadFailed),
                        UploadError::Transport(m) => (m.clone(), StatusPhase::ConnectionError),
                    };
                    crate::warn_log!("Upload of {} failed: {}", file.name, detail);
                    state.notify(
                        cmds,
                        NotificationKind::Error,
                        format!("Upload failed: {}", detail),
                    );
                    state.fail_status(cmds, phase);
                }
            }

            start_next_upload(state, cmds);
            true
        }
        _ => false,
    }
}

/// Pop queued files until one passes validation and start it.  Does nothing
/// while another upload is still running.
fn start_next_upload(state: &mut AppState, cmds: &mut Vec<Command>) {
    if state.upload_in_flight.is_some() {
        return;
    }

    while let Some(file) = state.upload_queue.pop_front() {
        if file.meta.kind().is_none() {
            crate::debug_log!("Rejected {} ({:?})", file.meta.name, file.meta.mime);
            state.notify(cmds, NotificationKind::Error, UNSUPPORTED_FILE_MESSAGE);
            continue;
        }

        state.notify(
            cmds,
            NotificationKind::Info,
            format!("Uploading {}...", file.meta.name),
        );
        state.status = StatusPhase::ProcessingDocument;
        state.offline = false;
        state.upload_in_flight = Some(file.meta.clone());
        state.touch_transcript();
        cmds.push(Command::UploadFile(file));
        return;
    }
}
