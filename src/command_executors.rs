use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;

use crate::app::{dispatch_weak, App};
use crate::constants::{NOTIFICATION_DURATION_MS, STATUS_RESET_DELAY_MS};
use crate::dom_utils::download_text_file;
use crate::messages::{Command, Message};
use crate::models::UploadError;
use crate::storage;
use crate::utils::now_ms;

pub fn execute(app: &Rc<App>, cmd: Command) {
    match cmd {
        Command::UploadFile(file) => {
            let app = Rc::clone(app);
            spawn_local(async move {
                let started = now_ms();
                let result = match &file.handle {
                    Some(handle) => app.api().upload_file(handle).await,
                    None => Err(UploadError::Transport("file is no longer available".to_string())),
                };
                let elapsed_ms = elapsed_since(started);
                app.dispatch(Message::UploadFinished {
                    file: file.meta,
                    result,
                    elapsed_ms,
                });
            });
        }
        Command::AskQuestion(question) => {
            let app = Rc::clone(app);
            spawn_local(async move {
                let started = now_ms();
                let result = app.api().ask(&question).await;
                let elapsed_ms = elapsed_since(started);
                app.dispatch(Message::AskFinished {
                    question,
                    result,
                    elapsed_ms,
                });
            });
        }
        Command::SaveSettings(settings) => {
            if let Err(e) = storage::save_settings(app.settings_store(), &settings) {
                crate::warn_log!("Failed to save settings: {}", e);
            }
        }
        Command::SaveHistory(history) => match storage::save_history(app.history_store(), &history) {
            Ok(()) => crate::debug_log!("Autosaved {} chat turns", history.len()),
            Err(e) => crate::warn_log!("Failed to save chat history: {}", e),
        },
        Command::ClearSavedHistory => {
            if let Err(e) = storage::clear_history(app.history_store()) {
                crate::warn_log!("Failed to clear saved chat history: {}", e);
            }
        }
        Command::ScheduleNotificationDismiss => {
            let weak = Rc::downgrade(app);
            app.scheduler()
                .schedule_notification_dismiss(NOTIFICATION_DURATION_MS, move || {
                    dispatch_weak(&weak, Message::DismissNotification);
                });
        }
        Command::ScheduleStatusReset => {
            let weak = Rc::downgrade(app);
            app.scheduler()
                .schedule_status_reset(STATUS_RESET_DELAY_MS, move || {
                    dispatch_weak(&weak, Message::ResetStatus);
                });
        }
        Command::DownloadFile { filename, contents } => {
            if let Err(e) = download_text_file(app.document(), &filename, &contents) {
                crate::error_log!("Failed to download {}: {:?}", filename, e);
            }
        }
    }
}

fn elapsed_since(started_ms: f64) -> u64 {
    (now_ms() - started_ms).max(0.0).round() as u64
}
