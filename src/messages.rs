// src/messages.rs
//
// Everything that can happen in the chat widget (`Message`) and every side
// effect the reducers can ask for (`Command`).
//
use crate::models::{
    AskResponse, ChatTurn, DocumentId, FileMeta, PendingFile, SettingKey, Settings, UploadError,
};

#[derive(Debug, Clone)]
pub enum Message {
    // Upload flow
    FilesSelected(Vec<PendingFile>),
    UploadFinished {
        file: FileMeta,
        result: Result<(), UploadError>,
        elapsed_ms: u64,
    },

    // Document list
    RemoveDocument(DocumentId),
    SelectDocument(DocumentId),

    // Ask flow
    UpdateQuestionInput(String),
    SubmitQuestion,
    AskFinished {
        question: String,
        result: Result<AskResponse, String>,
        elapsed_ms: u64,
    },

    // Settings & persistence
    ToggleSetting(SettingKey),
    HistoryRestored(Vec<ChatTurn>),
    AutosaveTick,

    // Chat actions
    ClearChat,
    ExportChat,
    ShowHelp,

    // Notifications & status
    DismissNotification,
    ResetStatus,
    PageVisible,
}

/// Side effects produced by `update`.  Executed by `command_executors` once
/// the state borrow has been released.
#[derive(Debug)]
pub enum Command {
    /// POST the file to `/upload/`; answers with `Message::UploadFinished`.
    UploadFile(PendingFile),

    /// GET `/ask/?q=`; answers with `Message::AskFinished`.
    AskQuestion(String),

    /// Write the full settings object to durable storage.
    SaveSettings(Settings),

    /// Write the chat history to session storage.
    SaveHistory(Vec<ChatTurn>),

    /// Drop the saved chat history from session storage.
    ClearSavedHistory,

    /// (Re)start the notification auto-dismiss timer.
    ScheduleNotificationDismiss,

    /// (Re)start the delayed status/offline reset.
    ScheduleStatusReset,

    /// Offer a file download to the user.
    DownloadFile { filename: String, contents: String },
}
