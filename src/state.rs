use std::collections::VecDeque;

use crate::messages::Command;
use crate::models::{ChatEntry, ChatTurn, Document, DocumentId, FileMeta, PendingFile, Settings};

/// High-level phase shown in the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusPhase {
    Ready,
    ProcessingDocument,
    Thinking,
    UploadFailed,
    ConnectionError,
    Error,
}

impl StatusPhase {
    pub fn label(self) -> &'static str {
        match self {
            StatusPhase::Ready => "Ready",
            StatusPhase::ProcessingDocument => "Processing document...",
            StatusPhase::Thinking => "Thinking...",
            StatusPhase::UploadFailed => "Upload failed",
            StatusPhase::ConnectionError => "Connection error",
            StatusPhase::Error => "Error",
        }
    }

    pub fn is_error(self) -> bool {
        matches!(
            self,
            StatusPhase::UploadFailed | StatusPhase::ConnectionError | StatusPhase::Error
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub text: String,
    pub kind: NotificationKind,
}

/// Duration of the last completed request, for the status bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timing {
    Upload(u64),
    Response(u64),
}

impl Timing {
    pub fn label(self) -> String {
        match self {
            Timing::Upload(ms) => format!("Last upload: {}ms", ms),
            Timing::Response(ms) => format!("Response: {}ms", ms),
        }
    }
}

/// The whole client session.  Owned by `App`; reducers get `&mut` access,
/// views get `&`.
#[derive(Debug)]
pub struct AppState {
    // Corpus
    pub documents: Vec<Document>,
    pub selected_document: Option<DocumentId>,
    // Bumped whenever the list or its highlight changes
    pub documents_revision: u64,

    // Transcript: `entries` is what the chat view shows, `history` is the
    // question/answer log that gets persisted and exported.
    pub entries: Vec<ChatEntry>,
    pub history: Vec<ChatTurn>,
    // Bumped whenever the rendered transcript changes
    pub transcript_revision: u64,

    pub settings: Settings,

    // Composer
    pub question_input: String,
    pub ask_in_flight: bool,

    // Uploads are strictly sequential
    pub upload_queue: VecDeque<PendingFile>,
    pub upload_in_flight: Option<FileMeta>,

    // Status bar
    pub status: StatusPhase,
    pub offline: bool,
    pub last_timing: Option<Timing>,

    pub notification: Option<Notification>,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self {
            documents: Vec::new(),
            selected_document: None,
            documents_revision: 0,
            entries: Vec::new(),
            history: Vec::new(),
            transcript_revision: 0,
            settings,
            question_input: String::new(),
            ask_in_flight: false,
            upload_queue: VecDeque::new(),
            upload_in_flight: None,
            status: StatusPhase::Ready,
            offline: false,
            last_timing: None,
            notification: None,
        }
    }

    /// Readiness gate: questions are allowed only while the list is non-empty.
    pub fn document_uploaded(&self) -> bool {
        !self.documents.is_empty()
    }

    pub fn can_submit(&self) -> bool {
        self.document_uploaded() && !self.ask_in_flight && !self.question_input.trim().is_empty()
    }

    pub fn processing_document(&self) -> bool {
        self.upload_in_flight.is_some()
    }

    pub fn thinking(&self) -> bool {
        self.ask_in_flight
    }

    pub fn push_entry(&mut self, entry: ChatEntry) {
        self.entries.push(entry);
        self.touch_transcript();
    }

    pub fn touch_documents(&mut self) {
        self.documents_revision = self.documents_revision.wrapping_add(1);
    }

    pub fn touch_transcript(&mut self) {
        self.transcript_revision = self.transcript_revision.wrapping_add(1);
    }

    /// Replace the current notification and restart its dismissal timer.
    pub fn notify(&mut self, cmds: &mut Vec<Command>, kind: NotificationKind, text: impl Into<String>) {
        self.notification = Some(Notification {
            text: text.into(),
            kind,
        });
        cmds.push(Command::ScheduleNotificationDismiss);
    }

    /// Status of whatever is still running, or Ready.
    pub fn busy_phase(&self) -> StatusPhase {
        if self.ask_in_flight {
            StatusPhase::Thinking
        } else if self.upload_in_flight.is_some() {
            StatusPhase::ProcessingDocument
        } else {
            StatusPhase::Ready
        }
    }

    pub fn settle_status(&mut self) {
        self.status = self.busy_phase();
    }

    /// Enter an error phase: offline indicator on, delayed reset queued.
    pub fn fail_status(&mut self, cmds: &mut Vec<Command>, phase: StatusPhase) {
        self.status = phase;
        self.offline = true;
        cmds.push(Command::ScheduleStatusReset);
    }

    /// The highlighted row, falling back to the first document.
    pub fn highlighted_document(&self) -> Option<DocumentId> {
        self.selected_document
            .filter(|id| self.documents.iter().any(|d| d.id == *id))
            .or_else(|| self.documents.first().map(|d| d.id))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
