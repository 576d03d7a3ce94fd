use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{ACCEPTED_EXTENSIONS, ACCEPTED_MIME_TYPES};

// ---------------------------------------------------------------------------
// Documents
// ---------------------------------------------------------------------------

/// Locally generated identifier of an uploaded document.  Never sent to the
/// server; only used to address list rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentId(Uuid);

impl DocumentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse the value stored in a `data-doc-id` attribute.
    pub fn parse(raw: &str) -> Option<Self> {
        Uuid::parse_str(raw).ok().map(Self)
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: DocumentId,
    pub name: String,
    pub size_bytes: u64,
    pub mime_or_extension: String,
    pub uploaded_at: DateTime<Utc>,
}

impl Document {
    pub fn from_upload(meta: &FileMeta, uploaded_at: DateTime<Utc>) -> Self {
        let mime_or_extension = if meta.mime.is_empty() {
            extension_of(&meta.name).unwrap_or_default()
        } else {
            meta.mime.clone()
        };
        Self {
            id: DocumentId::new(),
            name: meta.name.clone(),
            size_bytes: meta.size_bytes,
            mime_or_extension,
            uploaded_at,
        }
    }
}

/// What we know about a picked/dropped file before it is uploaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMeta {
    pub name: String,
    pub size_bytes: u64,
    pub mime: String,
}

impl FileMeta {
    pub fn new(name: impl Into<String>, size_bytes: u64, mime: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size_bytes,
            mime: mime.into(),
        }
    }

    pub fn kind(&self) -> Option<DocumentKind> {
        DocumentKind::detect(&self.name, &self.mime)
    }
}

/// A file waiting in the upload queue.  `handle` is the browser `File`; it is
/// absent when the reducer is driven from tests.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingFile {
    pub meta: FileMeta,
    pub handle: Option<web_sys::File>,
}

impl PendingFile {
    pub fn from_meta(meta: FileMeta) -> Self {
        Self { meta, handle: None }
    }

    pub fn from_browser_file(file: web_sys::File) -> Self {
        let meta = FileMeta::new(file.name(), file.size() as u64, file.type_());
        Self {
            meta,
            handle: Some(file),
        }
    }
}

/// Upload types the server knows how to index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
    Text,
}

impl DocumentKind {
    /// Accept by MIME type first, then by (case-insensitive) extension.
    pub fn detect(name: &str, mime: &str) -> Option<Self> {
        let by_mime = match mime.to_ascii_lowercase().as_str() {
            m if m == ACCEPTED_MIME_TYPES[0] => Some(Self::Pdf),
            m if m == ACCEPTED_MIME_TYPES[1] => Some(Self::Docx),
            m if m == ACCEPTED_MIME_TYPES[2] => Some(Self::Text),
            _ => None,
        };
        by_mime.or_else(|| match extension_of(name)?.as_str() {
            e if e == ACCEPTED_EXTENSIONS[0] => Some(Self::Pdf),
            e if e == ACCEPTED_EXTENSIONS[1] => Some(Self::Docx),
            e if e == ACCEPTED_EXTENSIONS[2] => Some(Self::Text),
            _ => None,
        })
    }
}

/// Lower-cased extension without the dot.
pub fn extension_of(name: &str) -> Option<String> {
    let (stem, ext) = name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

// ---------------------------------------------------------------------------
// Transcript
// ---------------------------------------------------------------------------

/// One answered question.  This is what gets persisted and exported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub question: String,
    pub answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Bot,
    System,
}

/// A rendered row of the chat view.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatEntry {
    pub role: Role,
    pub text: String,
    pub source: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl ChatEntry {
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User, text.into(), None)
    }

    pub fn bot(text: impl Into<String>, source: Option<String>) -> Self {
        Self::new(Role::Bot, text.into(), source)
    }

    pub fn system(text: impl Into<String>) -> Self {
        Self::new(Role::System, text.into(), None)
    }

    fn new(role: Role, text: String, source: Option<String>) -> Self {
        Self {
            role,
            text,
            source,
            timestamp: Utc::now(),
        }
    }
}

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

/// User preferences.  Missing keys in stored JSON fall back to the defaults
/// field by field; unknown keys are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub dark_mode: bool,
    pub auto_scroll: bool,
    pub sound_effects: bool,
    pub show_sources: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dark_mode: true,
            auto_scroll: true,
            sound_effects: false,
            show_sources: true,
        }
    }
}

impl Settings {
    pub fn get(&self, key: SettingKey) -> bool {
        match key {
            SettingKey::DarkMode => self.dark_mode,
            SettingKey::AutoScroll => self.auto_scroll,
            SettingKey::SoundEffects => self.sound_effects,
            SettingKey::ShowSources => self.show_sources,
        }
    }

    /// Flip one toggle and return its new value.
    pub fn toggle(&mut self, key: SettingKey) -> bool {
        let slot = match key {
            SettingKey::DarkMode => &mut self.dark_mode,
            SettingKey::AutoScroll => &mut self.auto_scroll,
            SettingKey::SoundEffects => &mut self.sound_effects,
            SettingKey::ShowSources => &mut self.show_sources,
        };
        *slot = !*slot;
        *slot
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKey {
    DarkMode,
    AutoScroll,
    SoundEffects,
    ShowSources,
}

impl SettingKey {
    pub const ALL: [SettingKey; 4] = [
        SettingKey::DarkMode,
        SettingKey::AutoScroll,
        SettingKey::SoundEffects,
        SettingKey::ShowSources,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SettingKey::DarkMode => "Dark Mode",
            SettingKey::AutoScroll => "Auto-scroll",
            SettingKey::SoundEffects => "Sound Effects",
            SettingKey::ShowSources => "Show Sources",
        }
    }

    /// Value of the `data-setting` attribute on the toggle element; matches the
    /// persisted JSON key.
    pub fn attr(self) -> &'static str {
        match self {
            SettingKey::DarkMode => "darkMode",
            SettingKey::AutoScroll => "autoScroll",
            SettingKey::SoundEffects => "soundEffects",
            SettingKey::ShowSources => "showSources",
        }
    }

    pub fn from_attr(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.attr() == raw)
    }
}

// ---------------------------------------------------------------------------
// Wire bodies
// ---------------------------------------------------------------------------

/// `GET /ask/` success body.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AskResponse {
    pub answer: String,
    #[serde(default)]
    pub source: Option<String>,
}

impl AskResponse {
    /// The excerpt, if the server sent a non-blank one.
    pub fn excerpt(&self) -> Option<&str> {
        self.source.as_deref().filter(|s| !s.trim().is_empty())
    }
}

/// `POST /upload/` body.  Only `error` is inspected; the server may
/// answer 200 with an `error` field for formats it cannot parse.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UploadReply {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    /// The server answered and reported a problem.
    Server(String),
    /// The request never produced a usable response.
    Transport(String),
}

impl fmt::Display for UploadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadError::Server(msg) | UploadError::Transport(msg) => f.write_str(msg),
        }
    }
}

// ---------------------------------------------------------------------------
// Export
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedDocument {
    pub name: String,
    pub upload_time: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatExport {
    pub export_date: DateTime<Utc>,
    pub documents: Vec<ExportedDocument>,
    pub messages: Vec<ChatTurn>,
}
