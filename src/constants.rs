// Endpoints of the external Q&A service, relative to the API base URL.
pub const UPLOAD_PATH: &str = "/upload/";
pub const ASK_PATH: &str = "/ask/";
pub const UPLOAD_FIELD: &str = "file";

// Browser storage keys
pub const SETTINGS_STORAGE_KEY: &str = "ragChatSettings"; // localStorage
pub const HISTORY_STORAGE_KEY: &str = "ragChatHistory"; // sessionStorage

// Timings (milliseconds)
pub const NOTIFICATION_DURATION_MS: u32 = 3_000;
pub const STATUS_RESET_DELAY_MS: u32 = 3_000;
pub const HISTORY_AUTOSAVE_INTERVAL_MS: u32 = 30_000;

// Accepted upload types
pub const ACCEPTED_EXTENSIONS: [&str; 3] = ["pdf", "docx", "txt"];
pub const ACCEPTED_MIME_TYPES: [&str; 3] = [
    "application/pdf",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "text/plain",
];

// Document list
pub const DOCUMENT_NAME_MAX_GRAPHEMES: usize = 32;

// User-facing copy
pub const UNSUPPORTED_FILE_MESSAGE: &str =
    "Unsupported file format. Please upload PDF, DOCX, or TXT files.";
pub const NO_DOCUMENT_MESSAGE: &str = "Please upload a document first";
pub const ALL_DOCUMENTS_REMOVED_NOTICE: &str =
    "All documents have been removed. Please upload a document to continue chatting.";
pub const UNKNOWN_UPLOAD_ERROR: &str = "Unknown error";
pub const PLACEHOLDER_READY: &str = "Ask me anything about your documents...";
pub const PLACEHOLDER_NOT_READY: &str = "Upload a document first...";
pub const HELP_TEXT: &str = "Quick start:\n\
1. Upload documents (PDF, DOCX, TXT)\n\
2. Ask questions about their content\n\
3. Read the answer and its source context\n\n\
Tips:\n\
- Shift+Enter inserts a new line\n\
- Drag and drop files onto the upload area\n\
- Ctrl+U opens the file picker, Ctrl+L clears the chat\n\
- Export the chat history from the sidebar at any time";
