//! Chat history export as a downloadable JSON file.

use chrono::{DateTime, Utc};

use crate::models::{ChatExport, ExportedDocument};
use crate::state::AppState;

/// Snapshot of the session for export.  `None` when there is no history to
/// export.
pub fn build_export(state: &AppState, now: DateTime<Utc>) -> Option<ChatExport> {
    if state.history.is_empty() {
        return None;
    }
    Some(ChatExport {
        export_date: now,
        documents: state
            .documents
            .iter()
            .map(|d| ExportedDocument {
                name: d.name.clone(),
                upload_time: d.uploaded_at,
            })
            .collect(),
        messages: state.history.clone(),
    })
}

/// `chat-export-YYYY-MM-DD.json`
pub fn export_filename(now: DateTime<Utc>) -> String {
    format!("chat-export-{}.json", now.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn filename_uses_utc_date() {
        let now = Utc.with_ymd_and_hms(2024, 3, 9, 23, 59, 0).unwrap();
        assert_eq!(export_filename(now), "chat-export-2024-03-09.json");
    }

    #[wasm_bindgen_test]
    fn nothing_to_export_without_history() {
        assert!(build_export(&AppState::default(), Utc::now()).is_none());
    }
}
