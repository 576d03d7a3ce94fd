use crate::constants::ALL_DOCUMENTS_REMOVED_NOTICE;
use crate::messages::{Command, Message};
use crate::models::ChatEntry;
use crate::state::{AppState, NotificationKind};

pub fn update(state: &mut AppState, msg: &Message, cmds: &mut Vec<Command>) -> bool {
    match msg {
        Message::RemoveDocument(id) => {
            let before = state.documents.len();
            state.documents.retain(|d| d.id != *id);
            if state.documents.len() == before {
                crate::warn_log!("RemoveDocument: no document with id {}", id);
                return true;
            }
            if state.selected_document == Some(*id) {
                state.selected_document = None;
            }
            state.touch_documents();

            if state.documents.is_empty() {
                state.push_entry(ChatEntry::system(ALL_DOCUMENTS_REMOVED_NOTICE));
            }
            state.notify(cmds, NotificationKind::Success, "Document removed");
            true
        }
        Message::SelectDocument(id) => {
            // Highlight only; questions always go to the whole corpus.
            if state.documents.iter().any(|d| d.id == *id) && state.selected_document != Some(*id) {
                state.selected_document = Some(*id);
                state.touch_documents();
            }
            true
        }
        _ => false,
    }
}
