//! Drives the public reducer and storage API the way two consecutive page
//! loads would: settings changed in the first session must come back in the
//! second, and a saved transcript must survive a reload of the same tab.

use wasm_bindgen_test::*;

use docqa_chat_frontend::messages::{Command, Message};
use docqa_chat_frontend::models::{AskResponse, FileMeta, PendingFile, SettingKey};
use docqa_chat_frontend::state::AppState;
use docqa_chat_frontend::storage::{self, MemoryStore};
use docqa_chat_frontend::update::update;

wasm_bindgen_test_configure!(run_in_browser);

/// Minimal executor for the persistence commands.
fn apply(cmds: Vec<Command>, settings: &MemoryStore, history: &MemoryStore) {
    for cmd in cmds {
        match cmd {
            Command::SaveSettings(s) => storage::save_settings(settings, &s).unwrap(),
            Command::SaveHistory(turns) => storage::save_history(history, &turns).unwrap(),
            Command::ClearSavedHistory => storage::clear_history(history).unwrap(),
            _ => {}
        }
    }
}

#[wasm_bindgen_test]
fn settings_are_restored_in_a_fresh_session() {
    let settings_store = MemoryStore::new();
    let history_store = MemoryStore::new();

    let mut first = AppState::new(storage::load_settings(&settings_store));
    let cmds = update(&mut first, Message::ToggleSetting(SettingKey::DarkMode));
    apply(cmds, &settings_store, &history_store);
    let cmds = update(&mut first, Message::ToggleSetting(SettingKey::ShowSources));
    apply(cmds, &settings_store, &history_store);

    let second = AppState::new(storage::load_settings(&settings_store));
    assert!(!second.settings.dark_mode);
    assert!(!second.settings.show_sources);
    assert!(second.settings.auto_scroll);
    assert!(!second.settings.sound_effects);
}

#[wasm_bindgen_test]
fn autosaved_transcript_survives_a_reload() {
    let settings_store = MemoryStore::new();
    let history_store = MemoryStore::new();
    let mut first = AppState::default();

    let cmds = update(
        &mut first,
        Message::FilesSelected(vec![PendingFile::from_meta(FileMeta::new(
            "notes.txt",
            120,
            "text/plain",
        ))]),
    );
    let upload = cmds.into_iter().find_map(|c| match c {
        Command::UploadFile(f) => Some(f),
        _ => None,
    });
    let upload = upload.expect("upload should start");
    update(
        &mut first,
        Message::UploadFinished {
            file: upload.meta,
            result: Ok(()),
            elapsed_ms: 5,
        },
    );

    update(&mut first, Message::UpdateQuestionInput("Summary?".into()));
    update(&mut first, Message::SubmitQuestion);
    update(
        &mut first,
        Message::AskFinished {
            question: "Summary?".into(),
            result: Ok(AskResponse {
                answer: "Short notes.".into(),
                source: Some("line 1".into()),
            }),
            elapsed_ms: 30,
        },
    );
    apply(update(&mut first, Message::AutosaveTick), &settings_store, &history_store);

    let mut second = AppState::new(storage::load_settings(&settings_store));
    update(
        &mut second,
        Message::HistoryRestored(storage::load_history(&history_store)),
    );
    assert_eq!(second.history, first.history);
    assert_eq!(second.entries.len(), 2);
    // Documents live on the server side only; a reload starts unready.
    assert!(!second.document_uploaded());

    apply(update(&mut second, Message::ClearChat), &settings_store, &history_store);
    assert!(storage::load_history(&history_store).is_empty());
}
