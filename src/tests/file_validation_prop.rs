//! Property test: anything that is not PDF, DOCX or plain text is rejected
//! before an upload command is produced.

use proptest::prelude::*;
use wasm_bindgen_test::*;

use crate::messages::{Command, Message};
use crate::models::{FileMeta, PendingFile};
use crate::state::AppState;
use crate::update::update;

wasm_bindgen_test_configure!(run_in_browser);

fn unsupported_file() -> impl Strategy<Value = FileMeta> {
    let ext = prop_oneof![
        Just("png"),
        Just("jpg"),
        Just("doc"),
        Just("pdfx"),
        Just("txt.exe"),
        Just("md"),
        Just("zip"),
        Just(""),
    ];
    let mime = prop_oneof![
        Just(""),
        Just("image/png"),
        Just("application/zip"),
        Just("application/msword"),
        Just("text/markdown"),
    ];
    ("[a-zA-Z0-9 _-]{1,16}", ext, mime, 0u64..10_000_000).prop_map(|(stem, ext, mime, size)| {
        let name = if ext.is_empty() {
            stem
        } else {
            format!("{}.{}", stem, ext)
        };
        FileMeta::new(name, size, mime)
    })
}

#[wasm_bindgen_test]
fn unsupported_files_are_never_uploaded() {
    let mut runner = proptest::test_runner::TestRunner::default();
    let strategy = prop::collection::vec(unsupported_file(), 1..6);

    runner
        .run(&strategy, |files| {
            let mut state = AppState::default();
            let pending = files.into_iter().map(PendingFile::from_meta).collect();
            let cmds = update(&mut state, Message::FilesSelected(pending));
            prop_assert!(!cmds.iter().any(|c| matches!(c, Command::UploadFile(_))));
            prop_assert!(!state.processing_document());
            prop_assert!(state.upload_queue.is_empty());
            Ok(())
        })
        .expect("property test failed");
}
