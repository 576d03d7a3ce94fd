//! Rendering against the real page: the skeleton builds, entries with source
//! excerpts render, and regions only rebuild when their inputs change.

use wasm_bindgen_test::*;
use web_sys::Document;

use super::support::{answer, ask, pdf, upload_all};
use crate::messages::Message;
use crate::models::SettingKey;
use crate::state::AppState;
use crate::ui::setup::create_base_ui;
use crate::update::update;
use crate::views::{render, RenderCache};

wasm_bindgen_test_configure!(run_in_browser);

fn page() -> Document {
    let document = web_sys::window().unwrap().document().unwrap();
    create_base_ui(&document).unwrap();
    document
}

fn list_marker(document: &Document) {
    let marker = document.create_element("span").unwrap();
    marker.set_id("listMarker");
    document
        .get_element_by_id("documentList")
        .unwrap()
        .append_child(&marker)
        .unwrap();
}

#[wasm_bindgen_test]
fn skeleton_and_transcript_render() {
    let document = page();
    for id in ["uploadArea", "fileInput", "documentList", "settingsPanel", "chatInput", "sendBtn", "statusText"] {
        assert!(document.get_element_by_id(id).is_some(), "missing #{}", id);
    }

    let mut state = AppState::default();
    upload_all(&mut state, vec![pdf("guide.pdf")]);
    ask(&mut state, "Q");
    update(&mut state, answer("Q", "X", Some("Y")));

    render(&state, &document, &RenderCache::new()).unwrap();

    let list = document.get_element_by_id("documentList").unwrap();
    assert_eq!(list.child_element_count(), 1);
    let excerpt = document
        .query_selector("#chatMessages .source-message .source-text")
        .unwrap()
        .unwrap();
    assert_eq!(excerpt.text_content().as_deref(), Some("Y"));
    assert_eq!(
        document.get_element_by_id("statusText").unwrap().text_content().as_deref(),
        Some("Ready")
    );
}

#[wasm_bindgen_test]
fn typing_does_not_rebuild_the_document_list() {
    let document = page();
    let cache = RenderCache::new();
    let mut state = AppState::default();
    upload_all(&mut state, vec![pdf("a.pdf")]);
    render(&state, &document, &cache).unwrap();

    list_marker(&document);
    update(&mut state, Message::UpdateQuestionInput("Wha".into()));
    render(&state, &document, &cache).unwrap();
    assert!(document.get_element_by_id("listMarker").is_some());

    upload_all(&mut state, vec![pdf("b.pdf")]);
    render(&state, &document, &cache).unwrap();
    assert!(document.get_element_by_id("listMarker").is_none());
    let list = document.get_element_by_id("documentList").unwrap();
    assert_eq!(list.child_element_count(), 2);
}

#[wasm_bindgen_test]
fn settings_panel_follows_toggles() {
    let document = page();
    let cache = RenderCache::new();
    let mut state = AppState::default();
    render(&state, &document, &cache).unwrap();

    let toggle = document
        .query_selector("[data-setting=\"soundEffects\"]")
        .unwrap()
        .unwrap();
    assert_eq!(toggle.get_attribute("aria-checked").as_deref(), Some("false"));

    update(&mut state, Message::ToggleSetting(SettingKey::SoundEffects));
    render(&state, &document, &cache).unwrap();
    assert_eq!(toggle.get_attribute("aria-checked").as_deref(), Some("true"));
}
