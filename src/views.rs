// src/views.rs
//
// Rendering layer: reads `AppState` and brings the DOM in line with it.
// Nothing here mutates state.
//
use std::cell::Cell;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlButtonElement, HtmlTextAreaElement};

use crate::constants::{DOCUMENT_NAME_MAX_GRAPHEMES, PLACEHOLDER_NOT_READY, PLACEHOLDER_READY};
use crate::dom_utils::{by_id, clear_children, element, set_visible, toggle_class};
use crate::models::{ChatEntry, Role, SettingKey, Settings};
use crate::state::AppState;
use crate::toast;
use crate::utils::{document_count_label, format_clock_time, format_file_size, truncate_graphemes};

/// What the rebuilt regions were last drawn from.
#[derive(Debug, Default)]
pub struct RenderCache {
    documents: Cell<Option<u64>>,
    transcript: Cell<Option<u64>>,
    settings: Cell<Option<Settings>>,
}

impl RenderCache {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Render every region.  The document list, transcript and settings panel
/// are only rebuilt when their inputs moved since the last call.
pub fn render(state: &AppState, document: &Document, cache: &RenderCache) -> Result<(), JsValue> {
    if cache.documents.get() != Some(state.documents_revision) {
        render_documents(state, document)?;
        cache.documents.set(Some(state.documents_revision));
    }

    if cache.transcript.get() != Some(state.transcript_revision) {
        render_transcript(state, document)?;
        cache.transcript.set(Some(state.transcript_revision));
    }

    render_composer(state, document)?;
    render_status(state, document)?;

    if cache.settings.get() != Some(state.settings) {
        render_settings(state, document)?;
        cache.settings.set(Some(state.settings));
    }

    toast::render(document, state.notification.as_ref())
}

fn render_documents(state: &AppState, document: &Document) -> Result<(), JsValue> {
    let list = by_id(document, "documentList")?;
    clear_children(&list);

    let highlighted = state.highlighted_document();
    for doc in &state.documents {
        let row = element(document, "div", Some("document-item"), None)?;
        row.set_attribute("data-doc-id", &doc.id.to_string())?;
        toggle_class(&row, "active", highlighted == Some(doc.id));

        let name = element(
            document,
            "div",
            Some("doc-name"),
            Some(&truncate_graphemes(&doc.name, DOCUMENT_NAME_MAX_GRAPHEMES)),
        )?;
        name.set_attribute("title", &doc.name)?;

        let meta = element(
            document,
            "div",
            Some("doc-meta"),
            Some(&format!(
                "{} • {}",
                format_file_size(doc.size_bytes),
                format_clock_time(doc.uploaded_at)
            )),
        )?;

        let remove = element(document, "button", Some("doc-remove"), Some("×"))?;
        remove.set_attribute("type", "button")?;
        remove.set_attribute("aria-label", &format!("Remove {}", doc.name))?;
        remove.set_attribute("data-doc-id", &doc.id.to_string())?;

        row.append_child(&name)?;
        row.append_child(&meta)?;
        row.append_child(&remove)?;
        list.append_child(&row)?;
    }

    by_id(document, "documentCount")?
        .set_text_content(Some(&document_count_label(state.documents.len())));
    Ok(())
}

fn render_transcript(state: &AppState, document: &Document) -> Result<(), JsValue> {
    let messages = by_id(document, "chatMessages")?;
    clear_children(&messages);

    for entry in &state.entries {
        let row = entry_element(document, entry)?;
        messages.append_child(&row)?;
    }
    if state.processing_document() {
        let indicator = indicator_element(document, "processingIndicator", "Processing document")?;
        messages.append_child(&indicator)?;
    }
    if state.thinking() {
        let indicator = indicator_element(document, "typingIndicator", "Thinking")?;
        messages.append_child(&indicator)?;
    }

    if let Some(welcome) = document.get_element_by_id("welcomeMessage") {
        set_visible(&welcome, state.entries.is_empty() && !state.document_uploaded());
    }

    if state.settings.auto_scroll {
        messages.set_scroll_top(messages.scroll_height());
    }
    Ok(())
}

fn entry_element(document: &Document, entry: &ChatEntry) -> Result<Element, JsValue> {
    let role = match entry.role {
        Role::User => "user",
        Role::Bot => "bot",
        Role::System => "system",
    };
    let row = element(document, "div", Some(&format!("message {}", role)), None)?;
    let content = element(document, "div", Some("message-content"), None)?;

    // Text content only: answers and excerpts come from the server verbatim.
    let text = element(document, "div", Some("message-text"), Some(&entry.text))?;
    content.append_child(&text)?;

    if let Some(source) = &entry.source {
        let excerpt = element(document, "div", Some("source-message"), None)?;
        let heading = element(document, "strong", None, Some("Source Context:"))?;
        let body = element(document, "div", Some("source-text"), Some(source))?;
        excerpt.append_child(&heading)?;
        excerpt.append_child(&body)?;
        content.append_child(&excerpt)?;
    }

    let time = element(
        document,
        "div",
        Some("message-time"),
        Some(&format_clock_time(entry.timestamp)),
    )?;
    content.append_child(&time)?;
    row.append_child(&content)?;
    Ok(row)
}

fn indicator_element(document: &Document, id: &str, label: &str) -> Result<Element, JsValue> {
    let row = element(document, "div", Some("message bot"), None)?;
    row.set_id(id);
    let indicator = element(document, "div", Some("typing-indicator"), Some(label))?;
    let dots = element(document, "span", Some("typing-dots"), Some("…"))?;
    indicator.append_child(&dots)?;
    row.append_child(&indicator)?;
    Ok(row)
}

fn render_composer(state: &AppState, document: &Document) -> Result<(), JsValue> {
    let input: HtmlTextAreaElement = by_id(document, "chatInput")?.dyn_into()?;
    let ready = state.document_uploaded();
    input.set_disabled(!ready);
    input.set_placeholder(if ready { PLACEHOLDER_READY } else { PLACEHOLDER_NOT_READY });
    // Only push the value when the reducer changed it (e.g. cleared on send)
    // so the caret is not reset while typing.
    if input.value() != state.question_input {
        input.set_value(&state.question_input);
        let _ = input.style().set_property("height", "auto");
    }

    let send: HtmlButtonElement = by_id(document, "sendBtn")?.dyn_into()?;
    send.set_disabled(!state.can_submit());
    Ok(())
}

fn render_status(state: &AppState, document: &Document) -> Result<(), JsValue> {
    by_id(document, "statusText")?.set_text_content(Some(state.status.label()));
    toggle_class(&by_id(document, "statusDot")?, "offline", state.offline);
    if let Some(timing) = document.get_element_by_id("responseTime") {
        let label = state.last_timing.map(|t| t.label()).unwrap_or_default();
        timing.set_text_content(Some(&label));
    }
    Ok(())
}

fn render_settings(state: &AppState, document: &Document) -> Result<(), JsValue> {
    for key in SettingKey::ALL {
        let selector = format!("[data-setting=\"{}\"]", key.attr());
        if let Some(toggle) = document.query_selector(&selector)? {
            toggle_class(&toggle, "active", state.settings.get(key));
            toggle.set_attribute("aria-checked", if state.settings.get(key) { "true" } else { "false" })?;
        }
    }
    if let Some(body) = document.body() {
        toggle_class(&body, "light-theme", !state.settings.dark_mode);
    }
    Ok(())
}
