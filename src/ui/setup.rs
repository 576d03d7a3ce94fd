use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use crate::constants::PLACEHOLDER_NOT_READY;
use crate::dom_utils::element;
use crate::models::SettingKey;

/// Build the widget skeleton.  A host page that already ships the markup
/// (recognised by `#chatMessages`) is left untouched.
pub fn create_base_ui(document: &Document) -> Result<(), JsValue> {
    ensure_layout_styles(document)?;
    if document.get_element_by_id("chatMessages").is_some() {
        return Ok(());
    }

    let body = document.body().ok_or(JsValue::from_str("No body found"))?;

    let app = element(document, "div", Some("app"), None)?;
    let sidebar = create_sidebar(document)?;
    let chat = create_chat_panel(document)?;
    app.append_child(&sidebar)?;
    app.append_child(&chat)?;
    body.append_child(&app)?;

    Ok(())
}

fn create_sidebar(document: &Document) -> Result<Element, JsValue> {
    let sidebar = element(document, "aside", Some("sidebar"), None)?;
    sidebar.set_id("sidebar");

    // Upload area + hidden picker
    let upload_area = element(
        document,
        "div",
        Some("upload-area"),
        Some("Drop PDF, DOCX or TXT files here, or click to browse"),
    )?;
    upload_area.set_id("uploadArea");
    let file_input = document.create_element("input")?;
    file_input.set_id("fileInput");
    file_input.set_attribute("type", "file")?;
    file_input.set_attribute("multiple", "")?;
    file_input.set_attribute("accept", ".pdf,.docx,.txt")?;
    file_input.set_class_name("hidden");
    sidebar.append_child(&upload_area)?;
    sidebar.append_child(&file_input)?;

    // Documents
    let heading = element(document, "h3", None, Some("Documents"))?;
    sidebar.append_child(&heading)?;
    let count = element(document, "div", Some("document-count"), None)?;
    count.set_id("documentCount");
    let list = element(document, "div", Some("document-list"), None)?;
    list.set_id("documentList");
    sidebar.append_child(&count)?;
    sidebar.append_child(&list)?;

    // Settings
    let heading = element(document, "h3", None, Some("Settings"))?;
    sidebar.append_child(&heading)?;
    let settings = element(document, "div", Some("settings"), None)?;
    settings.set_id("settingsPanel");
    for key in SettingKey::ALL {
        let row = element(document, "div", Some("setting-item"), None)?;
        let label = element(document, "span", None, Some(key.label()))?;
        row.append_child(&label)?;
        let toggle = element(document, "div", Some("toggle-switch"), None)?;
        toggle.set_attribute("role", "switch")?;
        toggle.set_attribute("data-setting", key.attr())?;
        row.append_child(&toggle)?;
        settings.append_child(&row)?;
    }
    sidebar.append_child(&settings)?;

    // Actions
    let actions = element(document, "div", Some("actions"), None)?;
    for (id, label) in [
        ("exportBtn", "Export chat"),
        ("clearBtn", "Clear chat"),
        ("helpBtn", "Help"),
    ] {
        let btn = element(document, "button", Some("action-btn"), Some(label))?;
        btn.set_id(id);
        btn.set_attribute("type", "button")?;
        actions.append_child(&btn)?;
    }
    sidebar.append_child(&actions)?;

    Ok(sidebar)
}

fn create_chat_panel(document: &Document) -> Result<Element, JsValue> {
    let panel = element(document, "main", Some("chat-panel"), None)?;

    let welcome = element(
        document,
        "div",
        Some("welcome"),
        Some("Upload a document to start asking questions about it."),
    )?;
    welcome.set_id("welcomeMessage");
    panel.append_child(&welcome)?;

    let messages = element(document, "div", Some("chat-messages"), None)?;
    messages.set_id("chatMessages");
    panel.append_child(&messages)?;

    let form = element(document, "form", Some("chat-form"), None)?;
    form.set_id("chatForm");
    let input = document.create_element("textarea")?;
    input.set_id("chatInput");
    input.set_attribute("rows", "1")?;
    input.set_attribute("placeholder", PLACEHOLDER_NOT_READY)?;
    input.set_attribute("disabled", "")?;
    let send = element(document, "button", Some("send-btn"), Some("Send"))?;
    send.set_id("sendBtn");
    send.set_attribute("type", "submit")?;
    send.set_attribute("disabled", "")?;
    form.append_child(&input)?;
    form.append_child(&send)?;
    panel.append_child(&form)?;

    // Status bar
    let status_bar = element(document, "div", Some("status-bar"), None)?;
    let dot = element(document, "span", Some("status-dot"), None)?;
    dot.set_id("statusDot");
    let text = element(document, "span", Some("status-text"), Some("Ready"))?;
    text.set_id("statusText");
    let timing = element(document, "span", Some("response-time"), None)?;
    timing.set_id("responseTime");
    status_bar.append_child(&dot)?;
    status_bar.append_child(&text)?;
    status_bar.append_child(&timing)?;
    panel.append_child(&status_bar)?;

    Ok(panel)
}

// Structural rules only; theming belongs to the host page.
fn ensure_layout_styles(document: &Document) -> Result<(), JsValue> {
    if document.get_element_by_id("docqa-layout-styles").is_some() {
        return Ok(());
    }
    let css = "
.hidden{display:none!important}
.app{display:flex;height:100vh}
.sidebar{width:280px;overflow-y:auto}
.chat-panel{flex:1;display:flex;flex-direction:column;min-width:0}
.chat-messages{flex:1;overflow-y:auto}
.upload-area.dragover{outline:2px dashed currentColor}
.document-item.active{font-weight:600}
.status-dot{display:inline-block;width:8px;height:8px;border-radius:50%;background:#16a34a}
.status-dot.offline{background:#dc2626}
";
    let style = document.create_element("style")?;
    style.set_id("docqa-layout-styles");
    style.set_text_content(Some(css));
    match document.head() {
        Some(head) => head.append_child(&style)?,
        None => document
            .body()
            .ok_or(JsValue::from_str("No body found"))?
            .append_child(&style)?,
    };
    Ok(())
}
