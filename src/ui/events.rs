//! DOM event wiring.  Handlers translate browser events into `Message`s and
//! hand them to `App::dispatch`; they hold no state of their own.

use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, DragEvent, Element, Event, EventTarget, FileList, HtmlElement, HtmlInputElement,
    HtmlTextAreaElement, KeyboardEvent, VisibilityState,
};

use crate::app::App;
use crate::dom_utils::by_id;
use crate::messages::Message;
use crate::models::{DocumentId, PendingFile, SettingKey};

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Entry point – call once after the base UI exists.
pub fn setup_event_handlers(app: &Rc<App>, document: &Document) -> Result<(), JsValue> {
    setup_upload_handlers(app, document)?;
    setup_composer_handlers(app, document)?;
    setup_document_list_handler(app, document)?;
    setup_settings_handler(app, document)?;
    setup_action_buttons(app, document)?;
    setup_global_shortcuts(app, document)?;
    setup_visibility_handler(app, document)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let cb = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    // Listeners live as long as the page.
    cb.forget();
    Ok(())
}

fn files_from_list(list: Option<FileList>) -> Vec<PendingFile> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(PendingFile::from_browser_file)
        .collect()
}

fn target_element(event: &Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}

fn closest(event: &Event, selector: &str) -> Option<Element> {
    target_element(event)?.closest(selector).ok().flatten()
}

fn open_file_picker(document: &Document) {
    if let Some(input) = document
        .get_element_by_id("fileInput")
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    {
        input.click();
    }
}

// ---------------------------------------------------------------------------
// Individual handlers
// ---------------------------------------------------------------------------

/// Upload area (click / drag & drop) and the hidden file picker.
fn setup_upload_handlers(app: &Rc<App>, document: &Document) -> Result<(), JsValue> {
    let area = by_id(document, "uploadArea")?;

    {
        let document = document.clone();
        listen(&area, "click", move |_e| open_file_picker(&document))?;
    }

    listen(&area, "dragover", {
        let area = area.clone();
        move |e: Event| {
            e.prevent_default();
            let _ = area.class_list().add_1("dragover");
        }
    })?;

    listen(&area, "dragleave", {
        let area = area.clone();
        move |e: Event| {
            e.prevent_default();
            let _ = area.class_list().remove_1("dragover");
        }
    })?;

    listen(&area, "drop", {
        let area = area.clone();
        let app = Rc::clone(app);
        move |e: Event| {
            e.prevent_default();
            let _ = area.class_list().remove_1("dragover");
            let files = e
                .dyn_ref::<DragEvent>()
                .and_then(|d| d.data_transfer())
                .map(|dt| files_from_list(dt.files()))
                .unwrap_or_default();
            if !files.is_empty() {
                app.dispatch(Message::FilesSelected(files));
            }
        }
    })?;

    let input: HtmlInputElement = by_id(document, "fileInput")?.dyn_into()?;
    listen(&input, "change", {
        let input = input.clone();
        let app = Rc::clone(app);
        move |_e| {
            let files = files_from_list(input.files());
            // Reset so picking the same file again fires `change`.
            input.set_value("");
            if !files.is_empty() {
                app.dispatch(Message::FilesSelected(files));
            }
        }
    })?;

    Ok(())
}

/// Question textarea and the chat form.
fn setup_composer_handlers(app: &Rc<App>, document: &Document) -> Result<(), JsValue> {
    let input: HtmlTextAreaElement = by_id(document, "chatInput")?.dyn_into()?;

    listen(&input, "input", {
        let input = input.clone();
        let app = Rc::clone(app);
        move |_e| {
            let style = input.style();
            let _ = style.set_property("height", "auto");
            let height = input.scroll_height().min(120);
            let _ = style.set_property("height", &format!("{}px", height));
            app.dispatch(Message::UpdateQuestionInput(input.value()));
        }
    })?;

    listen(&input, "keydown", {
        let app = Rc::clone(app);
        move |e: Event| {
            if let Some(key) = e.dyn_ref::<KeyboardEvent>() {
                if key.key() == "Enter" && !key.shift_key() && !key.ctrl_key() && !key.meta_key() {
                    e.prevent_default();
                    app.dispatch(Message::SubmitQuestion);
                }
            }
        }
    })?;

    let form = by_id(document, "chatForm")?;
    listen(&form, "submit", {
        let app = Rc::clone(app);
        move |e: Event| {
            e.prevent_default();
            app.dispatch(Message::SubmitQuestion);
        }
    })?;

    Ok(())
}

/// One delegated listener for select / remove on document rows.
fn setup_document_list_handler(app: &Rc<App>, document: &Document) -> Result<(), JsValue> {
    let list = by_id(document, "documentList")?;
    let app = Rc::clone(app);
    listen(&list, "click", move |e: Event| {
        let doc_id =
            |el: &Element| el.get_attribute("data-doc-id").and_then(|raw| DocumentId::parse(&raw));

        if let Some(id) = closest(&e, ".doc-remove").as_ref().and_then(doc_id) {
            e.stop_propagation();
            app.dispatch(Message::RemoveDocument(id));
        } else if let Some(id) = closest(&e, ".document-item").as_ref().and_then(doc_id) {
            app.dispatch(Message::SelectDocument(id));
        }
    })
}

fn setup_settings_handler(app: &Rc<App>, document: &Document) -> Result<(), JsValue> {
    let Some(panel) = document.get_element_by_id("settingsPanel") else {
        return Ok(());
    };
    let app = Rc::clone(app);
    listen(&panel, "click", move |e: Event| {
        let key = closest(&e, "[data-setting]")
            .and_then(|el| el.get_attribute("data-setting"))
            .and_then(|raw| SettingKey::from_attr(&raw));
        if let Some(key) = key {
            app.dispatch(Message::ToggleSetting(key));
        }
    })
}

fn setup_action_buttons(app: &Rc<App>, document: &Document) -> Result<(), JsValue> {
    for (id, msg) in [
        ("exportBtn", Message::ExportChat),
        ("clearBtn", Message::ClearChat),
        ("helpBtn", Message::ShowHelp),
    ] {
        if let Some(btn) = document.get_element_by_id(id) {
            let app = Rc::clone(app);
            listen(&btn, "click", move |_e| app.dispatch(msg.clone()))?;
        }
    }
    Ok(())
}

/// Ctrl/Cmd+Enter send, Ctrl/Cmd+L clear, Ctrl/Cmd+U upload, Escape dismiss.
fn setup_global_shortcuts(app: &Rc<App>, document: &Document) -> Result<(), JsValue> {
    let app = Rc::clone(app);
    let doc = document.clone();
    listen(document, "keydown", move |e: Event| {
        let Some(key) = e.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        let modifier = key.ctrl_key() || key.meta_key();
        match key.key().as_str() {
            // Plain Enter inside the textarea is handled there already.
            "Enter" if modifier => app.dispatch(Message::SubmitQuestion),
            "l" | "L" if modifier => {
                e.prevent_default();
                app.dispatch(Message::ClearChat);
            }
            "u" | "U" if modifier => {
                e.prevent_default();
                open_file_picker(&doc);
            }
            "Escape" => app.dispatch(Message::DismissNotification),
            _ => {}
        }
    })
}

fn setup_visibility_handler(app: &Rc<App>, document: &Document) -> Result<(), JsValue> {
    let app = Rc::clone(app);
    let doc = document.clone();
    listen(document, "visibilitychange", move |_e| {
        if doc.visibility_state() == VisibilityState::Visible {
            app.dispatch(Message::PageVisible);
        }
    })
}
