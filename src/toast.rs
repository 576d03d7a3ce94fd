//! Single-slot notification.
//! Renders `AppState::notification` into one `#notification` element; the
//! dismissal timer lives in the scheduler, so this module only reflects state.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::state::{Notification, NotificationKind};

pub fn render(document: &Document, notification: Option<&Notification>) -> Result<(), JsValue> {
    ensure_styles(document)?;
    let root = ensure_root(document)?;

    match notification {
        Some(n) => {
            let kind = match n.kind {
                NotificationKind::Success => "success",
                NotificationKind::Error => "error",
                NotificationKind::Info => "info",
            };
            root.set_class_name(&format!("notification {} show", kind));
            root.set_text_content(Some(&n.text));
        }
        None => {
            let _ = root.class_list().remove_1("show");
        }
    }
    Ok(())
}

fn ensure_root(document: &Document) -> Result<Element, JsValue> {
    if let Some(el) = document.get_element_by_id("notification") {
        return Ok(el);
    }
    let root = document.create_element("div")?;
    root.set_id("notification");
    root.set_class_name("notification");
    root.set_attribute("role", "status")?;
    document
        .body()
        .ok_or_else(|| JsValue::from_str("No body found"))?
        .append_child(&root)?;
    Ok(root)
}

fn ensure_styles(document: &Document) -> Result<(), JsValue> {
    if document.get_element_by_id("notification-styles").is_some() {
        return Ok(());
    }

    let css = "
.notification{position:fixed;top:16px;right:16px;padding:10px 16px;border-radius:4px;color:#fff;z-index:9999;opacity:0;pointer-events:none;transition:opacity .2s}
.notification.show{opacity:1}
.notification.success{background:#16a34a}
.notification.error{background:#dc2626}
.notification.info{background:#2563eb}
";

    let style = document.create_element("style")?;
    style.set_id("notification-styles");
    style.set_text_content(Some(css));
    match document.head() {
        Some(head) => head.append_child(&style)?,
        None => document
            .body()
            .ok_or_else(|| JsValue::from_str("No body found"))?
            .append_child(&style)?,
    };
    Ok(())
}
