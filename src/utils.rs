//! Utility helpers shared across the WASM frontend.

use chrono::{DateTime, Local, Utc};
use unicode_segmentation::UnicodeSegmentation;
use wasm_bindgen::{JsCast, JsValue};

/// Human readable size, e.g. `"0 Bytes"`, `"1.5 KB"`, `"2.25 MB"`.
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    let rounded = (value * 100.0).round() / 100.0;
    format!("{} {}", rounded, UNITS[unit])
}

/// Local wall-clock time as `HH:MM AM`.
pub fn format_clock_time(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%I:%M %p").to_string()
}

/// Shorten `text` to at most `max` grapheme clusters, ending in an ellipsis
/// when cut.
pub fn truncate_graphemes(text: &str, max: usize) -> String {
    let graphemes: Vec<&str> = text.graphemes(true).collect();
    if graphemes.len() <= max {
        return text.to_string();
    }
    let keep = max.saturating_sub(1);
    let mut out: String = graphemes[..keep].concat();
    out.push('…');
    out
}

pub fn document_count_label(count: usize) -> String {
    match count {
        0 => "No documents uploaded".to_string(),
        1 => "1 document uploaded".to_string(),
        n => format!("{} documents uploaded", n),
    }
}

/// Return the current timestamp in **milliseconds** since UNIX epoch.
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// Best-effort text for a thrown JS value: `Error.message`, a plain string,
/// or the debug form.
pub fn describe_js_error(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    if let Some(text) = value.as_string() {
        return text;
    }
    format!("{:?}", value)
}

// wasm-bindgen tests ----------------------------------------------------------
