use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

#[macro_use]
mod macros;

pub mod app;
pub mod command_executors;
pub mod constants;
pub mod dom_utils;
pub mod export;
pub mod messages;
pub mod models;
pub mod network;
pub mod reducers;
pub mod scheduler;
pub mod state;
pub mod storage;
pub mod toast;
pub mod ui;
pub mod update;
pub mod utils;
pub mod views;

#[cfg(test)]
mod tests;

use app::App;
use network::ApiConfig;

thread_local! {
    // Owner slot for the running session so `shutdown` can tear it down.
    static APP: RefCell<Option<Rc<App>>> = RefCell::new(None);
}

// Main entry point for the WASM application
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Initialize better panic messages
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global `window` exists"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("should have a document on window"))?;

    ui::setup::create_base_ui(&document)?;

    let config = ApiConfig::new();
    debug_log!("Q&A service base: {:?}", config.base_url());

    let app = App::new(document.clone(), config);
    ui::events::setup_event_handlers(&app, &document)?;
    app.start();

    APP.with(|slot| {
        if let Some(previous) = slot.replace(Some(app)) {
            previous.teardown();
        }
    });

    Ok(())
}

/// Cancel the session's timers and release it.
#[wasm_bindgen]
pub fn shutdown() {
    APP.with(|slot| {
        if let Some(app) = slot.borrow_mut().take() {
            app.teardown();
        }
    });
}
