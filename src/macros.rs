//! Small crate-wide convenience macros.
//!
//! Logging goes straight to the browser console.  Outside of wasm32 (native
//! unit tests of the reducer layer) the macros still format their arguments but
//! never touch the JS bindings, which would panic on a non-wasm target.

/// `console.log` in debug builds only.
///
/// ```rust,ignore
/// debug_log!("queued {} files", files.len());
/// ```
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{
        let line = format!($($arg)*);
        if cfg!(all(debug_assertions, target_arch = "wasm32")) {
            web_sys::console::log_1(&line.into());
        }
    }};
}

/// `console.warn`, all build profiles.
#[macro_export]
macro_rules! warn_log {
    ($($arg:tt)*) => {{
        let line = format!($($arg)*);
        if cfg!(target_arch = "wasm32") {
            web_sys::console::warn_1(&line.into());
        }
    }};
}

/// `console.error`, all build profiles.
#[macro_export]
macro_rules! error_log {
    ($($arg:tt)*) => {{
        let line = format!($($arg)*);
        if cfg!(target_arch = "wasm32") {
            web_sys::console::error_1(&line.into());
        }
    }};
}
