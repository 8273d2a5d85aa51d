//! Blocking browser dialogs
//!
//! Stores take confirmations as plain closures; these are the browser
//! versions handed to them.

use organise_core::Error;

/// `window.confirm`; false when no window is available
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// `window.prompt`; `None` when cancelled
pub fn prompt(message: &str) -> Option<String> {
    web_sys::window()?.prompt_with_message(message).ok().flatten()
}

/// Show a widget error to the user
pub fn report(err: &Error) {
    log::warn!("[UI] {}", err);
    alert(err.user_message());
}

/// `window.prompt` with a pre-filled value
pub fn prompt_with_default(message: &str, default: &str) -> Option<String> {
    web_sys::window()?
        .prompt_with_message_and_default(message, default)
        .ok()
        .flatten()
}
