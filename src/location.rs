//! Page URL and document attributes
//!
//! The open gift event travels in the `?id=` query so the link can be
//! shared; the checklist type may be preset with `data-checklist` on `<body>`.

use percent_encoding::{percent_decode_str, utf8_percent_encode, NON_ALPHANUMERIC};

/// Decoded value of a query parameter
pub fn query_param(name: &str) -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    parse_query(&search, name)
}

fn parse_query(search: &str, name: &str) -> Option<String> {
    search
        .trim_start_matches('?')
        .split('&')
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| percent_decode_str(&value.replace('+', " ")).decode_utf8_lossy().into_owned())
        .filter(|value| !value.is_empty())
}

/// Replace the query with `?name=value` without reloading
pub fn push_query_param(name: &str, value: &str) {
    push_query(&format!("?{}={}", name, utf8_percent_encode(value, NON_ALPHANUMERIC)));
}

/// Drop the query without reloading
pub fn clear_query() {
    push_query("");
}

fn push_query(query: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(path) = window.location().pathname() else {
        return;
    };
    let url = format!("{}{}", path, query);
    if let Ok(history) = window.history() {
        if let Err(e) = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&url)) {
            log::warn!("[APP] pushState failed: {:?}", e);
        }
    }
}

/// Full link to the current page, query included
pub fn current_href() -> Option<String> {
    web_sys::window()?.location().href().ok()
}

/// `data-<name>` attribute of `<body>`
pub fn body_data(name: &str) -> Option<String> {
    web_sys::window()?
        .document()?
        .body()?
        .get_attribute(&format!("data-{}", name))
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_query() {
        assert_eq!(parse_query("?id=ab12cd34", "id").as_deref(), Some("ab12cd34"));
        assert_eq!(parse_query("?x=1&id=a%20b", "id").as_deref(), Some("a b"));
        assert_eq!(parse_query("?id=", "id"), None);
        assert_eq!(parse_query("", "id"), None);
        assert_eq!(parse_query("?other=1", "id"), None);
    }
}
