//! Browser Local Storage
//!
//! `KeyValueStorage` backed by `window.localStorage`. The handle is looked
//! up on every call, so the type itself carries no JS objects.

use organise_core::storage::KeyValueStorage;
use organise_core::{Error, Result};
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Copy, Default)]
pub struct WebStorage;

fn js_error(err: JsValue) -> Error {
    Error::Storage(format!("{:?}", err))
}

impl WebStorage {
    fn local(&self) -> Result<web_sys::Storage> {
        web_sys::window()
            .ok_or_else(|| Error::Storage("no window".to_string()))?
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| Error::Storage("localStorage unavailable".to_string()))
    }
}

impl KeyValueStorage for WebStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.local()?.get_item(key).map_err(js_error)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.local()?.set_item(key, value).map_err(js_error)
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.local()?.remove_item(key).map_err(js_error)
    }

}
