//! localStorage adapter

use list_store::repository::{KeyValueStore, StorageError, StorageResult};
use wasm_bindgen::JsValue;

/// `window.localStorage`, looked up on every call.
///
/// Holds no JS handle, so it can live inside a reactive signal.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local_storage() -> StorageResult<web_sys::Storage> {
        web_sys::window()
            .ok_or(StorageError::Unavailable)?
            .local_storage()
            .map_err(js_error)?
            .ok_or(StorageError::Unavailable)
    }
}

fn js_error(e: JsValue) -> StorageError {
    StorageError::Backend(format!("{:?}", e))
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Self::local_storage()?.get_item(key).map_err(js_error)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        Self::local_storage()?.set_item(key, value).map_err(js_error)
    }

    fn delete(&self, key: &str) -> StorageResult<()> {
        Self::local_storage()?.remove_item(key).map_err(js_error)
    }
}
