//! Runtime configuration
//!
//! An optional `window.SHOPPING_LIST_CONFIG` object overrides the defaults.

use list_store::ListConfig;
use wasm_bindgen::JsValue;

const CONFIG_GLOBAL: &str = "SHOPPING_LIST_CONFIG";

pub fn load_config() -> ListConfig {
    let Some(window) = web_sys::window() else {
        return ListConfig::default();
    };
    let raw = match js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL)) {
        Ok(raw) if !raw.is_undefined() && !raw.is_null() => raw,
        _ => return ListConfig::default(),
    };
    // Runs before the logger is installed
    serde_wasm_bindgen::from_value(raw).unwrap_or_else(|e| {
        web_sys::console::warn_1(&format!("[CONFIG] Ignoring {}: {}", CONFIG_GLOBAL, e).into());
        ListConfig::default()
    })
}
