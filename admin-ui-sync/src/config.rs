//! Page-supplied overrides for [`SyncConfig`].

use crate::error::{Error, Result};
use admin_ui_core::SyncConfig;
use js_sys::Reflect;
use wasm_bindgen::JsValue;

/// Global the page may define before the module loads
pub const CONFIG_GLOBAL: &str = "adminUiConfig";

/// Read `window.adminUiConfig`; defaults when it is not defined.
pub fn load() -> Result<SyncConfig> {
    let window = web_sys::window().ok_or(Error::NoWindow)?;
    let value = Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL)).map_err(Error::dom)?;
    if value.is_undefined() || value.is_null() {
        return Ok(SyncConfig::default());
    }
    Ok(serde_wasm_bindgen::from_value(value)?)
}
