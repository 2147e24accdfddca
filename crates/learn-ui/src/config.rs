//! Page configuration lookup
//!
//! A page can override the defaults before the module loads:
//!
//! ```html
//! <script>
//!   window.__LEARN_CONFIG__ = { storage_key: "docs-progress", status_clear_ms: 1500 };
//! </script>
//! ```

use learn_core::{Error, LearnConfig, Result};
use wasm_bindgen::JsValue;
use web_sys::Window;

/// Global the page sets to override configuration.
pub const CONFIG_GLOBAL: &str = "__LEARN_CONFIG__";

/// Decode a configuration object handed over from JS.
///
/// # Errors
///
/// Returns [`Error::InvalidConfig`] if the value does not have the expected
/// shape or fails validation.
pub fn config_from_js(value: JsValue) -> Result<LearnConfig> {
    serde_wasm_bindgen::from_value::<LearnConfig>(value)
        .map_err(|e| Error::invalid_config(e.to_string()))
        .and_then(LearnConfig::validated)
}

/// Configuration for `window`: the page override when present, defaults
/// when the page sets none or there is no window.
///
/// # Errors
///
/// Returns [`Error::InvalidConfig`] if the page sets an override that does not
/// decode. Callers fall back to defaults.
pub fn page_config(window: Option<&Window>) -> Result<LearnConfig> {
    let Some(window) = window else {
        return Ok(LearnConfig::default());
    };

    match js_sys::Reflect::get(window, &JsValue::from_str(CONFIG_GLOBAL)) {
        Ok(value) if !value.is_undefined() && !value.is_null() => config_from_js(value),
        _ => Ok(LearnConfig::default()),
    }
}
