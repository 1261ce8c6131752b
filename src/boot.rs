#[cfg(target_arch = "wasm32")]
use js_sys::Reflect;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{JsCast, JsValue};

use vetrom_gallery_core::GalleryConfig;

/// Global a host page may define before the module loads, either as a JSON
/// string or as a plain object.
#[cfg(target_arch = "wasm32")]
pub(crate) const CONFIG_GLOBAL: &str = "__VETROM_GALLERY";

#[cfg(target_arch = "wasm32")]
fn read_global() -> Option<JsValue> {
    let window = web_sys::window()?;
    let value = Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL)).ok()?;
    if value.is_null() || value.is_undefined() {
        return None;
    }
    Some(value)
}

#[cfg(target_arch = "wasm32")]
fn config_json(value: &JsValue) -> Option<String> {
    if let Some(text) = value.as_string() {
        return Some(text);
    }
    let object = value.dyn_ref::<js_sys::Object>()?;
    js_sys::JSON::stringify(object).ok()?.as_string()
}

pub(crate) fn parse_config(json: &str) -> Result<GalleryConfig, serde_json::Error> {
    serde_json::from_str(json)
}

/// Host configuration, or defaults when absent or malformed.
#[cfg(target_arch = "wasm32")]
pub(crate) fn load_config() -> GalleryConfig {
    let Some(value) = read_global() else {
        return GalleryConfig::default();
    };
    let Some(json) = config_json(&value) else {
        gloo::console::warn!(format!("{CONFIG_GLOBAL} is neither a string nor an object; using defaults"));
        return GalleryConfig::default();
    };
    match parse_config(&json) {
        Ok(config) => config,
        Err(err) => {
            gloo::console::warn!(format!("{CONFIG_GLOBAL} ignored: {err}"));
            GalleryConfig::default()
        }
    }
}
