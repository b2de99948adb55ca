//! Tauri Command Wrappers
//!
//! Frontend bindings to backend commands, organized by domain.

mod note;
mod content;

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"])]
    async fn invoke(cmd: &str, args: JsValue) -> JsValue;
}

/// Whether the page runs inside a Tauri webview (`window.__TAURI__` is set)
pub fn is_tauri() -> bool {
    web_sys::window()
        .and_then(|win| js_sys::Reflect::get(&win, &JsValue::from_str("__TAURI__")).ok())
        .map(|value| !value.is_undefined() && !value.is_null())
        .unwrap_or(false)
}

// Re-export all public items
pub use note::*;
pub use content::*;
