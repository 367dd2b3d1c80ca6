use leptos::prelude::window;
use wasm_bindgen::JsValue;

pub(crate) fn current_path() -> String {
    window()
        .location()
        .pathname()
        .unwrap_or_else(|_| "/".to_string())
}

pub(crate) fn push_path(path: &str) -> Result<(), String> {
    window()
        .history()
        .map_err(|_| "history is not available".to_string())?
        .push_state_with_url(&JsValue::NULL, "", Some(path))
        .map_err(|_| format!("failed to navigate to {path}"))
}
