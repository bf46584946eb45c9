// ============================================================================
// SWEETALERT2 FFI - Foreign Function Interface para JavaScript
// ============================================================================
// Solo wrappers para funciones JS - Sin estado, sin lógica
// ============================================================================

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Swal, js_name = fire)]
    pub fn swal_fire(options: &JsValue) -> js_sys::Promise;

    #[wasm_bindgen(js_namespace = Swal, js_name = showLoading)]
    pub fn swal_show_loading();

    #[wasm_bindgen(js_namespace = Swal, js_name = close)]
    pub fn swal_close();
}

/// Helper: ¿está cargado `window.Swal`?
pub fn swal_available() -> bool {
    web_sys::window()
        .and_then(|window| js_sys::Reflect::get(&window, &JsValue::from_str("Swal")).ok())
        .map(|swal| !swal.is_undefined() && !swal.is_null())
        .unwrap_or(false)
}

/// Helper: leer `isConfirmed` del resultado de `Swal.fire`
pub fn is_confirmed(result: &JsValue) -> bool {
    js_sys::Reflect::get(result, &JsValue::from_str("isConfirmed"))
        .ok()
        .and_then(|value| value.as_bool())
        .unwrap_or(false)
}
