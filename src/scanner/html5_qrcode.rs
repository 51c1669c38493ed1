// ============================================================================
// HTML5-QRCODE FFI - Foreign Function Interface para JavaScript
// ============================================================================
// Bindings a la clase Html5Qrcode de la librería html5-qrcode (cargada via
// <script> en index.html) - Sin estado, sin lógica
// ============================================================================

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Decodificador continuo de QR sobre un feed de cámara
    #[wasm_bindgen(js_name = Html5Qrcode)]
    pub type Html5Qrcode;

    /// Construye un decoder ligado al elemento con ese id
    #[wasm_bindgen(constructor, js_class = "Html5Qrcode")]
    pub fn new(element_id: &str) -> Html5Qrcode;

    /// start(cameraConstraint, config, onDecodeSuccess, onDecodeError) -> Promise
    #[wasm_bindgen(method, js_class = "Html5Qrcode")]
    pub fn start(
        this: &Html5Qrcode,
        camera_constraint: &JsValue,
        scan_config: &JsValue,
        on_decode_success: &js_sys::Function,
        on_decode_error: &js_sys::Function,
    ) -> js_sys::Promise;

    /// stop() -> Promise (rechaza si la sesión ya fue destruida)
    #[wasm_bindgen(method, js_class = "Html5Qrcode")]
    pub fn stop(this: &Html5Qrcode) -> js_sys::Promise;

    /// Limpia el viewport tras stop()
    #[wasm_bindgen(method, js_class = "Html5Qrcode")]
    pub fn clear(this: &Html5Qrcode);
}
