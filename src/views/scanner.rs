// ============================================================================
// SCANNER VIEW - Viewport del decodificador QR
// ============================================================================

use crate::config::CONFIG;
use crate::dom::{append_child, ElementBuilder};
use crate::scanner::{self, SCANNER_VIEWPORT_ID};
use crate::state::AppState;
use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::Element;

/// Renderizar el viewport del scanner y programar el arranque del decoder.
/// El arranque se difiere para que el viewport ya esté montado en el DOM.
pub fn render_scanner(state: &AppState) -> Result<Element, JsValue> {
    let section = ElementBuilder::new("div")?
        .class("scanner-section")
        .build();

    // El id debe coincidir con el que se le pasa al decoder
    let viewport = ElementBuilder::new("div")?
        .id(SCANNER_VIEWPORT_ID)?
        .class("scanner-viewport")
        .build();
    append_child(&section, &viewport)?;

    let state_clone = state.clone();
    Timeout::new(CONFIG.scanner_config.init_delay_ms, move || {
        // Solo en estado inicial: sin producto escaneado y sin sesión activa.
        // El guard de begin_start() protege contra dobles arranques de todas
        // formas, pero aquí evitamos el warning en re-renders normales.
        if !state_clone.form.has_product() && state_clone.scanner.borrow().is_idle() {
            scanner::start_scanner(&state_clone);
        }
    })
    .forget();

    Ok(section)
}
