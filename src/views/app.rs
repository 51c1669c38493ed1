// ============================================================================
// APP VIEW - Composición de la página
// ============================================================================

use crate::dom::{append_child, ElementBuilder};
use crate::state::AppState;
use crate::views::{render_purchase_form, render_scanner};
use wasm_bindgen::prelude::*;
use web_sys::Element;

/// Renderizar la aplicación completa
pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?
        .class("app-container")
        .build();

    let title = ElementBuilder::new("h2")?
        .text("📦 Entrada de Compras por QR")
        .build();
    append_child(&container, &title)?;

    // El viewport del scanner está siempre presente; el arranque del decoder
    // se guarda solo (solo en estado inicial)
    let scanner_section = render_scanner(state)?;
    append_child(&container, &scanner_section)?;

    // El formulario aparece cuando hay un producto escaneado
    if state.form.has_product() {
        let form = render_purchase_form(state)?;
        append_child(&container, &form)?;
    }

    Ok(container)
}
