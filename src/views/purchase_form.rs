// ============================================================================
// PURCHASE FORM VIEW - Producto escaneado + cantidad + precio + submit
// ============================================================================

use crate::dom::{append_child, on_click, on_input, ElementBuilder};
use crate::state::AppState;
use crate::utils::notify;
use crate::viewmodels::purchase_viewmodel::{submit_failure_message, PurchaseViewModel};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlInputElement, InputEvent};

/// Renderizar el formulario de compra (visible tras un escaneo exitoso)
pub fn render_purchase_form(state: &AppState) -> Result<Element, JsValue> {
    let draft = state.form.get_draft();

    let form = ElementBuilder::new("div")?
        .class("purchase-form")
        .build();

    // Producto escaneado
    let product_row = ElementBuilder::new("p")?
        .class("product-scanned")
        .text("✅ Producto escaneado: ")
        .build();
    let product_label = ElementBuilder::new("strong")?
        .text(&draft.product_id)
        .build();
    append_child(&product_row, &product_label)?;
    append_child(&form, &product_row)?;

    // Input cantidad
    let quantity_input = ElementBuilder::new("input")?
        .id("quantity-input")?
        .attr("type", "number")?
        .attr("min", "1")?
        .attr("step", "1")?
        .attr("placeholder", "Cantidad")?
        .attr("value", &draft.quantity)?
        .build();
    {
        let form_state = state.form.clone();
        on_input(&quantity_input, move |event: InputEvent| {
            if let Some(value) = input_value(&event) {
                // Sin notify: los inputs no fuerzan re-render
                form_state.set_quantity(&value);
            }
        })?;
    }
    append_child(&form, &quantity_input)?;

    // Input precio de venta
    let price_input = ElementBuilder::new("input")?
        .id("price-input")?
        .attr("type", "number")?
        .attr("min", "0")?
        .attr("step", "0.01")?
        .attr("placeholder", "Precio de venta")?
        .attr("value", &draft.selling_price)?
        .build();
    {
        let form_state = state.form.clone();
        on_input(&price_input, move |event: InputEvent| {
            if let Some(value) = input_value(&event) {
                form_state.set_selling_price(&value);
            }
        })?;
    }
    append_child(&form, &price_input)?;

    // Botón submit
    let submit_btn = ElementBuilder::new("button")?
        .id("submit-btn")?
        .class("btn-submit")
        .text("Registrar compra")
        .build();
    {
        let state_clone = state.clone();
        on_click(&submit_btn, move |_| {
            handle_submit_click(&state_clone);
        })?;
    }
    append_child(&form, &submit_btn)?;

    Ok(form)
}

/// Handshake de envío: validar → POST → limpiar y reescanear, o conservar
/// el borrador para reintentar sin re-escanear.
fn handle_submit_click(state: &AppState) {
    if state.form.is_submitting() {
        log::warn!("⚠️ [FORM] Envío ya en vuelo, ignorado");
        return;
    }

    // Validación antes de cualquier request de red
    let request = match state.form.get_draft().to_request() {
        Ok(request) => request,
        Err(e) => {
            log::warn!("⚠️ [FORM] Borrador inválido: {}", e);
            notify::alert(&format!("⚠️ {}", e));
            return;
        }
    };

    state.form.set_submitting(true);

    let state_clone = state.clone();
    spawn_local(async move {
        let viewmodel = PurchaseViewModel::new();
        let outcome = viewmodel.submit_purchase(&request).await;

        match &outcome {
            Ok(_) => {
                log::info!("✅ [FORM] Compra registrada: {}", request.product_id);
                notify::alert("✅ Compra registrada correctamente.");
            }
            Err(e) => {
                log::error!("❌ [FORM] Error enviando compra: {}", e);
                notify::alert(&submit_failure_message(e));
            }
        }

        // Éxito: limpia y reinicia el scanner; fallo: conserva el borrador
        state_clone.apply_submit_outcome(&outcome);
    });
}

fn input_value(event: &InputEvent) -> Option<String> {
    event
        .target()?
        .dyn_into::<HtmlInputElement>()
        .ok()
        .map(|input| input.value())
}
