// Tests de DOM: requieren navegador (wasm-pack test --headless --chrome)
#![cfg(target_arch = "wasm32")]

use qr_purchase_entry::dom::ElementBuilder;
use qr_purchase_entry::views::render_app;
use qr_purchase_entry::AppState;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn element_builder_sets_id_class_and_text() {
    let element = ElementBuilder::new("div")
        .unwrap()
        .id("probe")
        .unwrap()
        .class("probe-class")
        .text("hola")
        .build();

    assert_eq!(element.id(), "probe");
    assert_eq!(element.class_name(), "probe-class");
    assert_eq!(element.text_content().as_deref(), Some("hola"));
}

#[wasm_bindgen_test]
fn initial_render_mounts_viewport_without_form() {
    let state = AppState::new();
    // Marcar la sesión como arrancando para que el Timeout del view no
    // intente inicializar el decoder real (no hay cámara en el test)
    state.scanner.borrow_mut().begin_start().unwrap();

    let view = render_app(&state).unwrap();

    assert!(view.query_selector("#reader").unwrap().is_some());
    assert!(view.query_selector("#quantity-input").unwrap().is_none());
    assert!(view.query_selector("#submit-btn").unwrap().is_none());
}

#[wasm_bindgen_test]
fn render_after_scan_shows_purchase_form() {
    let state = AppState::new();
    state.form.set_product_id("SKU123");

    let view = render_app(&state).unwrap();

    let product = view.query_selector(".product-scanned").unwrap().unwrap();
    assert!(product.text_content().unwrap_or_default().contains("SKU123"));
    assert!(view.query_selector("#quantity-input").unwrap().is_some());
    assert!(view.query_selector("#price-input").unwrap().is_some());
    assert!(view.query_selector("#submit-btn").unwrap().is_some());
}
