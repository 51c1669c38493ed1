// ============================================================================
// SCANNER CONTROLLER - Secuenciación arranque / decode / parada
// ============================================================================
// Coordina la máquina de estados de sesión con el decoder FFI:
//   Idle → Starting → Running → (Decoded | Stopped | StartFailed) → Idle
// Los errores por frame son no fatales (solo log); el fallo de arranque se
// loguea como error; el fallo de parada se traga con un warning.
// ============================================================================

use crate::config::{ScannerConfig, CONFIG};
use crate::models::QrPayload;
use crate::scanner::html5_qrcode::Html5Qrcode;
use crate::state::AppState;
use crate::utils::notify;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};

/// Id del elemento viewport al que se liga el decoder
pub const SCANNER_VIEWPORT_ID: &str = "reader";

/// Arrancar una sesión de scanner ligada al viewport fijo.
/// Ignorado (con warning) si ya hay una sesión activa.
pub fn start_scanner(state: &AppState) {
    if let Err(e) = state.scanner.borrow_mut().begin_start() {
        log::warn!("⚠️ [SCANNER] Arranque ignorado: {}", e);
        return;
    }

    let camera = match camera_constraints() {
        Ok(v) => v,
        Err(e) => {
            log::error!("❌ [SCANNER] Error construyendo constraints: {:?}", e);
            state.scanner.borrow_mut().start_failed();
            return;
        }
    };
    let config = match scan_config(&CONFIG.scanner_config) {
        Ok(v) => v,
        Err(e) => {
            log::error!("❌ [SCANNER] Error construyendo config: {:?}", e);
            state.scanner.borrow_mut().start_failed();
            return;
        }
    };

    log::info!("📷 [SCANNER] Inicializando decodificador...");
    let decoder = Html5Qrcode::new(SCANNER_VIEWPORT_ID);

    // Canal decode-success: se entrega como mucho una vez por sesión
    let state_decoded = state.clone();
    let on_decode = Closure::wrap(Box::new(move |decoded: JsValue| {
        if let Some(text) = decoded.as_string() {
            handle_decoded(&state_decoded, &text);
        }
    }) as Box<dyn FnMut(JsValue)>);

    // Canal decode-error: "este frame no tenía código" y similares, no fatal
    let on_scan_error = Closure::wrap(Box::new(move |err: JsValue| {
        log::debug!("👀 [SCANNER] Frame sin código: {:?}", err);
    }) as Box<dyn FnMut(JsValue)>);

    let state_started = state.clone();
    spawn_local(async move {
        let promise = decoder.start(
            &camera,
            &config,
            on_decode.as_ref().unchecked_ref(),
            on_scan_error.as_ref().unchecked_ref(),
        );

        match JsFuture::from(promise).await {
            Ok(_) => {
                // Los closures deben vivir mientras el decoder siga activo
                on_decode.forget();
                on_scan_error.forget();

                match state_started.scanner.borrow_mut().confirm_started(decoder) {
                    Ok(()) => log::info!("✅ [SCANNER] Decodificador corriendo"),
                    Err(decoder) => {
                        // La sesión fue liberada durante el arranque (teardown):
                        // apagar el decoder recién creado en vez de filtrarlo
                        log::warn!("⚠️ [SCANNER] Sesión liberada durante el arranque, deteniendo");
                        teardown_decoder(decoder);
                    }
                }
            }
            Err(e) => {
                log::error!("❌ [SCANNER] Fallo arrancando el decodificador: {:?}", e);
                state_started.scanner.borrow_mut().start_failed();
            }
        }
    });
}

/// Detener y liberar la sesión activa, si la hay. Best-effort: el fallo de
/// parada se loguea como warning y no se propaga al caller.
pub fn stop_scanner(state: &AppState) {
    if let Some(decoder) = state.scanner.borrow_mut().release() {
        teardown_decoder(decoder);
    }
}

fn teardown_decoder(decoder: Html5Qrcode) {
    spawn_local(async move {
        match JsFuture::from(decoder.stop()).await {
            Ok(_) => {
                decoder.clear();
                log::info!("🛑 [SCANNER] Decodificador detenido y liberado");
            }
            Err(e) => {
                log::warn!("⚠️ [SCANNER] No se pudo detener el decoder: {:?}", e);
            }
        }
    });
}

/// Procesar un texto decodificado: parse → guardar producto → parar sesión.
/// Con formato inválido se avisa al usuario y la sesión sigue corriendo.
fn handle_decoded(state: &AppState, text: &str) {
    // El decoder puede disparar de nuevo antes de que stop() resuelva:
    // solo se procesa mientras la sesión siga corriendo
    if !state.scanner.borrow().is_running() {
        return;
    }

    match QrPayload::parse(text) {
        Ok(payload) => {
            log::info!("✅ [SCANNER] Producto escaneado: {}", payload.product_id);
            state.form.set_product_id(&payload.product_id);
            stop_scanner(state);
            state.notify_change();
        }
        Err(e) => {
            log::warn!("⚠️ [SCANNER] Payload inválido: {}", e);
            notify::alert("❌ Código QR con formato inválido.");
        }
    }
}

/// Constraint de cámara: preferir la trasera
fn camera_constraints() -> Result<JsValue, JsValue> {
    let constraint = js_sys::Object::new();
    js_sys::Reflect::set(
        &constraint,
        &JsValue::from_str("facingMode"),
        &JsValue::from_str("environment"),
    )?;
    Ok(constraint.into())
}

/// Config de escaneo: fps y región cuadrada de decodificación
fn scan_config(config: &ScannerConfig) -> Result<JsValue, JsValue> {
    let qrbox = js_sys::Object::new();
    js_sys::Reflect::set(
        &qrbox,
        &JsValue::from_str("width"),
        &JsValue::from_f64(config.qrbox_size as f64),
    )?;
    js_sys::Reflect::set(
        &qrbox,
        &JsValue::from_str("height"),
        &JsValue::from_f64(config.qrbox_size as f64),
    )?;

    let scan = js_sys::Object::new();
    js_sys::Reflect::set(
        &scan,
        &JsValue::from_str("fps"),
        &JsValue::from_f64(config.fps as f64),
    )?;
    js_sys::Reflect::set(&scan, &JsValue::from_str("qrbox"), &qrbox)?;
    Ok(scan.into())
}
