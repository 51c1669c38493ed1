// ============================================================================
// QR PURCHASE ENTRY - FRONTEND MVVM ESTRICTO (RUST PURO)
// ============================================================================
// Arquitectura MVVM estricta:
// - Views: Funciones que renderizan DOM (sin lógica)
// - ViewModels: Lógica de negocio (handshake de envío al backend)
// - Services: SOLO comunicación API
// - Scanner: Ciclo de vida del decodificador QR (FFI + máquina de estados)
// - State: State Management con Rc<RefCell>
// ============================================================================

mod app;
mod config;
mod error;
mod models;
mod scanner;
mod services;
mod state;
mod viewmodels;

pub mod dom;
pub mod views;
pub mod utils;

pub use config::{AppConfig, ScannerConfig, CONFIG};
pub use error::{DecodeError, DraftError, SubmitError};
pub use models::{BillingRequest, BillingResponse, PurchaseDraft, QrPayload};
pub use scanner::{Html5Qrcode, ScannerPhase, ScannerSession, SessionError};
pub use services::BillingClient;
pub use state::{AppState, PurchaseFormState, ReactiveState, RenderScheduler};
pub use viewmodels::PurchaseViewModel;

use crate::app::App;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_logger::Config;

// Variable estática global para mantener la instancia de App
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Panic hook para mejor debugging
    console_error_panic_hook::set_once();

    // Inicializar logging (desactivable via ENABLE_LOGGING=false)
    if CONFIG.is_logging_enabled() {
        wasm_logger::init(Config::default());
    }
    log::info!("🚀 QR Purchase Entry - Rust Puro + MVVM");

    // Crear y renderizar app
    let mut app = App::new()?;
    app.render()?;

    let state = app.state().clone();

    // Guardar app en variable global
    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    // Teardown al salir de la página: detener el scanner si sigue activo.
    // Este listener global solo se registra UNA VEZ en init(), por lo que es seguro.
    if let Some(win) = web_sys::window() {
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_e: web_sys::Event| {
            log::info!("👋 [MAIN] pagehide recibido, liberando scanner...");
            scanner::stop_scanner(&state);
        }) as Box<dyn FnMut(web_sys::Event)>);

        win.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref())?;
        // closure.forget() es necesario para mantener el closure vivo en Rust WASM.
        closure.forget();
    }

    Ok(())
}

/// Re-renderizar la app completa (la llaman los subscribers de estado)
pub fn rerender_app() {
    APP.with(|app_cell| {
        if let Some(app) = app_cell.borrow_mut().as_mut() {
            if let Err(e) = app.render() {
                log::error!("❌ [MAIN] Error re-renderizando app: {:?}", e);
            }
        }
    });
}
