// ============================================================================
// APP - Aplicación principal
// ============================================================================

use crate::dom::{append_child, get_element_by_id, set_inner_html};
use crate::state::{AppState, RenderScheduler};
use crate::views::render_app;
use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::Element;

/// Aplicación principal: estado global + elemento raíz
pub struct App {
    state: AppState,
    root: Option<Element>,
}

impl App {
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let state = AppState::new();

        // Re-render automático en cambios de estado. El scheduler agrupa
        // múltiples notificaciones del mismo tick en un solo Timeout(0).
        let scheduler = RenderScheduler::new();
        state.subscribe_to_changes(move || {
            if !scheduler.try_schedule() {
                return;
            }
            let scheduler = scheduler.clone();
            Timeout::new(0, move || {
                scheduler.complete();
                crate::rerender_app();
            })
            .forget();
        });

        Ok(Self {
            state,
            root: Some(root),
        })
    }

    /// Renderizar aplicación (re-render completo)
    pub fn render(&mut self) -> Result<(), JsValue> {
        if let Some(root) = &self.root {
            // Limpiar contenido anterior
            set_inner_html(root, "");

            let app_view = render_app(&self.state)?;
            append_child(root, &app_view)?;
        }
        Ok(())
    }

    /// Obtener referencia al estado
    pub fn state(&self) -> &AppState {
        &self.state
    }
}
