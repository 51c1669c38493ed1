// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================
// Un solo recurso externo (la sesión del scanner) y el borrador de compra,
// ambos confinados a este componente. Los clones comparten TODO via Rc,
// incluidos los subscribers de cambios.
// ============================================================================

use crate::error::SubmitError;
use crate::models::BillingResponse;
use crate::scanner::{Html5Qrcode, ScannerSession};
use crate::state::form_state::PurchaseFormState;
use crate::state::reactivity::ReactiveState;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone)]
pub struct AppState {
    pub form: PurchaseFormState,
    pub scanner: Rc<RefCell<ScannerSession<Html5Qrcode>>>,
    changes: Rc<ReactiveState<u64>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            form: PurchaseFormState::new(),
            scanner: Rc::new(RefCell::new(ScannerSession::new())),
            changes: Rc::new(ReactiveState::new(0)),
        }
    }

    /// Suscribirse a cambios de estado (re-render)
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.changes.subscribe(callback);
    }

    /// Notificar que el estado cambió
    pub fn notify_change(&self) {
        self.changes.update(|version| *version += 1);
    }

    /// Aplicar el resultado del envío al estado del formulario.
    /// Éxito: los tres campos quedan vacíos y se notifica un re-render, que
    /// reinicia el scanner. Fallo: el borrador se conserva intacto para
    /// reintentar sin re-escanear.
    pub fn apply_submit_outcome(&self, outcome: &Result<BillingResponse, SubmitError>) {
        self.form.set_submitting(false);
        if outcome.is_ok() {
            self.form.clear_draft();
            self.notify_change();
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notifications_reach_subscribers_through_clones() {
        let state = AppState::new();
        let fired = Rc::new(RefCell::new(0u32));

        let fired_clone = fired.clone();
        state.subscribe_to_changes(move || {
            *fired_clone.borrow_mut() += 1;
        });

        // Un clone (como los que capturan los closures de la UI) debe
        // alcanzar a los subscribers registrados en la instancia base
        let clone = state.clone();
        clone.notify_change();
        clone.notify_change();

        assert_eq!(*fired.borrow(), 2);
    }

    #[test]
    fn fresh_state_has_empty_draft_and_idle_scanner() {
        let state = AppState::new();
        assert!(!state.form.has_product());
        assert!(state.scanner.borrow().is_idle());
    }

    fn filled_state() -> AppState {
        let state = AppState::new();
        state.form.set_product_id("SKU123");
        state.form.set_quantity("4");
        state.form.set_selling_price("9.99");
        state.form.set_submitting(true);
        state
    }

    fn count_rerenders(state: &AppState) -> Rc<RefCell<u32>> {
        let rerenders = Rc::new(RefCell::new(0u32));
        let rerenders_clone = rerenders.clone();
        state.subscribe_to_changes(move || {
            *rerenders_clone.borrow_mut() += 1;
        });
        rerenders
    }

    #[test]
    fn successful_submission_empties_fields_and_requests_rescan() {
        let state = filled_state();
        let rerenders = count_rerenders(&state);

        state.apply_submit_outcome(&Ok(BillingResponse {
            success: true,
            message: None,
        }));

        let draft = state.form.get_draft();
        assert!(draft.product_id.is_empty());
        assert!(draft.quantity.is_empty());
        assert!(draft.selling_price.is_empty());
        assert!(!state.form.is_submitting());
        // El re-render notificado es el que vuelve a arrancar el scanner
        assert_eq!(*rerenders.borrow(), 1);
    }

    #[test]
    fn failed_submission_retains_fields_for_every_error_class() {
        let errors = [
            SubmitError::Network("timeout".to_string()),
            SubmitError::Http {
                status: 500,
                message: "Internal Server Error".to_string(),
            },
            SubmitError::Parse("eof".to_string()),
            SubmitError::Rejected("stock insuficiente".to_string()),
        ];

        for error in errors {
            let state = filled_state();
            let rerenders = count_rerenders(&state);

            state.apply_submit_outcome(&Err(error));

            let draft = state.form.get_draft();
            assert_eq!(draft.product_id, "SKU123");
            assert_eq!(draft.quantity, "4");
            assert_eq!(draft.selling_price, "9.99");
            assert!(!state.form.is_submitting());
            // Sin re-render: el formulario queda tal cual para reintentar
            assert_eq!(*rerenders.borrow(), 0);
        }
    }
}
