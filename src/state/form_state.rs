// ============================================================================
// FORM STATE - Estado del borrador de compra
// ============================================================================

use crate::models::PurchaseDraft;
use std::cell::RefCell;
use std::rc::Rc;

/// Estado del formulario de compra
#[derive(Clone)]
pub struct PurchaseFormState {
    pub draft: Rc<RefCell<PurchaseDraft>>,
    pub submitting: Rc<RefCell<bool>>,
}

impl PurchaseFormState {
    pub fn new() -> Self {
        Self {
            draft: Rc::new(RefCell::new(PurchaseDraft::new())),
            submitting: Rc::new(RefCell::new(false)),
        }
    }

    pub fn get_draft(&self) -> PurchaseDraft {
        self.draft.borrow().clone()
    }

    pub fn set_product_id(&self, product_id: &str) {
        self.draft.borrow_mut().product_id = product_id.to_string();
    }

    pub fn set_quantity(&self, quantity: &str) {
        self.draft.borrow_mut().quantity = quantity.to_string();
    }

    pub fn set_selling_price(&self, selling_price: &str) {
        self.draft.borrow_mut().selling_price = selling_price.to_string();
    }

    pub fn has_product(&self) -> bool {
        !self.draft.borrow().product_id.trim().is_empty()
    }

    /// Vaciar los tres campos (tras un envío exitoso)
    pub fn clear_draft(&self) {
        self.draft.borrow_mut().clear();
    }

    pub fn is_submitting(&self) -> bool {
        *self.submitting.borrow()
    }

    pub fn set_submitting(&self, submitting: bool) {
        *self.submitting.borrow_mut() = submitting;
    }
}

impl Default for PurchaseFormState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_same_draft() {
        let form = PurchaseFormState::new();
        let clone = form.clone();

        clone.set_product_id("SKU123");
        clone.set_quantity("4");
        clone.set_selling_price("9.99");

        assert!(form.has_product());
        assert_eq!(form.get_draft().product_id, "SKU123");
    }

    #[test]
    fn clear_draft_empties_every_field() {
        let form = PurchaseFormState::new();
        form.set_product_id("SKU123");
        form.set_quantity("4");
        form.set_selling_price("9.99");

        form.clear_draft();

        let draft = form.get_draft();
        assert!(draft.product_id.is_empty());
        assert!(draft.quantity.is_empty());
        assert!(draft.selling_price.is_empty());
        assert!(!form.has_product());
    }
}
