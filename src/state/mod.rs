// ============================================================================
// STATE MODULE - State Management con Rc<RefCell> + notificaciones
// ============================================================================

pub mod app_state;
pub mod form_state;
pub mod reactivity;

pub use app_state::AppState;
pub use form_state::PurchaseFormState;
pub use reactivity::{ReactiveState, RenderScheduler};
