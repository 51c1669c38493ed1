// ============================================================================
// REACTIVITY - Sistema de notificaciones/subscribers para reactividad
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

type Callback = Box<dyn Fn()>;

/// Estado reactivo con sistema de notificaciones
pub struct ReactiveState<T> {
    value: Rc<RefCell<T>>,
    subscribers: RefCell<Vec<Callback>>,
}

impl<T> ReactiveState<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(value)),
            subscribers: RefCell::new(Vec::new()),
        }
    }

    /// Obtener referencia al valor interno
    pub fn get(&self) -> Rc<RefCell<T>> {
        self.value.clone()
    }

    /// Establecer nuevo valor y notificar subscribers
    pub fn set(&self, new_value: T) {
        *self.value.borrow_mut() = new_value;
        self.notify();
    }

    /// Actualizar valor usando closure y notificar
    pub fn update<F>(&self, updater: F)
    where
        F: FnOnce(&mut T),
    {
        updater(&mut *self.value.borrow_mut());
        self.notify();
    }

    /// Suscribirse a cambios
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.subscribers.borrow_mut().push(Box::new(callback));
    }

    fn notify(&self) {
        for callback in self.subscribers.borrow().iter() {
            callback();
        }
    }
}

/// Coalescer de trabajo diferido: varias notificaciones del mismo tick se
/// agrupan en UNA sola ejecución programada. Los clones comparten el flag.
#[derive(Clone)]
pub struct RenderScheduler {
    pending: Rc<Cell<bool>>,
}

impl RenderScheduler {
    pub fn new() -> Self {
        Self {
            pending: Rc::new(Cell::new(false)),
        }
    }

    /// true si el caller debe programar el trabajo; false si ya hay uno
    /// pendiente de ejecutar
    pub fn try_schedule(&self) -> bool {
        if self.pending.get() {
            false
        } else {
            self.pending.set(true);
            true
        }
    }

    /// Marcar el trabajo pendiente como ejecutado
    pub fn complete(&self) {
        self.pending.set(false);
    }
}

impl Default for RenderScheduler {
    fn default() -> Self {
        Self::new()
    }
}
