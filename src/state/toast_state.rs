// ============================================================================
// TOAST STATE - Cola de mensajes efímeros
// ============================================================================
// Cola, no slot único: varios toasts conviven y cada uno programa su propia
// expiración a los 3000 ms, keyed por id para no tumbar a los demás.
// ============================================================================

use crate::models::{Toast, ToastKind};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Clone)]
pub struct ToastState {
    toasts: Rc<RefCell<Vec<Toast>>>,
    next_id: Rc<Cell<u64>>,
}

impl ToastState {
    pub fn new() -> Self {
        Self {
            toasts: Rc::new(RefCell::new(Vec::new())),
            next_id: Rc::new(Cell::new(1)),
        }
    }

    /// Encolar un toast y programar su auto-destrucción a los 3000 ms.
    /// Devuelve el id asignado.
    pub fn show(&self, message: impl Into<String>, kind: ToastKind) -> u64 {
        let id = self.push(message, kind);

        #[cfg(target_arch = "wasm32")]
        {
            crate::rerender_toasts();
            let toasts = self.clone();
            gloo_timers::callback::Timeout::new(crate::utils::TOAST_DURATION_MS, move || {
                toasts.dismiss(id);
                crate::rerender_toasts();
            })
            .forget();
        }

        id
    }

    /// Encolar sin programar timer (núcleo puro de `show`)
    pub fn push(&self, message: impl Into<String>, kind: ToastKind) -> u64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.toasts.borrow_mut().push(Toast {
            id,
            message: message.into(),
            kind,
        });
        id
    }

    /// Quitar solo el toast con ese id; los demás no se tocan
    pub fn dismiss(&self, id: u64) {
        self.toasts.borrow_mut().retain(|t| t.id != id);
    }

    pub fn items(&self) -> Vec<Toast> {
        self.toasts.borrow().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.borrow().is_empty()
    }
}

impl Default for ToastState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_fresh_per_toast() {
        let toasts = ToastState::new();
        let a = toasts.push("first", ToastKind::Success);
        let b = toasts.push("second", ToastKind::Error);
        assert_ne!(a, b);
        assert_eq!(toasts.items().len(), 2);
    }

    #[test]
    fn dismiss_is_keyed_by_id() {
        let toasts = ToastState::new();
        let a = toasts.push("expiring", ToastKind::Info);
        let b = toasts.push("staying", ToastKind::Info);
        toasts.dismiss(a);
        let remaining = toasts.items();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, b);
        assert_eq!(remaining[0].message, "staying");
    }

    #[test]
    fn dismiss_unknown_id_is_noop() {
        let toasts = ToastState::new();
        toasts.push("only", ToastKind::Warning);
        toasts.dismiss(999);
        assert_eq!(toasts.items().len(), 1);
    }
}
