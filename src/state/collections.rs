// ============================================================================
// COLLECTIONS - Colecciones en memoria del Synchronizer
// ============================================================================
// Cada colección tiene exactamente UN escritor (el Synchronizer); las vistas
// solo leen copias. Reglas de merge:
//   - replace_all:   carga inicial (bulk load)
//   - prepend_new:   evento de creación, idempotente por id
//   - update_in_place: reemplazo in situ preservando el orden; id desconocido
//                      se descarta como evento viejo
//   - update_tracked: igual, pero nunca regresa un documento ya en Done
//   - remove_by_id:  borrado idempotente
// ============================================================================

use crate::models::{Identified, Tracked};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone)]
pub struct Collection<T> {
    items: Rc<RefCell<Vec<T>>>,
}

impl<T: Identified + Clone> Collection<T> {
    pub fn new() -> Self {
        Self {
            items: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Reemplazar la colección entera (bulk load)
    pub fn replace_all(&self, items: Vec<T>) {
        *self.items.borrow_mut() = items;
    }

    /// Copia de los elementos actuales, en orden
    pub fn items(&self) -> Vec<T> {
        self.items.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    pub fn get(&self, id: i64) -> Option<T> {
        self.items
            .borrow()
            .iter()
            .find(|item| item.entity_id() == id)
            .cloned()
    }

    /// Insertar al frente (los nuevos salen primero). Si ya existe un
    /// elemento con ese id, no hace nada: idempotente ante entregas
    /// duplicadas del canal.
    pub fn prepend_new(&self, item: T) -> bool {
        let mut items = self.items.borrow_mut();
        if items.iter().any(|i| i.entity_id() == item.entity_id()) {
            return false;
        }
        items.insert(0, item);
        true
    }

    /// Insertar al final (altas locales de las páginas de documentos)
    pub fn push_back(&self, item: T) -> bool {
        let mut items = self.items.borrow_mut();
        if items.iter().any(|i| i.entity_id() == item.entity_id()) {
            return false;
        }
        items.push(item);
        true
    }

    /// Reemplazar in situ el elemento con el mismo id, preservando la
    /// posición. Un id desconocido se descarta (evento viejo), no es error.
    pub fn update_in_place(&self, item: T) -> bool {
        let mut items = self.items.borrow_mut();
        match items.iter_mut().find(|i| i.entity_id() == item.entity_id()) {
            Some(slot) => {
                *slot = item;
                true
            }
            None => false,
        }
    }

    /// Mutar el elemento con ese id (mutación optimista local)
    pub fn modify<F>(&self, id: i64, f: F) -> bool
    where
        F: FnOnce(&mut T),
    {
        let mut items = self.items.borrow_mut();
        match items.iter_mut().find(|i| i.entity_id() == id) {
            Some(item) => {
                f(item);
                true
            }
            None => false,
        }
    }

    /// Mutar todos los elementos (p.ej. marcar todas las notificaciones
    /// como leídas)
    pub fn modify_all<F>(&self, mut f: F)
    where
        F: FnMut(&mut T),
    {
        for item in self.items.borrow_mut().iter_mut() {
            f(item);
        }
    }

    /// Borrado idempotente: borrar un id desconocido es un no-op
    pub fn remove_by_id(&self, id: i64) -> bool {
        let mut items = self.items.borrow_mut();
        let before = items.len();
        items.retain(|i| i.entity_id() != id);
        items.len() != before
    }

    pub fn clear(&self) {
        self.items.borrow_mut().clear();
    }
}

impl<T: Tracked + Clone> Collection<T> {
    /// Merge de un documento con estado monótono: igual que
    /// `update_in_place`, pero descarta cualquier update que regresaría un
    /// documento ya en `Done`.
    pub fn update_tracked(&self, item: T) -> bool {
        let mut items = self.items.borrow_mut();
        match items.iter_mut().find(|i| i.entity_id() == item.entity_id()) {
            Some(slot) => {
                if slot.status().regressed_by(item.status()) {
                    log::debug!(
                        "🛑 Update descartado: documento {} ya está en Done",
                        item.entity_id()
                    );
                    return false;
                }
                *slot = item;
                true
            }
            None => false,
        }
    }
}

impl<T: Identified + Clone> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Delivery, DocumentStatus, Product};

    fn product(id: i64, name: &str, stock: u32) -> Product {
        Product {
            id,
            name: name.into(),
            sku: format!("SKU-{:03}", id),
            category: "Grains".into(),
            unit: "kg".into(),
            price: 85.0,
            stock,
            min_stock: 10,
            warehouse_id: None,
        }
    }

    fn delivery(id: i64, status: DocumentStatus) -> Delivery {
        Delivery {
            id,
            tracking_number: format!("DEL-{:03}", id),
            customer: "Acme".into(),
            product: "Rice".into(),
            quantity: 5,
            date: "2026-08-30".into(),
            status,
        }
    }

    #[test]
    fn prepend_new_surfaces_newest_first() {
        let col = Collection::new();
        assert!(col.prepend_new(product(1, "Rice", 20)));
        assert!(col.prepend_new(product(2, "Wheat", 30)));
        let ids: Vec<i64> = col.items().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn prepend_new_is_idempotent_by_id() {
        let col = Collection::new();
        assert!(col.prepend_new(product(1, "Rice", 20)));
        assert!(col.prepend_new(product(2, "Wheat", 30)));
        // Entrega duplicada del mismo evento
        assert!(!col.prepend_new(product(1, "Rice", 20)));
        assert_eq!(col.len(), 2);
        // La posición establecida por la primera aplicación no cambia
        let ids: Vec<i64> = col.items().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn update_in_place_preserves_order() {
        let col = Collection::new();
        col.prepend_new(product(2, "Wheat", 30));
        col.prepend_new(product(1, "Rice", 20));
        assert!(col.update_in_place(product(2, "Wheat Premium", 25)));
        let items = col.items();
        assert_eq!(items[0].id, 1);
        assert_eq!(items[1].id, 2);
        assert_eq!(items[1].name, "Wheat Premium");
    }

    #[test]
    fn update_unknown_id_is_dropped() {
        let col = Collection::new();
        col.prepend_new(product(1, "Rice", 20));
        assert!(!col.update_in_place(product(99, "Ghost", 0)));
        assert_eq!(col.len(), 1);
        assert_eq!(col.items()[0].name, "Rice");
    }

    #[test]
    fn remove_is_idempotent() {
        let col = Collection::new();
        col.prepend_new(product(7, "Rice", 20));
        assert!(col.remove_by_id(7));
        // Segunda entrega del mismo borrado: no-op, sin error
        assert!(!col.remove_by_id(7));
        assert!(col.is_empty());
    }

    #[test]
    fn modify_applies_optimistic_mutation() {
        let col = Collection::new();
        col.prepend_new(product(1, "Rice", 20));
        assert!(col.modify(1, |p| p.stock -= 5));
        assert_eq!(col.get(1).unwrap().stock, 15);
        assert!(!col.modify(99, |p| p.stock = 0));
    }

    #[test]
    fn tracked_update_advances_state() {
        let col = Collection::new();
        col.prepend_new(delivery(1, DocumentStatus::Draft));
        assert!(col.update_tracked(delivery(1, DocumentStatus::Ready)));
        assert!(col.update_tracked(delivery(1, DocumentStatus::Done)));
        assert_eq!(col.get(1).unwrap().status, DocumentStatus::Done);
    }

    #[test]
    fn tracked_update_never_regresses_done() {
        let col = Collection::new();
        col.prepend_new(delivery(1, DocumentStatus::Done));
        assert!(!col.update_tracked(delivery(1, DocumentStatus::Draft)));
        assert!(!col.update_tracked(delivery(1, DocumentStatus::Ready)));
        assert_eq!(col.get(1).unwrap().status, DocumentStatus::Done);
        // Un update que se queda en Done sí se aplica (payload nuevo)
        let mut done = delivery(1, DocumentStatus::Done);
        done.customer = "Globex".into();
        assert!(col.update_tracked(done));
        assert_eq!(col.get(1).unwrap().customer, "Globex");
    }

    #[test]
    fn replace_all_overwrites_wholesale() {
        let col = Collection::new();
        col.prepend_new(product(1, "Rice", 20));
        col.replace_all(vec![product(5, "Salt", 50), product(6, "Sugar", 60)]);
        let ids: Vec<i64> = col.items().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![5, 6]);
    }
}
