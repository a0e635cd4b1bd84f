// ============================================================================
// SYNCHRONIZER - Reducer de eventos de dominio
// ============================================================================
// Tabla de despacho tipada: evento → regla de merge sobre la colección que
// corresponde + toast para el usuario. Un evento viejo o duplicado se absorbe
// en silencio (no-op), nunca se muestra al usuario.
// ============================================================================

use crate::models::{DomainEvent, ToastKind};
use crate::state::AppState;

/// Aplicar un evento empujado por el canal (o re-emitido localmente tras una
/// mutación optimista). Devuelve `true` si el estado cambió.
pub fn apply_event(state: &AppState, event: DomainEvent) -> bool {
    let changed = match event {
        DomainEvent::ProductCreated(product) => {
            let name = product.name.clone();
            let applied = state.products.prepend_new(product);
            if applied {
                state
                    .toasts
                    .show(format!("New product added: {}", name), ToastKind::Success);
            }
            applied
        }
        DomainEvent::ProductUpdated(product) => {
            let name = product.name.clone();
            let applied = state.products.update_in_place(product);
            if applied {
                state
                    .toasts
                    .show(format!("Product updated: {}", name), ToastKind::Info);
            }
            applied
        }
        DomainEvent::ProductDeleted { id } => {
            let applied = state.products.remove_by_id(id);
            if applied {
                state.toasts.show("Product deleted", ToastKind::Info);
            }
            applied
        }
        DomainEvent::OrderCreated(order) => {
            let number = order.order_number.clone();
            let applied = state.orders.prepend_new(order);
            if applied {
                state
                    .toasts
                    .show(format!("New order: {}", number), ToastKind::Success);
            }
            applied
        }
        DomainEvent::OrderUpdated(order) => state.orders.update_in_place(order),
        DomainEvent::DeliveryCreated(delivery) => {
            let tracking = delivery.tracking_number.clone();
            let applied = state.deliveries.prepend_new(delivery);
            if applied {
                state
                    .toasts
                    .show(format!("New delivery: {}", tracking), ToastKind::Success);
            }
            applied
        }
        DomainEvent::DeliveryUpdated(delivery) => state.deliveries.update_tracked(delivery),
        DomainEvent::DeliveryDeleted { id } => state.deliveries.remove_by_id(id),
        DomainEvent::TransferCreated(transfer) => {
            let applied = state.transfers.prepend_new(transfer);
            if applied {
                state
                    .toasts
                    .show("New transfer created", ToastKind::Success);
            }
            applied
        }
        DomainEvent::TransferUpdated(transfer) => state.transfers.update_tracked(transfer),
        DomainEvent::TransferDeleted { id } => state.transfers.remove_by_id(id),
        DomainEvent::NotificationNew(notification) => {
            let title = notification.title.clone();
            let kind = ToastKind::from(notification.kind);
            let applied = state.notifications.prepend_new(notification);
            if applied {
                state.toasts.show(title, kind);
            }
            applied
        }
    };

    if changed {
        state.notify_subscribers();
    }

    changed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Delivery, DocumentStatus, DomainEvent, Product};

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
    fn duplicate_creation_event_is_absorbed() {
        let state = AppState::new();
        assert!(apply_event(
            &state,
            DomainEvent::ProductCreated(product(7, "Rice", 20))
        ));
        assert!(!apply_event(
            &state,
            DomainEvent::ProductCreated(product(7, "Rice", 20))
        ));
        assert_eq!(state.products.len(), 1);
    }

    #[test]
    fn update_event_replaces_in_place() {
        let state = AppState::new();
        apply_event(&state, DomainEvent::ProductCreated(product(2, "Wheat", 30)));
        apply_event(&state, DomainEvent::ProductCreated(product(1, "Rice", 20)));
        apply_event(
            &state,
            DomainEvent::ProductUpdated(product(2, "Wheat Premium", 25)),
        );
        let items = state.products.items();
        assert_eq!(items[0].id, 1);
        assert_eq!(items[1].name, "Wheat Premium");
    }

    #[test]
    fn stale_update_for_unknown_id_is_dropped() {
        let state = AppState::new();
        apply_event(&state, DomainEvent::ProductCreated(product(1, "Rice", 20)));
        assert!(!apply_event(
            &state,
            DomainEvent::ProductUpdated(product(99, "Ghost", 0))
        ));
        assert_eq!(state.products.len(), 1);
    }

    #[test]
    fn duplicate_deletion_is_a_noop() {
        let state = AppState::new();
        apply_event(&state, DomainEvent::ProductCreated(product(7, "Rice", 20)));
        assert!(apply_event(&state, DomainEvent::ProductDeleted { id: 7 }));
        assert!(!apply_event(&state, DomainEvent::ProductDeleted { id: 7 }));
        assert!(state.products.is_empty());
    }

    #[test]
    fn purchase_flow_is_idempotent_against_push() {
        let state = AppState::new();
        apply_event(&state, DomainEvent::ProductCreated(product(1, "Rice", 20)));

        // Mutación optimista tras confirmar la orden: stock 20 → 15
        assert!(state.products.modify(1, |p| p.stock -= 5));
        assert_eq!(state.products.get(1).unwrap().stock, 15);

        // El push tardío con el mismo stock deja el estado igual
        apply_event(&state, DomainEvent::ProductUpdated(product(1, "Rice", 15)));
        assert_eq!(state.products.get(1).unwrap().stock, 15);
        assert_eq!(state.products.len(), 1);
    }

    #[test]
    fn done_delivery_ignores_regressing_push() {
        let state = AppState::new();
        apply_event(
            &state,
            DomainEvent::DeliveryCreated(delivery(4, DocumentStatus::Draft)),
        );
        assert!(apply_event(
            &state,
            DomainEvent::DeliveryUpdated(delivery(4, DocumentStatus::Done))
        ));
        // Push viejo que llega fuera de orden
        assert!(!apply_event(
            &state,
            DomainEvent::DeliveryUpdated(delivery(4, DocumentStatus::Ready))
        ));
        assert_eq!(
            state.deliveries.get(4).unwrap().status,
            DocumentStatus::Done
        );
    }

    #[test]
    fn notification_push_prepends_and_counts_unread() {
        use crate::models::{Notification, NotificationKind};
        let state = AppState::new();
        let n = Notification {
            id: 1,
            title: "Low stock".into(),
            message: "Rice is below minimum".into(),
            kind: NotificationKind::Warning,
            read: false,
            created_at: chrono::Utc::now(),
        };
        assert!(apply_event(&state, DomainEvent::NotificationNew(n.clone())));
        assert!(!apply_event(&state, DomainEvent::NotificationNew(n)));
        assert_eq!(state.unread_notifications(), 1);
    }
}
