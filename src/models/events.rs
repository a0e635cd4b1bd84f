// ============================================================================
// DOMAIN EVENTS - Mensajes tipados del canal en tiempo real
// ============================================================================
// El servidor empuja sobres `{ event, data }` con nombres
// `<recurso>:<created|updated|deleted>` más `notification:new`.
// El adaptador de socket solo decodifica y enruta; nunca muta estado.
// ============================================================================

use super::{Delivery, Notification, Order, Product, Transfer};
use serde::Deserialize;
use serde_json::Value;

/// Sobre crudo tal como llega por el socket
#[derive(Deserialize, Debug)]
pub struct EventEnvelope {
    pub event: String,
    #[serde(default)]
    pub data: Value,
}

#[derive(Deserialize, Debug)]
struct DeletedPayload {
    id: i64,
}

/// Evento de dominio ya tipado, listo para el Synchronizer
#[derive(Clone, PartialEq, Debug)]
pub enum DomainEvent {
    ProductCreated(Product),
    ProductUpdated(Product),
    ProductDeleted { id: i64 },
    OrderCreated(Order),
    OrderUpdated(Order),
    DeliveryCreated(Delivery),
    DeliveryUpdated(Delivery),
    DeliveryDeleted { id: i64 },
    TransferCreated(Transfer),
    TransferUpdated(Transfer),
    TransferDeleted { id: i64 },
    NotificationNew(Notification),
}

impl DomainEvent {
    /// Decodificar un sobre a evento tipado. Un nombre desconocido o un
    /// payload que no parsea devuelve `None` (el llamador lo loguea y
    /// descarta, nunca es fatal).
    pub fn decode(envelope: EventEnvelope) -> Option<Self> {
        let EventEnvelope { event, data } = envelope;

        fn parse<T: serde::de::DeserializeOwned>(data: Value) -> Option<T> {
            serde_json::from_value(data).ok()
        }

        match event.as_str() {
            "product:created" => parse::<Product>(data).map(DomainEvent::ProductCreated),
            "product:updated" => parse::<Product>(data).map(DomainEvent::ProductUpdated),
            "product:deleted" => {
                parse::<DeletedPayload>(data).map(|p| DomainEvent::ProductDeleted { id: p.id })
            }
            "order:created" => parse::<Order>(data).map(DomainEvent::OrderCreated),
            "order:updated" => parse::<Order>(data).map(DomainEvent::OrderUpdated),
            "delivery:created" => parse::<Delivery>(data).map(DomainEvent::DeliveryCreated),
            "delivery:updated" => parse::<Delivery>(data).map(DomainEvent::DeliveryUpdated),
            "delivery:deleted" => {
                parse::<DeletedPayload>(data).map(|p| DomainEvent::DeliveryDeleted { id: p.id })
            }
            "transfer:created" => parse::<Transfer>(data).map(DomainEvent::TransferCreated),
            "transfer:updated" => parse::<Transfer>(data).map(DomainEvent::TransferUpdated),
            "transfer:deleted" => {
                parse::<DeletedPayload>(data).map(|p| DomainEvent::TransferDeleted { id: p.id })
            }
            "notification:new" => parse::<Notification>(data).map(DomainEvent::NotificationNew),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn envelope(event: &str, data: Value) -> EventEnvelope {
        EventEnvelope {
            event: event.to_string(),
            data,
        }
    }

    #[test]
    fn decodes_product_created() {
        let data = json!({
            "id": 7,
            "name": "Basmati Rice",
            "sku": "SKU-007",
            "category": "Grains",
            "unit": "kg",
            "price": 85.0,
            "stock": 20,
            "minStock": 10
        });
        let event = DomainEvent::decode(envelope("product:created", data)).unwrap();
        match event {
            DomainEvent::ProductCreated(p) => {
                assert_eq!(p.id, 7);
                assert_eq!(p.min_stock, 10);
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn decodes_deletion_payload() {
        let event = DomainEvent::decode(envelope("product:deleted", json!({ "id": 7 }))).unwrap();
        assert_eq!(event, DomainEvent::ProductDeleted { id: 7 });
    }

    #[test]
    fn unknown_event_name_is_dropped() {
        assert!(DomainEvent::decode(envelope("warehouse:exploded", json!({}))).is_none());
    }

    #[test]
    fn malformed_payload_is_dropped() {
        assert!(DomainEvent::decode(envelope("product:created", json!({ "id": "nope" }))).is_none());
    }
}
