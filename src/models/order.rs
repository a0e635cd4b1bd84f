use super::Identified;
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: i64,
    pub quantity: u32,
    pub price: f64,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    pub order_number: String,
    pub items: Vec<OrderItem>,
    pub total_amount: f64,
    pub status: String,
}

impl Identified for Order {
    fn entity_id(&self) -> i64 {
        self.id
    }
}

/// Payload del flujo de compra: una orden con sus líneas (el servidor asigna
/// id y orderNumber)
#[derive(Clone, PartialEq, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub items: Vec<OrderItem>,
    pub total_amount: f64,
    pub status: String,
}

impl NewOrder {
    /// Orden de compra de un solo producto (modal "Buy Now")
    pub fn purchase(product_id: i64, quantity: u32, price: f64) -> Self {
        Self {
            items: vec![OrderItem {
                product_id,
                quantity,
                price,
            }],
            total_amount: price * quantity as f64,
            status: "pending".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn purchase_computes_total() {
        let order = NewOrder::purchase(7, 5, 85.0);
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.total_amount, 425.0);
        assert_eq!(order.status, "pending");
    }
}
