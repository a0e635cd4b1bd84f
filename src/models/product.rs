use super::Identified;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Estado de stock derivado, nunca se persiste: `Low Stock` cuando
/// `stock < min_stock`, si no `In Stock`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StockStatus {
    InStock,
    LowStock,
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StockStatus::InStock => write!(f, "In Stock"),
            StockStatus::LowStock => write!(f, "Low Stock"),
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub sku: String,
    pub category: String,
    pub unit: String,
    pub price: f64,
    pub stock: u32,
    #[serde(default)]
    pub min_stock: u32,
    #[serde(default)]
    pub warehouse_id: Option<i64>,
}

impl Product {
    pub fn stock_status(&self) -> StockStatus {
        if self.stock < self.min_stock {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }
}

impl Identified for Product {
    fn entity_id(&self) -> i64 {
        self.id
    }
}

/// Payload de creación/edición (el id lo asigna el servidor)
#[derive(Clone, PartialEq, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub sku: String,
    pub category: String,
    pub unit: String,
    pub price: f64,
    pub stock: u32,
    pub min_stock: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warehouse_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(stock: u32, min_stock: u32) -> Product {
        Product {
            id: 1,
            name: "Basmati Rice".into(),
            sku: "SKU-001".into(),
            category: "Grains".into(),
            unit: "kg".into(),
            price: 85.0,
            stock,
            min_stock,
            warehouse_id: None,
        }
    }

    #[test]
    fn status_is_low_below_min_stock() {
        assert_eq!(product(5, 10).stock_status(), StockStatus::LowStock);
        assert_eq!(product(10, 10).stock_status(), StockStatus::InStock);
        assert_eq!(product(20, 10).stock_status(), StockStatus::InStock);
    }

    #[test]
    fn status_labels_match_ui() {
        assert_eq!(product(5, 10).stock_status().to_string(), "Low Stock");
        assert_eq!(product(20, 10).stock_status().to_string(), "In Stock");
    }
}
