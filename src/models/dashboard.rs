use serde::{Deserialize, Serialize};

/// Respuesta de `dashboard/stats`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    #[serde(default)]
    pub total_products: u32,
    #[serde(default)]
    pub total_warehouses: u32,
    #[serde(default)]
    pub total_orders: u32,
    #[serde(default)]
    pub pending_deliveries: u32,
    #[serde(default)]
    pub low_stock_count: u32,
    #[serde(default)]
    pub total_revenue: f64,
}
