// ============================================================================
// INVENTORY VIEWMODEL - Productos, almacenes y flujo de compra
// ============================================================================

use crate::models::{NewOrder, NewProduct, NewWarehouse, Product, ToastKind};
use crate::services::{download_products_csv, ApiClient, ApiError, ApiResult};
use crate::state::AppState;

pub struct InventoryViewModel {
    api: ApiClient,
}

impl InventoryViewModel {
    pub fn new() -> Self {
        Self {
            api: ApiClient::new(),
        }
    }

    /// Reportar un error al usuario. Un 401 no se toastea: el handler global
    /// ya está navegando a /login.
    fn report(state: &AppState, error: &ApiError) {
        if !matches!(error, ApiError::Unauthorized) {
            state.toasts.show(error.to_string(), ToastKind::Error);
        }
    }

    // ------------------------------------------------------------------
    // Products
    // ------------------------------------------------------------------

    pub async fn create_product(&self, state: &AppState, payload: NewProduct) -> ApiResult<()> {
        match self.api.create_product(&payload).await {
            Ok(created) => {
                // Merge optimista; el push product:created posterior es no-op
                state.products.prepend_new(created);
                state
                    .toasts
                    .show("Product added successfully!", ToastKind::Success);
                state.notify_subscribers();
                Ok(())
            }
            Err(e) => {
                Self::report(state, &e);
                Err(e)
            }
        }
    }

    pub async fn update_product(
        &self,
        state: &AppState,
        id: i64,
        payload: NewProduct,
    ) -> ApiResult<()> {
        match self.api.update_product(id, &payload).await {
            Ok(updated) => {
                state.products.update_in_place(updated);
                state
                    .toasts
                    .show("Product updated successfully!", ToastKind::Success);
                state.notify_subscribers();
                Ok(())
            }
            Err(e) => {
                Self::report(state, &e);
                Err(e)
            }
        }
    }

    pub async fn delete_product(&self, state: &AppState, id: i64) -> ApiResult<()> {
        match self.api.delete_product(id).await {
            Ok(()) => {
                state.products.remove_by_id(id);
                state
                    .toasts
                    .show("Product deleted successfully!", ToastKind::Success);
                state.notify_subscribers();
                Ok(())
            }
            Err(e) => {
                Self::report(state, &e);
                Err(e)
            }
        }
    }

    /// Flujo de compra: crear la orden y, al confirmarse, decrementar el
    /// stock local de inmediato (mutación optimista). El push
    /// product:updated que llegue después con el mismo stock es idempotente.
    pub async fn purchase(
        &self,
        state: &AppState,
        product: &Product,
        quantity: u32,
    ) -> ApiResult<()> {
        let payload = NewOrder::purchase(product.id, quantity, product.price);
        match self.api.create_order(&payload).await {
            Ok(order) => {
                state.orders.prepend_new(order);
                state
                    .products
                    .modify(product.id, |p| p.stock = p.stock.saturating_sub(quantity));
                state.toasts.show(
                    format!(
                        "Successfully purchased {} {} of {}",
                        quantity, product.unit, product.name
                    ),
                    ToastKind::Success,
                );
                state.notify_subscribers();
                Ok(())
            }
            Err(e) => {
                Self::report(state, &e);
                Err(e)
            }
        }
    }

    /// Cerrar una orden pendiente. El push order:updated posterior con el
    /// mismo estado es idempotente.
    pub async fn complete_order(&self, state: &AppState, id: i64) -> ApiResult<()> {
        match self.api.update_order_status(id, "completed").await {
            Ok(updated) => {
                state.orders.update_in_place(updated);
                state.toasts.show("Order completed!", ToastKind::Success);
                state.notify_subscribers();
                Ok(())
            }
            Err(e) => {
                Self::report(state, &e);
                Err(e)
            }
        }
    }

    /// Exportar la colección de productos a CSV (sin red)
    pub fn export_products(&self, state: &AppState) {
        if let Err(e) = download_products_csv(&state.products.items()) {
            log::error!("❌ Error exportando CSV: {:?}", e);
            state
                .toasts
                .show("Failed to export products", ToastKind::Error);
        }
    }

    // ------------------------------------------------------------------
    // Warehouses
    // ------------------------------------------------------------------

    /// Cargar la lista una sola vez por sesión (la página marca el flag)
    pub async fn load_warehouses(&self, state: &AppState) -> ApiResult<()> {
        match self.api.get_warehouses().await {
            Ok(list) => {
                state.warehouses.replace_all(list);
                state.warehouses_loaded.set(true);
                state.notify_subscribers();
                Ok(())
            }
            Err(e) => {
                Self::report(state, &e);
                Err(e)
            }
        }
    }

    pub async fn create_warehouse(&self, state: &AppState, payload: NewWarehouse) -> ApiResult<()> {
        match self.api.create_warehouse(&payload).await {
            Ok(created) => {
                log::info!("🏬 Almacén creado: {}", created.name);
                state.warehouses.prepend_new(created);
                state
                    .toasts
                    .show("Warehouse added successfully!", ToastKind::Success);
                state.notify_subscribers();
                Ok(())
            }
            Err(e) => {
                Self::report(state, &e);
                Err(e)
            }
        }
    }

    pub async fn update_warehouse(
        &self,
        state: &AppState,
        id: i64,
        payload: NewWarehouse,
    ) -> ApiResult<()> {
        match self.api.update_warehouse(id, &payload).await {
            Ok(updated) => {
                state.warehouses.update_in_place(updated);
                state
                    .toasts
                    .show("Warehouse updated successfully!", ToastKind::Success);
                state.notify_subscribers();
                Ok(())
            }
            Err(e) => {
                Self::report(state, &e);
                Err(e)
            }
        }
    }

    pub async fn delete_warehouse(&self, state: &AppState, id: i64) -> ApiResult<()> {
        match self.api.delete_warehouse(id).await {
            Ok(()) => {
                state.warehouses.remove_by_id(id);
                state
                    .toasts
                    .show("Warehouse deleted successfully!", ToastKind::Success);
                state.notify_subscribers();
                Ok(())
            }
            Err(e) => {
                Self::report(state, &e);
                Err(e)
            }
        }
    }
}

impl Default for InventoryViewModel {
    fn default() -> Self {
        Self::new()
    }
}
