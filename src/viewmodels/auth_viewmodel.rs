// ============================================================================
// AUTH VIEWMODEL - Login / registro / logout / restauración de sesión
// ============================================================================
// Orquesta Session Store + canal + carga inicial: login guarda la sesión,
// abre el socket y dispara el bulk load; logout desmonta todo.
// ============================================================================

use crate::models::{
    AuthResponse, Delivery, LoginRequest, Notification, Order, Product, RegisterRequest, ToastKind,
    Transfer,
};
use crate::services::{socket_service, ApiClient, ApiError, ApiResult};
use crate::state::AppState;

pub struct AuthViewModel {
    api: ApiClient,
}

impl AuthViewModel {
    pub fn new() -> Self {
        Self {
            api: ApiClient::new(),
        }
    }

    pub async fn login(&self, state: &AppState, email: String, password: String) -> ApiResult<()> {
        let response = self.api.login(&LoginRequest { email, password }).await?;
        let name = response.user.name.clone();
        self.start_session(state, response).await;
        state
            .toasts
            .show(format!("Welcome back, {}!", name), ToastKind::Success);
        Ok(())
    }

    pub async fn register(
        &self,
        state: &AppState,
        name: String,
        email: String,
        password: String,
    ) -> ApiResult<()> {
        let response = self
            .api
            .register(&RegisterRequest {
                name,
                email,
                password,
            })
            .await?;
        let name = response.user.name.clone();
        self.start_session(state, response).await;
        state.toasts.show(
            format!("Welcome, {}! Account created successfully!", name),
            ToastKind::Success,
        );
        Ok(())
    }

    /// Al arrancar: si hay usuario + token persistidos, reanudar la sesión
    /// sin pedir credenciales (reconectar canal + recargar colecciones).
    pub async fn restore_session(&self, state: &AppState) -> bool {
        if !state.auth.restore() {
            return false;
        }

        // Validar el token contra el backend. El handler global de 401 limpia
        // el storage; la copia en memoria que acaba de rehidratar `restore`
        // se limpia aquí para que ningún re-render muestre el shell.
        match self.api.get_me().await {
            Ok(user) => {
                if let Some(token) = state.auth.token() {
                    state.auth.set_session(user, token.clone());
                    self.open_channel(state, &token);
                }
            }
            Err(ApiError::Unauthorized) => {
                state.auth.clear_session();
                return false;
            }
            // Backend inalcanzable: seguir con la sesión persistida
            Err(e) => log::warn!("⚠️ No se pudo validar la sesión: {}", e),
        }

        self.load_all(state).await;
        true
    }

    /// Cerrar sesión: limpiar storage, tirar el canal y vaciar colecciones
    pub fn logout(&self, state: &AppState) {
        log::info!("👋 Logout: limpiando sesión y colecciones");
        state.auth.clear_session();
        socket_service::disconnect();
        state.clear_collections();
        state.notify_subscribers();
    }

    async fn start_session(&self, state: &AppState, response: AuthResponse) {
        state
            .auth
            .set_session(response.user.clone(), response.token.clone());
        self.open_channel(state, &response.token);
        self.load_all(state).await;
    }

    fn open_channel(&self, state: &AppState, token: &str) {
        if let Err(e) = socket_service::connect(token, state.clone()) {
            log::error!("❌ No se pudo abrir el canal en tiempo real: {:?}", e);
        }
    }

    /// Bulk load: las cinco colecciones en paralelo. Cada fetch exitoso
    /// reemplaza su colección; un fetch fallido deja la suya intacta y se
    /// reporta UNA sola vez.
    pub async fn load_all(&self, state: &AppState) {
        let (products, orders, deliveries, transfers, notifications) = futures::join!(
            self.api.get_products(),
            self.api.get_orders(),
            self.api.get_deliveries(),
            self.api.get_transfers(),
            self.api.get_notifications(),
        );

        if apply_loaded(state, products, orders, deliveries, transfers, notifications) {
            log::info!(
                "📦 Datos cargados: {} productos, {} órdenes, {} entregas",
                state.products.len(),
                state.orders.len(),
                state.deliveries.len()
            );
        }

        state.notify_subscribers();
    }
}

/// Volcado del bulk load al estado: cada lista exitosa reemplaza su
/// colección, una fallida deja la suya intacta, y cualquier número de fallos
/// produce exactamente un toast de error. Devuelve `true` si cargó todo.
fn apply_loaded(
    state: &AppState,
    products: ApiResult<Vec<Product>>,
    orders: ApiResult<Vec<Order>>,
    deliveries: ApiResult<Vec<Delivery>>,
    transfers: ApiResult<Vec<Transfer>>,
    notifications: ApiResult<Vec<Notification>>,
) -> bool {
    let mut failure: Option<ApiError> = None;

    match products {
        Ok(list) => state.products.replace_all(list),
        Err(e) => failure = failure.or(Some(e)),
    }
    match orders {
        Ok(list) => state.orders.replace_all(list),
        Err(e) => failure = failure.or(Some(e)),
    }
    match deliveries {
        Ok(list) => state.deliveries.replace_all(list),
        Err(e) => failure = failure.or(Some(e)),
    }
    match transfers {
        Ok(list) => state.transfers.replace_all(list),
        Err(e) => failure = failure.or(Some(e)),
    }
    match notifications {
        Ok(list) => state.notifications.replace_all(list),
        Err(e) => failure = failure.or(Some(e)),
    }

    match failure {
        Some(e) => {
            log::error!("❌ Bulk load incompleto: {}", e);
            state.toasts.show("Failed to load data", ToastKind::Error);
            false
        }
        None => true,
    }
}

impl Default for AuthViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, name: &str) -> Product {
        Product {
            id,
            name: name.into(),
            sku: format!("SKU-{:03}", id),
            category: "Grains".into(),
            unit: "kg".into(),
            price: 85.0,
            stock: 40,
            min_stock: 10,
            warehouse_id: None,
        }
    }

    fn order(id: i64) -> Order {
        Order {
            id,
            order_number: format!("ORD-{:03}", id),
            items: Vec::new(),
            total_amount: 425.0,
            status: "pending".into(),
        }
    }

    #[test]
    fn failed_fetch_leaves_its_collection_untouched() {
        let state = AppState::new();
        state.orders.replace_all(vec![order(1), order(2)]);

        let all_loaded = apply_loaded(
            &state,
            Ok(vec![product(10, "Basmati Rice")]),
            Err(ApiError::Network("backend down".into())),
            Ok(Vec::new()),
            Ok(Vec::new()),
            Ok(Vec::new()),
        );

        assert!(!all_loaded);
        // Las colecciones con fetch exitoso sí se reemplazan
        assert_eq!(state.products.len(), 1);
        assert_eq!(state.products.items()[0].name, "Basmati Rice");
        // La colección cuyo fetch falló conserva lo que tenía
        assert_eq!(state.orders.len(), 2);
        assert_eq!(state.orders.items()[0].order_number, "ORD-001");
        // Exactamente un toast de error
        assert_eq!(state.toasts.items().len(), 1);
    }

    #[test]
    fn multiple_failures_surface_a_single_toast() {
        let state = AppState::new();

        let all_loaded = apply_loaded(
            &state,
            Err(ApiError::Network("backend down".into())),
            Err(ApiError::Server {
                status: 500,
                message: "boom".into(),
            }),
            Ok(Vec::new()),
            Ok(Vec::new()),
            Err(ApiError::Decode("not a list".into())),
        );

        assert!(!all_loaded);
        assert_eq!(state.toasts.items().len(), 1);
    }

    #[test]
    fn clean_bulk_load_replaces_everything() {
        let state = AppState::new();
        state.products.replace_all(vec![product(1, "Old")]);

        let all_loaded = apply_loaded(
            &state,
            Ok(vec![product(2, "Wheat"), product(3, "Sugar")]),
            Ok(Vec::new()),
            Ok(Vec::new()),
            Ok(Vec::new()),
            Ok(Vec::new()),
        );

        assert!(all_loaded);
        assert_eq!(state.products.len(), 2);
        assert!(state.toasts.items().is_empty());
    }
}
