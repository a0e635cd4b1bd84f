// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// Una función tipada por (recurso, verbo). Cada request lleva el bearer token
// de la sesión si existe. Un 401 de CUALQUIER llamada limpia la sesión y
// fuerza navegación a /login: efecto global, exactamente una vez aunque
// varias llamadas en vuelo reciban 401 a la vez.
// ============================================================================

use crate::models::{
    AuthResponse, DashboardStats, Delivery, DocumentStatus, LoginRequest, NewDelivery, NewOrder,
    NewProduct, NewTransfer, NewWarehouse, Notification, Order, Product, RegisterRequest,
    Transfer, User, Warehouse,
};
use crate::utils::{load_raw_from_storage, API_BASE_URL, STORAGE_KEY_TOKEN};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::cell::Cell;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Sin respuesta del servidor (red caída, backend apagado)
    #[error("Cannot connect to server. Please ensure the backend is running.")]
    Network(String),
    /// HTTP 401: fatal para la sesión, manejado globalmente
    #[error("Session expired. Please log in again.")]
    Unauthorized,
    /// Cualquier otro error HTTP, con el mensaje del backend si lo hay
    #[error("{message}")]
    Server { status: u16, message: String },
    /// La respuesta no parsea al modelo esperado
    #[error("Unexpected response from server: {0}")]
    Decode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

thread_local! {
    // Latch del manejo global de 401: solo la primera llamada que lo observa
    // dispara la limpieza de sesión.
    static UNAUTHORIZED_LATCH: Cell<bool> = const { Cell::new(false) };
}

/// Cerrar el latch. Devuelve `true` solo para el primer 401 observado.
pub(crate) fn begin_unauthorized() -> bool {
    UNAUTHORIZED_LATCH.with(|latch| {
        if latch.get() {
            false
        } else {
            latch.set(true);
            true
        }
    })
}

#[cfg(test)]
pub(crate) fn reset_unauthorized_latch() {
    UNAUTHORIZED_LATCH.with(|latch| latch.set(false));
}

/// Manejo global de 401: limpiar sesión, tirar el canal y navegar a /login.
/// Idempotente bajo 401 concurrentes gracias al latch.
fn handle_unauthorized() {
    if !begin_unauthorized() {
        return;
    }
    log::warn!("🔒 401 recibido: limpiando sesión y redirigiendo a /login");

    #[cfg(target_arch = "wasm32")]
    {
        use crate::utils::{remove_from_storage, STORAGE_KEY_USER};
        let _ = remove_from_storage(STORAGE_KEY_USER);
        let _ = remove_from_storage(STORAGE_KEY_TOKEN);
        crate::services::socket_service::disconnect();
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/login");
        }
    }
}

/// Cuerpo de error del backend: `{ "error": … }` o `{ "message": … }`
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Serialize)]
struct StatusPayload<S: Serialize> {
    status: S,
}

#[derive(Clone)]
pub struct ApiClient;

impl ApiClient {
    pub fn new() -> Self {
        Self
    }

    fn url(path: &str) -> String {
        format!("{}{}", API_BASE_URL, path)
    }

    /// Adjuntar el bearer token persistido, si hay sesión
    fn with_auth(builder: RequestBuilder) -> RequestBuilder {
        match load_raw_from_storage(STORAGE_KEY_TOKEN) {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    /// Chequeo uniforme de toda respuesta: 401 es global, el resto vuelve al
    /// llamador sin tocar.
    async fn check(response: Response) -> ApiResult<Response> {
        if response.status() == 401 {
            handle_unauthorized();
            return Err(ApiError::Unauthorized);
        }
        if !response.ok() {
            let status = response.status();
            let message = match response.json::<ErrorBody>().await {
                Ok(body) => body
                    .error
                    .or(body.message)
                    .unwrap_or_else(|| format!("HTTP {}", status)),
                Err(_) => format!("HTTP {}", status),
            };
            return Err(ApiError::Server { status, message });
        }
        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = Self::with_auth(Request::get(&Self::url(path)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = Self::check(response).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn send_json<B: Serialize, T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        body: &B,
    ) -> ApiResult<T> {
        let request = Self::with_auth(builder)
            .json(body)
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = Self::check(response).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Request sin cuerpo cuya respuesta no nos interesa (delete, mark-read)
    async fn send_empty(&self, builder: RequestBuilder) -> ApiResult<()> {
        let response = Self::with_auth(builder)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::check(response).await?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Auth
    // ------------------------------------------------------------------

    pub async fn register(&self, payload: &RegisterRequest) -> ApiResult<AuthResponse> {
        self.send_json(Request::post(&Self::url("/auth/register")), payload)
            .await
    }

    pub async fn login(&self, payload: &LoginRequest) -> ApiResult<AuthResponse> {
        self.send_json(Request::post(&Self::url("/auth/login")), payload)
            .await
    }

    pub async fn get_me(&self) -> ApiResult<User> {
        self.get_json("/auth/me").await
    }

    // ------------------------------------------------------------------
    // Products
    // ------------------------------------------------------------------

    pub async fn get_products(&self) -> ApiResult<Vec<Product>> {
        self.get_json("/products").await
    }

    pub async fn create_product(&self, payload: &NewProduct) -> ApiResult<Product> {
        self.send_json(Request::post(&Self::url("/products")), payload)
            .await
    }

    pub async fn update_product(&self, id: i64, payload: &NewProduct) -> ApiResult<Product> {
        self.send_json(Request::put(&Self::url(&format!("/products/{}", id))), payload)
            .await
    }

    pub async fn delete_product(&self, id: i64) -> ApiResult<()> {
        self.send_empty(Request::delete(&Self::url(&format!("/products/{}", id))))
            .await
    }

    // ------------------------------------------------------------------
    // Warehouses
    // ------------------------------------------------------------------

    pub async fn get_warehouses(&self) -> ApiResult<Vec<Warehouse>> {
        self.get_json("/warehouses").await
    }

    pub async fn create_warehouse(&self, payload: &NewWarehouse) -> ApiResult<Warehouse> {
        self.send_json(Request::post(&Self::url("/warehouses")), payload)
            .await
    }

    pub async fn update_warehouse(&self, id: i64, payload: &NewWarehouse) -> ApiResult<Warehouse> {
        self.send_json(
            Request::put(&Self::url(&format!("/warehouses/{}", id))),
            payload,
        )
        .await
    }

    pub async fn delete_warehouse(&self, id: i64) -> ApiResult<()> {
        self.send_empty(Request::delete(&Self::url(&format!("/warehouses/{}", id))))
            .await
    }

    // ------------------------------------------------------------------
    // Orders
    // ------------------------------------------------------------------

    pub async fn get_orders(&self) -> ApiResult<Vec<Order>> {
        self.get_json("/orders").await
    }

    pub async fn create_order(&self, payload: &NewOrder) -> ApiResult<Order> {
        self.send_json(Request::post(&Self::url("/orders")), payload)
            .await
    }

    pub async fn update_order_status(&self, id: i64, status: &str) -> ApiResult<Order> {
        self.send_json(
            Request::patch(&Self::url(&format!("/orders/{}/status", id))),
            &StatusPayload { status },
        )
        .await
    }

    // ------------------------------------------------------------------
    // Deliveries
    // ------------------------------------------------------------------

    pub async fn get_deliveries(&self) -> ApiResult<Vec<Delivery>> {
        self.get_json("/deliveries").await
    }

    pub async fn create_delivery(&self, payload: &NewDelivery) -> ApiResult<Delivery> {
        self.send_json(Request::post(&Self::url("/deliveries")), payload)
            .await
    }

    pub async fn update_delivery_status(
        &self,
        id: i64,
        status: DocumentStatus,
    ) -> ApiResult<Delivery> {
        self.send_json(
            Request::patch(&Self::url(&format!("/deliveries/{}/status", id))),
            &StatusPayload { status },
        )
        .await
    }

    // ------------------------------------------------------------------
    // Transfers
    // ------------------------------------------------------------------

    pub async fn get_transfers(&self) -> ApiResult<Vec<Transfer>> {
        self.get_json("/transfers").await
    }

    pub async fn create_transfer(&self, payload: &NewTransfer) -> ApiResult<Transfer> {
        self.send_json(Request::post(&Self::url("/transfers")), payload)
            .await
    }

    pub async fn update_transfer_status(
        &self,
        id: i64,
        status: DocumentStatus,
    ) -> ApiResult<Transfer> {
        self.send_json(
            Request::patch(&Self::url(&format!("/transfers/{}/status", id))),
            &StatusPayload { status },
        )
        .await
    }

    // ------------------------------------------------------------------
    // Notifications
    // ------------------------------------------------------------------

    pub async fn get_notifications(&self) -> ApiResult<Vec<Notification>> {
        self.get_json("/notifications").await
    }

    pub async fn mark_notification_read(&self, id: i64) -> ApiResult<()> {
        self.send_empty(Request::patch(
            &Self::url(&format!("/notifications/{}/read", id)),
        ))
        .await
    }

    pub async fn mark_all_notifications_read(&self) -> ApiResult<()> {
        self.send_empty(Request::post(&Self::url("/notifications/mark-all-read")))
            .await
    }

    // ------------------------------------------------------------------
    // Dashboard
    // ------------------------------------------------------------------

    pub async fn get_dashboard_stats(&self) -> ApiResult<DashboardStats> {
        self.get_json("/dashboard/stats").await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_latch_fires_exactly_once() {
        reset_unauthorized_latch();
        // Dos llamadas en vuelo reciben 401 "a la vez": solo la primera
        // dispara la limpieza global.
        assert!(begin_unauthorized());
        assert!(!begin_unauthorized());
        assert!(!begin_unauthorized());
        reset_unauthorized_latch();
        assert!(begin_unauthorized());
        reset_unauthorized_latch();
    }

    #[test]
    fn error_messages_are_user_facing() {
        let err = ApiError::Network("fetch failed".into());
        assert_eq!(
            err.to_string(),
            "Cannot connect to server. Please ensure the backend is running."
        );
        let err = ApiError::Server {
            status: 400,
            message: "SKU already exists".into(),
        };
        assert_eq!(err.to_string(), "SKU already exists");
    }
}
