// ============================================================================
// NOTIFICATIONS VIEWMODEL - Lectura de notificaciones en dos fases
// ============================================================================
// Primero el servidor, después la colección local; si la llamada falla la
// campana no cambia y el usuario ve el toast de error.
// ============================================================================

use crate::models::ToastKind;
use crate::services::{ApiClient, ApiError, ApiResult};
use crate::state::AppState;

pub struct NotificationsViewModel {
    api: ApiClient,
}

impl NotificationsViewModel {
    pub fn new() -> Self {
        Self {
            api: ApiClient::new(),
        }
    }

    fn report(state: &AppState, error: &ApiError) {
        if !matches!(error, ApiError::Unauthorized) {
            state.toasts.show(error.to_string(), ToastKind::Error);
        }
    }

    pub async fn mark_read(&self, state: &AppState, id: i64) -> ApiResult<()> {
        match self.api.mark_notification_read(id).await {
            Ok(()) => {
                state.notifications.modify(id, |n| n.read = true);
                state.notify_subscribers();
                Ok(())
            }
            Err(e) => {
                Self::report(state, &e);
                Err(e)
            }
        }
    }

    pub async fn mark_all_read(&self, state: &AppState) -> ApiResult<()> {
        match self.api.mark_all_notifications_read().await {
            Ok(()) => {
                state.notifications.modify_all(|n| n.read = true);
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

impl Default for NotificationsViewModel {
    fn default() -> Self {
        Self::new()
    }
}
