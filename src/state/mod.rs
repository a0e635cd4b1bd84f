// ============================================================================
// STATE MODULE - State Management con Rc<RefCell> + notificaciones
// ============================================================================

pub mod app_state;
pub mod auth_state;
pub mod collections;
pub mod sync;
pub mod toast_state;

pub use app_state::{AppState, Page};
pub use auth_state::AuthState;
pub use collections::Collection;
pub use sync::apply_event;
pub use toast_state::ToastState;
