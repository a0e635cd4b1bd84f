// ============================================================================
// VIEWMODELS - Lógica de presentación (patrón MVVM)
// ============================================================================

pub mod auth_viewmodel;
pub mod inventory_viewmodel;
pub mod logistics_viewmodel;
pub mod notifications_viewmodel;

pub use auth_viewmodel::AuthViewModel;
pub use inventory_viewmodel::InventoryViewModel;
pub use logistics_viewmodel::LogisticsViewModel;
pub use notifications_viewmodel::NotificationsViewModel;
