pub mod adjustment;
pub mod dashboard;
pub mod delivery;
pub mod events;
pub mod notification;
pub mod order;
pub mod product;
pub mod receipt;
pub mod status;
pub mod toast;
pub mod transfer;
pub mod user;
pub mod warehouse;

pub use adjustment::Adjustment;
pub use dashboard::DashboardStats;
pub use delivery::{Delivery, NewDelivery};
pub use events::{DomainEvent, EventEnvelope};
pub use notification::{Notification, NotificationKind};
pub use order::{NewOrder, Order, OrderItem};
pub use product::{NewProduct, Product, StockStatus};
pub use receipt::Receipt;
pub use status::DocumentStatus;
pub use toast::{Toast, ToastKind};
pub use transfer::{NewTransfer, Transfer};
pub use user::{AuthResponse, LoginRequest, RegisterRequest, Role, User};
pub use warehouse::{NewWarehouse, Warehouse};

/// Entidad con identidad asignada por el servidor, única dentro de su
/// colección.
pub trait Identified {
    fn entity_id(&self) -> i64;
}

/// Documento con estado de avance monótono (Draft → Waiting/Ready → Done).
pub trait Tracked: Identified {
    fn status(&self) -> DocumentStatus;
}
