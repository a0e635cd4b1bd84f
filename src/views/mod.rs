pub mod adjustments;
pub mod app;
pub mod chips;
pub mod dashboard;
pub mod deliveries;
pub mod login;
pub mod orders;
pub mod products;
pub mod receipts;
pub mod sidebar;
pub mod toast;
pub mod topbar;
pub mod transfers;
pub mod warehouses;

pub use adjustments::render_adjustments;
pub use app::render_app;
pub use dashboard::render_dashboard;
pub use deliveries::render_deliveries;
pub use login::render_login;
pub use orders::render_orders;
pub use products::render_products;
pub use receipts::render_receipts;
pub use sidebar::render_sidebar;
pub use toast::{refresh_toasts, render_toasts};
pub use topbar::render_topbar;
pub use transfers::render_transfers;
pub use warehouses::render_warehouses;
