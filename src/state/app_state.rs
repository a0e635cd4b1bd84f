// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================
// Dueño único de todas las colecciones: toda mutación pasa por aquí o por el
// Synchronizer, las vistas solo leen y se suscriben a cambios.
// ============================================================================

use crate::models::{
    Adjustment, DashboardStats, Delivery, DocumentStatus, Notification, Order, Product, Receipt,
    Transfer, Warehouse,
};
use crate::state::{AuthState, Collection, ToastState};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthState,

    // Colecciones sincronizadas contra el servidor
    pub products: Collection<Product>,
    pub orders: Collection<Order>,
    pub deliveries: Collection<Delivery>,
    pub transfers: Collection<Transfer>,
    pub notifications: Collection<Notification>,

    // Colecciones solo-cliente (páginas de recepciones y ajustes)
    pub receipts: Collection<Receipt>,
    pub adjustments: Collection<Adjustment>,

    // Cache de almacenes: se pide al entrar a la página, no en el bulk load
    pub warehouses: Collection<Warehouse>,
    pub warehouses_loaded: Rc<Cell<bool>>,

    pub dashboard_stats: Rc<RefCell<Option<DashboardStats>>>,
    pub toasts: ToastState,

    // Estado de UI (navegación, desplegables, fila en edición)
    pub active_page: Rc<RefCell<Page>>,
    pub show_notifications: Rc<RefCell<bool>>,
    pub editing_product: Rc<RefCell<Option<i64>>>,
    /// Chip de filtro activo en deliveries/transfers (`None` = "All")
    pub status_filter: Rc<RefCell<Option<DocumentStatus>>>,

    // Reactividad: callbacks registrados por la capa de vistas
    change_subscribers: Rc<RefCell<Vec<Rc<dyn Fn()>>>>,
}

/// Página activa del shell
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Page {
    Dashboard,
    Products,
    Warehouses,
    Orders,
    Deliveries,
    Transfers,
    Receipts,
    Adjustments,
}

impl Page {
    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Products => "Products",
            Page::Warehouses => "Warehouses",
            Page::Orders => "Orders",
            Page::Deliveries => "Deliveries",
            Page::Transfers => "Transfers",
            Page::Receipts => "Receipts",
            Page::Adjustments => "Adjustments",
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            auth: AuthState::new(),
            products: Collection::new(),
            orders: Collection::new(),
            deliveries: Collection::new(),
            transfers: Collection::new(),
            notifications: Collection::new(),
            receipts: Collection::new(),
            adjustments: Collection::new(),
            warehouses: Collection::new(),
            warehouses_loaded: Rc::new(Cell::new(false)),
            dashboard_stats: Rc::new(RefCell::new(None)),
            toasts: ToastState::new(),
            active_page: Rc::new(RefCell::new(Page::Dashboard)),
            show_notifications: Rc::new(RefCell::new(false)),
            editing_product: Rc::new(RefCell::new(None)),
            status_filter: Rc::new(RefCell::new(None)),
            change_subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn set_dashboard_stats(&self, stats: Option<DashboardStats>) {
        *self.dashboard_stats.borrow_mut() = stats;
    }

    pub fn dashboard_stats(&self) -> Option<DashboardStats> {
        self.dashboard_stats.borrow().clone()
    }

    pub fn unread_notifications(&self) -> usize {
        self.notifications
            .items()
            .iter()
            .filter(|n| !n.read)
            .count()
    }

    /// Vaciar todas las colecciones (logout o 401). La sesión se limpia
    /// aparte en `AuthState`.
    pub fn clear_collections(&self) {
        self.products.clear();
        self.orders.clear();
        self.deliveries.clear();
        self.transfers.clear();
        self.notifications.clear();
        self.receipts.clear();
        self.adjustments.clear();
        self.warehouses.clear();
        self.warehouses_loaded.set(false);
        *self.dashboard_stats.borrow_mut() = None;
        *self.editing_product.borrow_mut() = None;
    }

    pub fn navigate(&self, page: Page) {
        *self.active_page.borrow_mut() = page;
        *self.show_notifications.borrow_mut() = false;
        *self.editing_product.borrow_mut() = None;
        *self.status_filter.borrow_mut() = None;
        self.notify_subscribers();
    }

    pub fn set_status_filter(&self, filter: Option<DocumentStatus>) {
        *self.status_filter.borrow_mut() = filter;
        self.notify_subscribers();
    }

    pub fn toggle_notifications(&self) {
        let current = *self.show_notifications.borrow();
        *self.show_notifications.borrow_mut() = !current;
        self.notify_subscribers();
    }

    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    pub fn notify_subscribers(&self) {
        let subscribers = self.change_subscribers.borrow().clone();
        for callback in subscribers.iter() {
            callback();
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigate_resets_page_ui_state() {
        let state = AppState::new();
        *state.show_notifications.borrow_mut() = true;
        *state.editing_product.borrow_mut() = Some(7);
        state.set_status_filter(Some(DocumentStatus::Ready));

        state.navigate(Page::Transfers);

        assert_eq!(*state.active_page.borrow(), Page::Transfers);
        assert!(!*state.show_notifications.borrow());
        assert_eq!(*state.editing_product.borrow(), None);
        assert_eq!(*state.status_filter.borrow(), None);
    }

    #[test]
    fn navigate_notifies_subscribers() {
        let state = AppState::new();
        let fired = Rc::new(Cell::new(0u32));
        let counter = fired.clone();
        state.subscribe_to_changes(move || counter.set(counter.get() + 1));

        state.navigate(Page::Products);
        state.set_status_filter(Some(DocumentStatus::Done));

        assert_eq!(fired.get(), 2);
    }
}
