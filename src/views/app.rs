// ============================================================================
// APP VIEW - Composición del shell (sidebar + topbar + página activa)
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, ElementBuilder};
use crate::state::{AppState, Page};
use crate::views::{
    render_adjustments, render_dashboard, render_deliveries, render_login, render_orders,
    render_products, render_receipts, render_sidebar, render_toasts, render_topbar,
    render_transfers, render_warehouses,
};

/// Punto de entrada de la capa de vistas: login o shell completo
pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    let root = ElementBuilder::new("div")?.class("app-root").build();

    if !state.auth.is_logged_in() {
        append_child(&root, &render_login(state)?)?;
        append_child(&root, &render_toasts(state)?)?;
        return Ok(root);
    }

    append_child(&root, &render_sidebar(state)?)?;

    let main = ElementBuilder::new("div")?.class("main-area").build();
    append_child(&main, &render_topbar(state)?)?;

    let page = *state.active_page.borrow();
    let content = match page {
        Page::Dashboard => render_dashboard(state)?,
        Page::Products => render_products(state)?,
        Page::Warehouses => render_warehouses(state)?,
        Page::Orders => render_orders(state)?,
        Page::Deliveries => render_deliveries(state)?,
        Page::Transfers => render_transfers(state)?,
        Page::Receipts => render_receipts(state)?,
        Page::Adjustments => render_adjustments(state)?,
    };
    append_child(&main, &content)?;
    append_child(&root, &main)?;

    append_child(&root, &render_toasts(state)?)?;
    Ok(root)
}
