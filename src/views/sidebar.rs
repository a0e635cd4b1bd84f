// ============================================================================
// SIDEBAR VIEW - Navegación principal
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, on_click, ElementBuilder};
use crate::state::{AppState, Page};

const NAV_ITEMS: [(Page, &str, &str); 8] = [
    (Page::Dashboard, "📊", "Dashboard"),
    (Page::Products, "📦", "Products"),
    (Page::Warehouses, "🏭", "Warehouses"),
    (Page::Orders, "🧾", "Orders"),
    (Page::Deliveries, "🚚", "Deliveries"),
    (Page::Transfers, "🔄", "Transfers"),
    (Page::Receipts, "📥", "Receipts"),
    (Page::Adjustments, "📝", "Adjustments"),
];

pub fn render_sidebar(state: &AppState) -> Result<Element, JsValue> {
    let sidebar = ElementBuilder::new("nav")?.class("sidebar").build();

    let brand = ElementBuilder::new("div")?
        .class("sidebar-brand")
        .text("StockMaster")
        .build();
    append_child(&sidebar, &brand)?;

    let active = *state.active_page.borrow();
    for (page, icon, label) in NAV_ITEMS {
        let class = if page == active {
            "nav-item active"
        } else {
            "nav-item"
        };
        let item = ElementBuilder::new("button")?
            .class(class)
            .html(&format!(
                "<span class=\"nav-icon\">{}</span><span class=\"nav-label\">{}</span>",
                icon, label
            ))
            .build();

        let state = state.clone();
        on_click(&item, move |_| {
            state.navigate(page);
        })?;
        append_child(&sidebar, &item)?;
    }

    Ok(sidebar)
}
