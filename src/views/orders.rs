// ============================================================================
// ORDERS VIEW - Órdenes de compra (creadas desde la página de productos)
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, on_click, ElementBuilder};
use crate::models::Order;
use crate::state::AppState;
use crate::utils::format_inr;
use crate::viewmodels::InventoryViewModel;

pub fn render_orders(state: &AppState) -> Result<Element, JsValue> {
    let page = ElementBuilder::new("div")?.class("page orders").build();

    let orders = state.orders.items();
    if orders.is_empty() {
        let empty = ElementBuilder::new("p")?
            .class("empty-state")
            .text("No orders yet. Buy a product to create one.")
            .build();
        append_child(&page, &empty)?;
        return Ok(page);
    }

    let table = ElementBuilder::new("table")?.class("data-table").build();
    let head = ElementBuilder::new("thead")?
        .html(
            "<tr><th>Order #</th><th>Items</th><th>Total</th>\
             <th>Status</th><th>Actions</th></tr>",
        )
        .build();
    append_child(&table, &head)?;

    let body = ElementBuilder::new("tbody")?.build();
    for order in orders {
        append_child(&body, &render_row(state, &order)?)?;
    }
    append_child(&table, &body)?;
    append_child(&page, &table)?;
    Ok(page)
}

fn render_row(state: &AppState, order: &Order) -> Result<Element, JsValue> {
    let row = ElementBuilder::new("tr")?.build();
    row.set_inner_html(&format!(
        "<td>{}</td><td>{}</td><td>{}</td>\
         <td><span class=\"status-badge status-{}\">{}</span></td>",
        order.order_number,
        order.items.len(),
        format_inr(order.total_amount),
        order.status,
        order.status
    ));

    let actions = ElementBuilder::new("td")?.class("row-actions").build();
    if order.status == "pending" {
        let complete = ElementBuilder::new("button")?
            .class("btn-small")
            .text("Complete")
            .build();
        let state = state.clone();
        let id = order.id;
        on_click(&complete, move |_| {
            let state = state.clone();
            spawn_local(async move {
                let _ = InventoryViewModel::new().complete_order(&state, id).await;
            });
        })?;
        append_child(&actions, &complete)?;
    }
    append_child(&row, &actions)?;
    Ok(row)
}
