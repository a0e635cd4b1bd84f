// ============================================================================
// DELIVERIES VIEW - Órdenes de entrega y avance de estado
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, clear_input, input_value, on_click, on_submit, ElementBuilder};
use crate::models::{Delivery, DocumentStatus, NewDelivery, ToastKind};
use crate::state::AppState;
use crate::viewmodels::LogisticsViewModel;

pub fn render_deliveries(state: &AppState) -> Result<Element, JsValue> {
    let page = ElementBuilder::new("div")?.class("page deliveries").build();
    append_child(&page, &render_form(state)?)?;
    append_child(&page, &super::chips::render_status_chips(state)?)?;
    append_child(&page, &render_table(state)?)?;
    Ok(page)
}

fn render_form(state: &AppState) -> Result<Element, JsValue> {
    let form = crate::dom::create_element("form")?;
    form.set_class_name("inline-form");

    for (id, placeholder, input_type) in [
        ("delivery-customer", "Customer", "text"),
        ("delivery-product", "Product", "text"),
        ("delivery-quantity", "Quantity", "number"),
        ("delivery-date", "Date", "date"),
    ] {
        let input = ElementBuilder::new("input")?
            .id(id)?
            .attr("type", input_type)?
            .attr("placeholder", placeholder)?
            .build();
        append_child(&form, &input)?;
    }

    let submit = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class("btn-primary")
        .text("Create Delivery")
        .build();
    append_child(&form, &submit)?;

    let state = state.clone();
    on_submit(&form, move || {
        let customer = input_value("delivery-customer");
        let product = input_value("delivery-product");
        if customer.is_empty() || product.is_empty() {
            state
                .toasts
                .show("Customer and product are required", ToastKind::Warning);
            return;
        }
        let payload = NewDelivery {
            customer,
            product,
            quantity: input_value("delivery-quantity").parse().unwrap_or(0),
            date: input_value("delivery-date"),
        };
        for id in [
            "delivery-customer",
            "delivery-product",
            "delivery-quantity",
            "delivery-date",
        ] {
            clear_input(id);
        }
        let state = state.clone();
        spawn_local(async move {
            let _ = LogisticsViewModel::new().create_delivery(&state, payload).await;
        });
    })?;

    Ok(form)
}

fn render_table(state: &AppState) -> Result<Element, JsValue> {
    let filter = *state.status_filter.borrow();
    let deliveries: Vec<Delivery> = state
        .deliveries
        .items()
        .into_iter()
        .filter(|d| filter.map_or(true, |f| d.status == f))
        .collect();
    if deliveries.is_empty() {
        let empty = ElementBuilder::new("p")?
            .class("empty-state")
            .text("No deliveries found for this filter.")
            .build();
        return Ok(empty);
    }

    let table = ElementBuilder::new("table")?.class("data-table").build();
    let head = ElementBuilder::new("thead")?
        .html(
            "<tr><th>Tracking #</th><th>Customer</th><th>Product</th>\
             <th>Qty</th><th>Date</th><th>Status</th><th>Actions</th></tr>",
        )
        .build();
    append_child(&table, &head)?;

    let body = ElementBuilder::new("tbody")?.build();
    for delivery in deliveries {
        append_child(&body, &render_row(state, &delivery)?)?;
    }
    append_child(&table, &body)?;
    Ok(table)
}

fn render_row(state: &AppState, delivery: &Delivery) -> Result<Element, JsValue> {
    let row = ElementBuilder::new("tr")?.build();
    row.set_inner_html(&format!(
        "<td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td>\
         <td><span class=\"status-badge status-{}\">{}</span></td>",
        delivery.tracking_number,
        delivery.customer,
        delivery.product,
        delivery.quantity,
        delivery.date,
        delivery.status,
        delivery.status
    ));

    let actions = ElementBuilder::new("td")?.class("row-actions").build();
    match delivery.status {
        DocumentStatus::Draft | DocumentStatus::Waiting => {
            let ready = ElementBuilder::new("button")?
                .class("btn-small")
                .text("Mark Ready")
                .build();
            let state = state.clone();
            let id = delivery.id;
            on_click(&ready, move |_| {
                let state = state.clone();
                spawn_local(async move {
                    let _ = LogisticsViewModel::new().mark_delivery_ready(&state, id).await;
                });
            })?;
            append_child(&actions, &ready)?;
        }
        DocumentStatus::Ready => {
            let ship = ElementBuilder::new("button")?
                .class("btn-small btn-primary")
                .text("Ship")
                .build();
            let state = state.clone();
            let id = delivery.id;
            on_click(&ship, move |_| {
                let state = state.clone();
                spawn_local(async move {
                    let _ = LogisticsViewModel::new().ship_delivery(&state, id).await;
                });
            })?;
            append_child(&actions, &ship)?;
        }
        DocumentStatus::Done => {}
    }
    append_child(&row, &actions)?;
    Ok(row)
}
