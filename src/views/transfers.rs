// ============================================================================
// TRANSFERS VIEW - Traslados entre almacenes
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, clear_input, input_value, on_click, on_submit, ElementBuilder};
use crate::models::{DocumentStatus, NewTransfer, ToastKind, Transfer};
use crate::state::AppState;
use crate::viewmodels::LogisticsViewModel;

pub fn render_transfers(state: &AppState) -> Result<Element, JsValue> {
    let page = ElementBuilder::new("div")?.class("page transfers").build();
    append_child(&page, &render_form(state)?)?;
    append_child(&page, &super::chips::render_status_chips(state)?)?;
    append_child(&page, &render_table(state)?)?;
    Ok(page)
}

fn render_form(state: &AppState) -> Result<Element, JsValue> {
    let form = crate::dom::create_element("form")?;
    form.set_class_name("inline-form");

    for (id, placeholder, input_type) in [
        ("transfer-product", "Product", "text"),
        ("transfer-quantity", "Quantity", "number"),
        ("transfer-from", "From warehouse", "text"),
        ("transfer-to", "To warehouse", "text"),
        ("transfer-date", "Date", "date"),
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
        .text("Create Transfer")
        .build();
    append_child(&form, &submit)?;

    let state = state.clone();
    on_submit(&form, move || {
        let product = input_value("transfer-product");
        let from = input_value("transfer-from");
        let to = input_value("transfer-to");
        if product.is_empty() || from.is_empty() || to.is_empty() {
            state
                .toasts
                .show("Please fill in all fields", ToastKind::Warning);
            return;
        }
        // Validación de vista: origen y destino distintos
        if from == to {
            state.toasts.show(
                "Source and destination cannot be the same!",
                ToastKind::Error,
            );
            return;
        }
        let payload = NewTransfer {
            product,
            quantity: input_value("transfer-quantity").parse().unwrap_or(0),
            from_warehouse: from,
            to_warehouse: to,
            date: input_value("transfer-date"),
        };
        for id in [
            "transfer-product",
            "transfer-quantity",
            "transfer-from",
            "transfer-to",
            "transfer-date",
        ] {
            clear_input(id);
        }
        let state = state.clone();
        spawn_local(async move {
            let _ = LogisticsViewModel::new().create_transfer(&state, payload).await;
        });
    })?;

    Ok(form)
}

fn render_table(state: &AppState) -> Result<Element, JsValue> {
    let filter = *state.status_filter.borrow();
    let transfers: Vec<Transfer> = state
        .transfers
        .items()
        .into_iter()
        .filter(|t| filter.map_or(true, |f| t.status == f))
        .collect();
    if transfers.is_empty() {
        let empty = ElementBuilder::new("p")?
            .class("empty-state")
            .text("No transfers found for this filter.")
            .build();
        return Ok(empty);
    }

    let table = ElementBuilder::new("table")?.class("data-table").build();
    let head = ElementBuilder::new("thead")?
        .html(
            "<tr><th>Ref</th><th>Product</th><th>Qty</th><th>From</th>\
             <th>To</th><th>Date</th><th>Status</th><th>Actions</th></tr>",
        )
        .build();
    append_child(&table, &head)?;

    let body = ElementBuilder::new("tbody")?.build();
    for transfer in transfers {
        append_child(&body, &render_row(state, &transfer)?)?;
    }
    append_child(&table, &body)?;
    Ok(table)
}

fn render_row(state: &AppState, transfer: &Transfer) -> Result<Element, JsValue> {
    let row = ElementBuilder::new("tr")?.build();
    row.set_inner_html(&format!(
        "<td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td>\
         <td><span class=\"status-badge status-{}\">{}</span></td>",
        transfer.ref_id,
        transfer.product,
        transfer.quantity,
        transfer.from_warehouse,
        transfer.to_warehouse,
        transfer.date,
        transfer.status,
        transfer.status
    ));

    let actions = ElementBuilder::new("td")?.class("row-actions").build();
    let next = match transfer.status {
        DocumentStatus::Draft | DocumentStatus::Waiting => {
            Some((DocumentStatus::Ready, "Mark Ready"))
        }
        DocumentStatus::Ready => Some((DocumentStatus::Done, "Complete")),
        DocumentStatus::Done => None,
    };
    if let Some((status, label)) = next {
        let button = ElementBuilder::new("button")?
            .class("btn-small")
            .text(label)
            .build();
        let state = state.clone();
        let id = transfer.id;
        on_click(&button, move |_| {
            let state = state.clone();
            spawn_local(async move {
                let _ = LogisticsViewModel::new()
                    .advance_transfer(&state, id, status)
                    .await;
            });
        })?;
        append_child(&actions, &button)?;
    }
    append_child(&row, &actions)?;
    Ok(row)
}
