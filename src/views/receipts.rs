// ============================================================================
// RECEIPTS VIEW - Recepciones de mercancía (solo-cliente)
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, clear_input, input_value, on_click, on_submit, ElementBuilder};
use crate::models::{DocumentStatus, Receipt, ToastKind};
use crate::state::AppState;
use crate::viewmodels::LogisticsViewModel;

pub fn render_receipts(state: &AppState) -> Result<Element, JsValue> {
    let page = ElementBuilder::new("div")?.class("page receipts").build();
    append_child(&page, &render_form(state)?)?;
    append_child(&page, &render_table(state)?)?;
    Ok(page)
}

fn render_form(state: &AppState) -> Result<Element, JsValue> {
    let form = crate::dom::create_element("form")?;
    form.set_class_name("inline-form");

    for (id, placeholder, input_type) in [
        ("receipt-supplier", "Supplier", "text"),
        ("receipt-product", "Product", "text"),
        ("receipt-quantity", "Quantity", "number"),
        ("receipt-date", "Date", "date"),
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
        .text("Add Receipt")
        .build();
    append_child(&form, &submit)?;

    let state = state.clone();
    on_submit(&form, move || {
        let supplier = input_value("receipt-supplier");
        let product = input_value("receipt-product");
        if supplier.is_empty() || product.is_empty() {
            state
                .toasts
                .show("Supplier and product are required", ToastKind::Warning);
            return;
        }
        LogisticsViewModel::new().add_receipt(
            &state,
            supplier,
            product,
            input_value("receipt-quantity").parse().unwrap_or(0),
            input_value("receipt-date"),
        );
        for id in [
            "receipt-supplier",
            "receipt-product",
            "receipt-quantity",
            "receipt-date",
        ] {
            clear_input(id);
        }
    })?;

    Ok(form)
}

fn render_table(state: &AppState) -> Result<Element, JsValue> {
    let receipts = state.receipts.items();
    if receipts.is_empty() {
        let empty = ElementBuilder::new("p")?
            .class("empty-state")
            .text("No receipts recorded.")
            .build();
        return Ok(empty);
    }

    let table = ElementBuilder::new("table")?.class("data-table").build();
    let head = ElementBuilder::new("thead")?
        .html(
            "<tr><th>Ref</th><th>Supplier</th><th>Product</th>\
             <th>Qty</th><th>Date</th><th>Status</th><th>Actions</th></tr>",
        )
        .build();
    append_child(&table, &head)?;

    let body = ElementBuilder::new("tbody")?.build();
    for receipt in receipts {
        append_child(&body, &render_row(state, &receipt)?)?;
    }
    append_child(&table, &body)?;
    Ok(table)
}

fn render_row(state: &AppState, receipt: &Receipt) -> Result<Element, JsValue> {
    let row = ElementBuilder::new("tr")?.build();
    row.set_inner_html(&format!(
        "<td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td>\
         <td><span class=\"status-badge status-{}\">{}</span></td>",
        receipt.ref_id,
        receipt.supplier,
        receipt.product,
        receipt.quantity,
        receipt.date,
        receipt.status,
        receipt.status
    ));

    let actions = ElementBuilder::new("td")?.class("row-actions").build();
    let next = match receipt.status {
        DocumentStatus::Draft => Some((DocumentStatus::Waiting, "Confirm")),
        DocumentStatus::Waiting | DocumentStatus::Ready => {
            Some((DocumentStatus::Done, "Receive"))
        }
        DocumentStatus::Done => None,
    };
    if let Some((status, label)) = next {
        let button = ElementBuilder::new("button")?
            .class("btn-small")
            .text(label)
            .build();
        let state_btn = state.clone();
        let id = receipt.id;
        on_click(&button, move |_| {
            LogisticsViewModel::new().advance_receipt(&state_btn, id, status);
        })?;
        append_child(&actions, &button)?;
    }

    let delete = ElementBuilder::new("button")?
        .class("btn-small btn-danger")
        .text("Delete")
        .build();
    let state_del = state.clone();
    let id = receipt.id;
    on_click(&delete, move |_| {
        LogisticsViewModel::new().delete_receipt(&state_del, id);
    })?;
    append_child(&actions, &delete)?;

    append_child(&row, &actions)?;
    Ok(row)
}
