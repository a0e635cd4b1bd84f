// ============================================================================
// ADJUSTMENTS VIEW - Ajustes de inventario (solo-cliente)
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, clear_input, input_value, on_click, on_submit, ElementBuilder};
use crate::models::{Adjustment, ToastKind};
use crate::state::AppState;
use crate::viewmodels::LogisticsViewModel;

pub fn render_adjustments(state: &AppState) -> Result<Element, JsValue> {
    let page = ElementBuilder::new("div")?.class("page adjustments").build();
    append_child(&page, &render_form(state)?)?;
    append_child(&page, &render_table(state)?)?;
    Ok(page)
}

fn render_form(state: &AppState) -> Result<Element, JsValue> {
    let form = crate::dom::create_element("form")?;
    form.set_class_name("inline-form");

    for (id, placeholder, input_type) in [
        ("adjustment-product", "Product", "text"),
        ("adjustment-recorded", "Recorded qty", "number"),
        ("adjustment-counted", "Counted qty", "number"),
        ("adjustment-unit", "Unit", "text"),
        ("adjustment-reason", "Reason", "text"),
        ("adjustment-date", "Date", "date"),
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
        .text("Record Adjustment")
        .build();
    append_child(&form, &submit)?;

    let state = state.clone();
    on_submit(&form, move || {
        let product = input_value("adjustment-product");
        if product.is_empty() {
            state
                .toasts
                .show("Product is required", ToastKind::Warning);
            return;
        }
        LogisticsViewModel::new().add_adjustment(
            &state,
            product,
            input_value("adjustment-recorded").parse().unwrap_or(0.0),
            input_value("adjustment-counted").parse().unwrap_or(0.0),
            input_value("adjustment-unit"),
            input_value("adjustment-reason"),
            input_value("adjustment-date"),
        );
        for id in [
            "adjustment-product",
            "adjustment-recorded",
            "adjustment-counted",
            "adjustment-unit",
            "adjustment-reason",
            "adjustment-date",
        ] {
            clear_input(id);
        }
    })?;

    Ok(form)
}

fn render_table(state: &AppState) -> Result<Element, JsValue> {
    let adjustments = state.adjustments.items();
    if adjustments.is_empty() {
        let empty = ElementBuilder::new("p")?
            .class("empty-state")
            .text("No adjustments recorded.")
            .build();
        return Ok(empty);
    }

    let table = ElementBuilder::new("table")?.class("data-table").build();
    let head = ElementBuilder::new("thead")?
        .html(
            "<tr><th>Ref</th><th>Product</th><th>Recorded</th><th>Counted</th>\
             <th>Difference</th><th>Reason</th><th>Date</th><th>Status</th><th>Actions</th></tr>",
        )
        .build();
    append_child(&table, &head)?;

    let body = ElementBuilder::new("tbody")?.build();
    for adjustment in adjustments {
        append_child(&body, &render_row(state, &adjustment)?)?;
    }
    append_child(&table, &body)?;
    Ok(table)
}

fn render_row(state: &AppState, adjustment: &Adjustment) -> Result<Element, JsValue> {
    let row = ElementBuilder::new("tr")?.build();
    let diff = adjustment.difference();
    let diff_class = if diff < 0.0 { "diff-negative" } else { "diff-positive" };
    row.set_inner_html(&format!(
        "<td>{}</td><td>{}</td><td>{} {}</td><td>{} {}</td>\
         <td class=\"{}\">{:+} {}</td><td>{}</td><td>{}</td>\
         <td><span class=\"status-badge status-{}\">{}</span></td>",
        adjustment.ref_id,
        adjustment.product,
        adjustment.recorded,
        adjustment.unit,
        adjustment.counted,
        adjustment.unit,
        diff_class,
        diff,
        adjustment.unit,
        adjustment.reason,
        adjustment.date,
        adjustment.status,
        adjustment.status
    ));

    let actions = ElementBuilder::new("td")?.class("row-actions").build();
    if !adjustment.status.is_terminal() {
        let complete = ElementBuilder::new("button")?
            .class("btn-small")
            .text("Complete")
            .build();
        let state = state.clone();
        let id = adjustment.id;
        on_click(&complete, move |_| {
            LogisticsViewModel::new().complete_adjustment(&state, id);
        })?;
        append_child(&actions, &complete)?;
    }
    append_child(&row, &actions)?;
    Ok(row)
}
