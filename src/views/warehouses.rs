// ============================================================================
// WAREHOUSES VIEW - Alta, edición y borrado de almacenes (solo admin)
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, clear_input, input_value, on_click, on_submit, ElementBuilder};
use crate::models::{NewWarehouse, ToastKind, Warehouse};
use crate::state::AppState;
use crate::viewmodels::InventoryViewModel;

pub fn render_warehouses(state: &AppState) -> Result<Element, JsValue> {
    let page = ElementBuilder::new("div")?.class("page warehouses").build();

    // Primer render de la página: pedir la lista una vez
    if !state.warehouses_loaded.get() {
        state.warehouses_loaded.set(true);
        let state_load = state.clone();
        spawn_local(async move {
            let _ = InventoryViewModel::new().load_warehouses(&state_load).await;
        });
    }

    let is_admin = state.auth.user().map(|u| u.role.is_admin()).unwrap_or(false);
    if is_admin {
        append_child(&page, &render_form(state)?)?;
    }
    append_child(&page, &render_table(state, is_admin)?)?;
    Ok(page)
}

fn render_form(state: &AppState) -> Result<Element, JsValue> {
    let form = crate::dom::create_element("form")?;
    form.set_class_name("inline-form");

    for (id, placeholder, input_type) in [
        ("warehouse-name", "Name", "text"),
        ("warehouse-location", "Location", "text"),
        ("warehouse-capacity", "Capacity (optional)", "number"),
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
        .text("Add Warehouse")
        .build();
    append_child(&form, &submit)?;

    let state = state.clone();
    on_submit(&form, move || {
        let name = input_value("warehouse-name");
        let location = input_value("warehouse-location");
        if name.is_empty() || location.is_empty() {
            state
                .toasts
                .show("Name and location are required", ToastKind::Warning);
            return;
        }
        let payload = NewWarehouse {
            name,
            location,
            capacity: input_value("warehouse-capacity").parse().ok(),
        };
        for id in ["warehouse-name", "warehouse-location", "warehouse-capacity"] {
            clear_input(id);
        }
        let state = state.clone();
        spawn_local(async move {
            let _ = InventoryViewModel::new().create_warehouse(&state, payload).await;
        });
    })?;

    Ok(form)
}

fn render_table(state: &AppState, is_admin: bool) -> Result<Element, JsValue> {
    let warehouses = state.warehouses.items();
    if warehouses.is_empty() {
        let empty = ElementBuilder::new("p")?
            .class("empty-state")
            .text("No warehouses configured.")
            .build();
        return Ok(empty);
    }

    let table = ElementBuilder::new("table")?.class("data-table").build();
    let head = ElementBuilder::new("thead")?
        .html("<tr><th>Name</th><th>Location</th><th>Capacity</th><th>Actions</th></tr>")
        .build();
    append_child(&table, &head)?;

    let body = ElementBuilder::new("tbody")?.build();
    for warehouse in warehouses {
        append_child(&body, &render_row(state, &warehouse, is_admin)?)?;
    }
    append_child(&table, &body)?;
    Ok(table)
}

fn render_row(state: &AppState, warehouse: &Warehouse, is_admin: bool) -> Result<Element, JsValue> {
    let row = ElementBuilder::new("tr")?.build();
    let capacity = warehouse
        .capacity
        .map(|c| c.to_string())
        .unwrap_or_else(|| "—".to_string());
    row.set_inner_html(&format!(
        "<td>{}</td><td>{}</td><td>{}</td>",
        warehouse.name, warehouse.location, capacity
    ));

    let actions = ElementBuilder::new("td")?.class("row-actions").build();
    if is_admin {
        // Renombrado en línea: aplica el valor del input de la fila
        let rename_input = ElementBuilder::new("input")?
            .id(&format!("warehouse-rename-{}", warehouse.id))?
            .attr("type", "text")?
            .attr("placeholder", "New name")?
            .class("qty-input")
            .build();
        append_child(&actions, &rename_input)?;

        let rename = ElementBuilder::new("button")?
            .class("btn-small")
            .text("Rename")
            .build();
        {
            let state = state.clone();
            let warehouse = warehouse.clone();
            on_click(&rename, move |_| {
                let name = input_value(&format!("warehouse-rename-{}", warehouse.id));
                if name.is_empty() {
                    return;
                }
                let payload = NewWarehouse {
                    name,
                    location: warehouse.location.clone(),
                    capacity: warehouse.capacity,
                };
                let state = state.clone();
                let id = warehouse.id;
                spawn_local(async move {
                    let _ = InventoryViewModel::new()
                        .update_warehouse(&state, id, payload)
                        .await;
                });
            })?;
        }
        append_child(&actions, &rename)?;

        let delete = ElementBuilder::new("button")?
            .class("btn-small btn-danger")
            .text("Delete")
            .build();
        let state = state.clone();
        let id = warehouse.id;
        on_click(&delete, move |_| {
            let state = state.clone();
            spawn_local(async move {
                let _ = InventoryViewModel::new().delete_warehouse(&state, id).await;
            });
        })?;
        append_child(&actions, &delete)?;
    }
    append_child(&row, &actions)?;
    Ok(row)
}
