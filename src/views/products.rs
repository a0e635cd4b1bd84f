// ============================================================================
// PRODUCTS VIEW - Tabla de inventario, alta de productos, compra y export
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{
    append_child, clear_input, input_value, on_click, on_submit, ElementBuilder,
};
use crate::models::{NewProduct, Product, StockStatus, ToastKind};
use crate::state::AppState;
use crate::utils::format_inr;
use crate::viewmodels::InventoryViewModel;

pub fn render_products(state: &AppState) -> Result<Element, JsValue> {
    let page = ElementBuilder::new("div")?.class("page products").build();

    let header = ElementBuilder::new("div")?.class("page-header").build();
    let export = ElementBuilder::new("button")?
        .class("btn-secondary")
        .text("⬇ Export CSV")
        .build();
    {
        let state = state.clone();
        on_click(&export, move |_| {
            InventoryViewModel::new().export_products(&state);
        })?;
    }
    append_child(&header, &export)?;
    append_child(&page, &header)?;

    if state.auth.user().map(|u| u.role.is_admin()).unwrap_or(false) {
        append_child(&page, &render_add_form(state)?)?;
    }
    append_child(&page, &render_table(state)?)?;
    Ok(page)
}

/// Formulario de alta, que se convierte en formulario de edición cuando una
/// fila entra en modo editar.
fn render_add_form(state: &AppState) -> Result<Element, JsValue> {
    let editing = state
        .editing_product
        .borrow()
        .and_then(|id| state.products.get(id));

    let form = crate::dom::create_element("form")?;
    form.set_class_name("inline-form");

    let prefill = |field: fn(&Product) -> String| -> String {
        editing.as_ref().map(field).unwrap_or_default()
    };
    let fields: [(&str, &str, &str, String); 7] = [
        ("product-name", "Name", "text", prefill(|p| p.name.clone())),
        ("product-sku", "SKU", "text", prefill(|p| p.sku.clone())),
        ("product-category", "Category", "text", prefill(|p| p.category.clone())),
        ("product-unit", "Unit (kg, pcs...)", "text", prefill(|p| p.unit.clone())),
        ("product-price", "Price", "number", prefill(|p| p.price.to_string())),
        ("product-stock", "Stock", "number", prefill(|p| p.stock.to_string())),
        ("product-min-stock", "Min Stock", "number", prefill(|p| p.min_stock.to_string())),
    ];
    for (id, placeholder, input_type, value) in &fields {
        let input = ElementBuilder::new("input")?
            .id(id)?
            .attr("type", input_type)?
            .attr("placeholder", placeholder)?
            .attr("value", value)?
            .build();
        append_child(&form, &input)?;
    }

    let submit = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class("btn-primary")
        .text(if editing.is_some() {
            "Update Product"
        } else {
            "Add Product"
        })
        .build();
    append_child(&form, &submit)?;

    if editing.is_some() {
        let cancel = ElementBuilder::new("button")?
            .attr("type", "button")?
            .class("btn-secondary")
            .text("Cancel")
            .build();
        let state_cancel = state.clone();
        on_click(&cancel, move |_| {
            *state_cancel.editing_product.borrow_mut() = None;
            state_cancel.notify_subscribers();
        })?;
        append_child(&form, &cancel)?;
    }

    let state = state.clone();
    on_submit(&form, move || {
        let name = input_value("product-name");
        let sku = input_value("product-sku");
        if name.is_empty() || sku.is_empty() {
            state
                .toasts
                .show("Name and SKU are required", ToastKind::Warning);
            return;
        }
        let payload = NewProduct {
            name,
            sku,
            category: input_value("product-category"),
            unit: input_value("product-unit"),
            price: input_value("product-price").parse().unwrap_or(0.0),
            stock: input_value("product-stock").parse().unwrap_or(0),
            min_stock: input_value("product-min-stock").parse().unwrap_or(0),
            warehouse_id: None,
        };
        for id in [
            "product-name",
            "product-sku",
            "product-category",
            "product-unit",
            "product-price",
            "product-stock",
            "product-min-stock",
        ] {
            clear_input(id);
        }
        let editing_id = *state.editing_product.borrow();
        *state.editing_product.borrow_mut() = None;
        let state = state.clone();
        spawn_local(async move {
            let vm = InventoryViewModel::new();
            let _ = match editing_id {
                Some(id) => vm.update_product(&state, id, payload).await,
                None => vm.create_product(&state, payload).await,
            };
        });
    })?;

    Ok(form)
}

fn render_table(state: &AppState) -> Result<Element, JsValue> {
    let products = state.products.items();
    if products.is_empty() {
        let empty = ElementBuilder::new("p")?
            .class("empty-state")
            .text("No products yet. Add your first product above.")
            .build();
        return Ok(empty);
    }

    let table = ElementBuilder::new("table")?.class("data-table").build();
    let head = ElementBuilder::new("thead")?
        .html(
            "<tr><th>Name</th><th>SKU</th><th>Category</th><th>Price</th>\
             <th>Stock</th><th>Status</th><th>Actions</th></tr>",
        )
        .build();
    append_child(&table, &head)?;

    let body = ElementBuilder::new("tbody")?.build();
    let is_admin = state.auth.user().map(|u| u.role.is_admin()).unwrap_or(false);
    for product in products {
        append_child(&body, &render_row(state, &product, is_admin)?)?;
    }
    append_child(&table, &body)?;
    Ok(table)
}

fn render_row(state: &AppState, product: &Product, is_admin: bool) -> Result<Element, JsValue> {
    let row = ElementBuilder::new("tr")?.build();
    let status = product.stock_status();
    let status_class = match status {
        StockStatus::InStock => "status-ok",
        StockStatus::LowStock => "status-low",
    };
    row.set_inner_html(&format!(
        "<td>{}</td><td>{}</td><td>{}</td><td>{}</td>\
         <td>{} {}</td><td><span class=\"{}\">{}</span></td>",
        product.name,
        product.sku,
        product.category,
        format_inr(product.price),
        product.stock,
        product.unit,
        status_class,
        status
    ));

    let actions = ElementBuilder::new("td")?.class("row-actions").build();

    let qty_input = ElementBuilder::new("input")?
        .id(&format!("buy-qty-{}", product.id))?
        .attr("type", "number")
        .and_then(|b| b.attr("min", "1"))
        .and_then(|b| b.attr("value", "1"))?
        .class("qty-input")
        .build();
    append_child(&actions, &qty_input)?;

    let buy = ElementBuilder::new("button")?
        .class("btn-small")
        .text("Buy")
        .build();
    {
        let state = state.clone();
        let product = product.clone();
        on_click(&buy, move |_| {
            let quantity: u32 = input_value(&format!("buy-qty-{}", product.id))
                .parse()
                .unwrap_or(1);
            if quantity == 0 {
                return;
            }
            let state = state.clone();
            let product = product.clone();
            spawn_local(async move {
                let _ = InventoryViewModel::new()
                    .purchase(&state, &product, quantity)
                    .await;
            });
        })?;
    }
    append_child(&actions, &buy)?;

    if is_admin {
        let edit = ElementBuilder::new("button")?
            .class("btn-small")
            .text("Edit")
            .build();
        {
            let state = state.clone();
            let id = product.id;
            on_click(&edit, move |_| {
                *state.editing_product.borrow_mut() = Some(id);
                state.notify_subscribers();
            })?;
        }
        append_child(&actions, &edit)?;

        let delete = ElementBuilder::new("button")?
            .class("btn-small btn-danger")
            .text("Delete")
            .build();
        let state = state.clone();
        let id = product.id;
        on_click(&delete, move |_| {
            let state = state.clone();
            spawn_local(async move {
                let _ = InventoryViewModel::new().delete_product(&state, id).await;
            });
        })?;
        append_child(&actions, &delete)?;
    }

    append_child(&row, &actions)?;
    Ok(row)
}
