// ============================================================================
// DASHBOARD VIEW - KPIs y productos con stock bajo
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, on_click, ElementBuilder};
use crate::models::{StockStatus, ToastKind};
use crate::services::ApiClient;
use crate::state::AppState;
use crate::utils::{format_indian_number, format_inr};

pub fn render_dashboard(state: &AppState) -> Result<Element, JsValue> {
    let page = ElementBuilder::new("div")?.class("page dashboard").build();

    // Primer render sin stats cacheados: pedirlos una vez
    if state.dashboard_stats().is_none() {
        fetch_stats(state);
    }

    let header = ElementBuilder::new("div")?.class("page-header").build();
    let refresh = ElementBuilder::new("button")?
        .class("btn-secondary")
        .text("Refresh")
        .build();
    {
        let state = state.clone();
        on_click(&refresh, move |_| fetch_stats(&state))?;
    }
    append_child(&header, &refresh)?;
    append_child(&page, &header)?;

    let grid = ElementBuilder::new("div")?.class("kpi-grid").build();
    if let Some(stats) = state.dashboard_stats() {
        append_child(&grid, &kpi_card("📦", "Total Products", &format_indian_number(stats.total_products as i64))?)?;
        append_child(&grid, &kpi_card("🏭", "Warehouses", &format_indian_number(stats.total_warehouses as i64))?)?;
        append_child(&grid, &kpi_card("🧾", "Orders", &format_indian_number(stats.total_orders as i64))?)?;
        append_child(&grid, &kpi_card("🚚", "Pending Deliveries", &format_indian_number(stats.pending_deliveries as i64))?)?;
        append_child(&grid, &kpi_card("⚠️", "Low Stock", &format_indian_number(stats.low_stock_count as i64))?)?;
        append_child(&grid, &kpi_card("💰", "Total Revenue", &format_inr(stats.total_revenue))?)?;
    } else {
        let loading = ElementBuilder::new("div")?
            .class("kpi-loading")
            .text("Loading stats...")
            .build();
        append_child(&grid, &loading)?;
    }
    append_child(&page, &grid)?;

    append_child(&page, &render_low_stock(state)?)?;
    Ok(page)
}

fn kpi_card(icon: &str, label: &str, value: &str) -> Result<Element, JsValue> {
    let card = ElementBuilder::new("div")?
        .class("kpi-card")
        .html(&format!(
            "<span class=\"kpi-icon\">{}</span>\
             <div class=\"kpi-value\">{}</div>\
             <div class=\"kpi-label\">{}</div>",
            icon, value, label
        ))
        .build();
    Ok(card)
}

/// Tabla de productos por debajo de su stock mínimo (derivada en cliente)
fn render_low_stock(state: &AppState) -> Result<Element, JsValue> {
    let section = ElementBuilder::new("section")?.class("low-stock").build();
    let title = ElementBuilder::new("h3")?.text("Low Stock Products").build();
    append_child(&section, &title)?;

    let low: Vec<_> = state
        .products
        .items()
        .into_iter()
        .filter(|p| p.stock_status() == StockStatus::LowStock)
        .collect();

    if low.is_empty() {
        let empty = ElementBuilder::new("p")?
            .class("empty-state")
            .text("All products are sufficiently stocked.")
            .build();
        append_child(&section, &empty)?;
        return Ok(section);
    }

    let mut rows = String::new();
    for p in &low {
        rows.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td class=\"stock-low\">{}</td><td>{}</td></tr>",
            p.name, p.sku, p.stock, p.min_stock
        ));
    }
    let table = ElementBuilder::new("table")?
        .class("data-table")
        .html(&format!(
            "<thead><tr><th>Product</th><th>SKU</th><th>Stock</th><th>Min Stock</th></tr></thead>\
             <tbody>{}</tbody>",
            rows
        ))
        .build();
    append_child(&section, &table)?;
    Ok(section)
}

fn fetch_stats(state: &AppState) {
    let state = state.clone();
    spawn_local(async move {
        let api = ApiClient::new();
        match api.get_dashboard_stats().await {
            Ok(stats) => {
                state.set_dashboard_stats(Some(stats));
                state.notify_subscribers();
            }
            Err(e) => {
                log::error!("❌ Error cargando stats del dashboard: {}", e);
                state.toasts.show(e.to_string(), ToastKind::Error);
            }
        }
    });
}
